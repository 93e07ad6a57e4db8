#![forbid(unsafe_code)]

pub mod board;

pub mod ids {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub struct SolutionId(String);

    impl SolutionId {
        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn into_string(self) -> String {
            self.0
        }

        pub fn try_new(value: impl Into<String>) -> Result<Self, SolutionIdError> {
            let value = value.into();
            let trimmed = value.trim();
            validate_solution_id(trimmed)?;
            Ok(Self(trimmed.to_string()))
        }
    }

    impl std::fmt::Display for SolutionId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl TryFrom<String> for SolutionId {
        type Error = SolutionIdError;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            Self::try_new(value)
        }
    }

    impl From<SolutionId> for String {
        fn from(value: SolutionId) -> Self {
            value.0
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum SolutionIdError {
        #[error("solution id must not be empty")]
        Empty,
        #[error("solution id is too long")]
        TooLong,
        #[error("solution id contains control characters")]
        ContainsControl,
        #[error("solution id must not contain whitespace")]
        ContainsWhitespace,
    }

    impl SolutionIdError {
        pub fn code(&self) -> &'static str {
            match self {
                Self::Empty => "EMPTY",
                Self::TooLong => "TOO_LONG",
                Self::ContainsControl => "CONTAINS_CONTROL",
                Self::ContainsWhitespace => "CONTAINS_WHITESPACE",
            }
        }
    }

    fn validate_solution_id(value: &str) -> Result<(), SolutionIdError> {
        if value.is_empty() {
            return Err(SolutionIdError::Empty);
        }
        if value.len() > 128 {
            return Err(SolutionIdError::TooLong);
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(SolutionIdError::ContainsControl);
        }
        if value.chars().any(|c| c.is_whitespace()) {
            return Err(SolutionIdError::ContainsWhitespace);
        }
        Ok(())
    }
}

pub mod model {
    use crate::ids::SolutionId;
    use serde::{Deserialize, Serialize};

    /// Board bucket a solution lives in. The order of [`Status::ALL`] is the
    /// left-to-right column order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub enum Status {
        Planned,
        InProgress,
        Completed,
    }

    impl Status {
        pub const ALL: [Status; 3] = [Status::Planned, Status::InProgress, Status::Completed];

        pub fn as_str(self) -> &'static str {
            match self {
                Status::Planned => "planned",
                Status::InProgress => "in_progress",
                Status::Completed => "completed",
            }
        }

        pub fn label(self) -> &'static str {
            match self {
                Status::Planned => "Blueprint",
                Status::InProgress => "Workbench",
                Status::Completed => "Showcase",
            }
        }

        pub fn index(self) -> usize {
            match self {
                Status::Planned => 0,
                Status::InProgress => 1,
                Status::Completed => 2,
            }
        }

        /// Accepts the canonical names and the legacy board names
        /// (`blueprint`, `workbench`, `showcase`), ignoring case; `-` and `_`
        /// are interchangeable.
        pub fn parse(value: &str) -> Result<Self, StatusParseError> {
            let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
            match normalized.as_str() {
                "planned" | "blueprint" => Ok(Status::Planned),
                "in_progress" | "workbench" => Ok(Status::InProgress),
                "completed" | "showcase" => Ok(Status::Completed),
                "" => Err(StatusParseError::Empty),
                _ => Err(StatusParseError::Unknown(value.trim().to_string())),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl std::str::FromStr for Status {
        type Err = StatusParseError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Self::parse(s)
        }
    }

    impl TryFrom<String> for Status {
        type Error = StatusParseError;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            Self::parse(&value)
        }
    }

    impl From<Status> for String {
        fn from(value: Status) -> Self {
            value.as_str().to_string()
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum StatusParseError {
        #[error("status must not be empty")]
        Empty,
        #[error("unknown status: {0} (expected planned, in_progress or completed)")]
        Unknown(String),
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Solution {
        pub id: SolutionId,
        pub title: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub impact: String,
        pub status: Status,
        #[serde(default)]
        pub progress: u8,
        #[serde(default)]
        pub tags: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub link: Option<String>,
        /// Weak references; ids that no longer resolve are skipped on display.
        #[serde(default, alias = "relatedIds")]
        pub related_ids: Vec<String>,
        #[serde(
            default,
            alias = "detailRendererKey",
            alias = "detailComponent",
            skip_serializing_if = "Option::is_none"
        )]
        pub detail_renderer_key: Option<String>,
        #[serde(
            default,
            alias = "thumbnailUrl",
            skip_serializing_if = "Option::is_none"
        )]
        pub thumbnail_url: Option<String>,
        #[serde(default, alias = "previewText", skip_serializing_if = "Option::is_none")]
        pub preview_text: Option<String>,
    }

    impl Solution {
        pub fn has_tag(&self, tag: &str) -> bool {
            self.tags.iter().any(|candidate| candidate == tag)
        }

        /// Short card text: the explicit preview if present, else the
        /// description cut at `max_chars`.
        pub fn preview(&self, max_chars: usize) -> String {
            if let Some(preview) = self.preview_text.as_deref()
                && !preview.trim().is_empty()
            {
                return preview.trim().to_string();
            }
            let description = self.description.trim();
            if description.chars().count() <= max_chars {
                return description.to_string();
            }
            let mut out: String = description.chars().take(max_chars).collect();
            if let Some(pos) = out.rfind(char::is_whitespace) {
                out.truncate(pos);
            }
            out.truncate(out.trim_end().len());
            out.push('…');
            out
        }
    }

    /// How `progress` (and `date`) follow a status change.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ProgressPolicy {
        #[default]
        Derive,
        Independent,
    }

    impl ProgressPolicy {
        pub const IN_PROGRESS_DEFAULT: u8 = 50;

        pub fn as_str(self) -> &'static str {
            match self {
                ProgressPolicy::Derive => "derive",
                ProgressPolicy::Independent => "independent",
            }
        }

        /// Moves `solution` to `to`. `today` stamps the date of newly
        /// completed items under [`ProgressPolicy::Derive`].
        pub fn apply(self, solution: &mut Solution, to: Status, today: &str) {
            let from = solution.status;
            solution.status = to;
            if self == ProgressPolicy::Independent || from == to {
                return;
            }
            match to {
                Status::Planned => solution.progress = 0,
                Status::InProgress => {
                    if !(1..=99).contains(&solution.progress) {
                        solution.progress = Self::IN_PROGRESS_DEFAULT;
                    }
                }
                Status::Completed => {
                    solution.progress = 100;
                    if solution.date.is_none() {
                        solution.date = Some(today.to_string());
                    }
                }
            }
            if from == Status::Completed {
                solution.date = None;
            }
        }
    }
}
