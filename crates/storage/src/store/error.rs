#![forbid(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported seed format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: String },
    #[error("duplicate solution id: {0}")]
    DuplicateId(String),
    #[error("invalid solution {id}: {message}")]
    InvalidSolution { id: String, message: String },
    #[error("revision mismatch (expected={expected}, actual={actual})")]
    RevisionMismatch { expected: u64, actual: u64 },
    #[error("unknown id")]
    UnknownId,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Json(_) => "INVALID_JSON",
            Self::Yaml(_) => "INVALID_YAML",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::InvalidSolution { .. } => "INVALID_SOLUTION",
            Self::RevisionMismatch { .. } => "REVISION_MISMATCH",
            Self::UnknownId => "UNKNOWN_ID",
        }
    }

    pub(crate) fn invalid(id: &str, message: impl Into<String>) -> Self {
        Self::InvalidSolution {
            id: id.to_string(),
            message: message.into(),
        }
    }
}
