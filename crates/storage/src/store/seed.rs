#![forbid(unsafe_code)]

use super::StoreError;
use sb_core::model::Solution;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub(crate) const DEFAULT_SEED: &str = include_str!("../../seed/solutions.json");

/// The wrapped seed shape, `{ "solutions": [...] }`. A bare list is the other.
#[derive(Deserialize)]
struct WrappedSeed {
    solutions: Vec<Solution>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    pub(crate) fn from_path(path: &Path) -> Result<Self, StoreError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(SeedFormat::Json),
            Some("yaml" | "yml") => Ok(SeedFormat::Yaml),
            _ => Err(StoreError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// The top-level shape is decided up front so field errors keep their
/// location instead of surfacing as an untagged mismatch.
pub(crate) fn parse(text: &str, format: SeedFormat) -> Result<Vec<Solution>, StoreError> {
    match format {
        SeedFormat::Json => {
            if text.trim_start().starts_with('{') {
                Ok(serde_json::from_str::<WrappedSeed>(text)?.solutions)
            } else {
                Ok(serde_json::from_str(text)?)
            }
        }
        SeedFormat::Yaml => {
            let peek: serde_yaml::Value = serde_yaml::from_str(text)?;
            if peek.is_mapping() {
                Ok(serde_yaml::from_str::<WrappedSeed>(text)?.solutions)
            } else {
                Ok(serde_yaml::from_str(text)?)
            }
        }
    }
}

/// Normalizes every solution in place and rejects the set on the first
/// invalid entry. Ids were already validated by deserialization.
pub(crate) fn validate(solutions: Vec<Solution>) -> Result<Vec<Solution>, StoreError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(solutions.len());
    for solution in solutions {
        if !seen.insert(solution.id.clone()) {
            return Err(StoreError::DuplicateId(solution.id.to_string()));
        }
        out.push(normalize(solution)?);
    }
    Ok(out)
}

fn normalize(mut solution: Solution) -> Result<Solution, StoreError> {
    let id = solution.id.as_str().to_string();

    solution.title = solution.title.trim().to_string();
    if solution.title.is_empty() {
        return Err(StoreError::invalid(&id, "title must not be empty"));
    }
    if solution.progress > 100 {
        return Err(StoreError::invalid(
            &id,
            format!("progress must be within 0..=100 (got {})", solution.progress),
        ));
    }

    let mut tags: Vec<String> = Vec::with_capacity(solution.tags.len());
    for tag in &solution.tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if tag.chars().any(char::is_control) {
            return Err(StoreError::invalid(&id, "tags must not contain control characters"));
        }
        if !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    solution.tags = tags;

    solution.related_ids = solution
        .related_ids
        .iter()
        .map(|related| related.trim())
        .filter(|related| !related.is_empty())
        .map(str::to_string)
        .collect();

    solution.date = non_blank(solution.date);
    solution.link = non_blank(solution.link);
    solution.detail_renderer_key = non_blank(solution.detail_renderer_key);
    solution.thumbnail_url = non_blank(solution.thumbnail_url);
    solution.preview_text = non_blank(solution.preview_text);
    Ok(solution)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
