#![forbid(unsafe_code)]

use crate::model::{Solution, Status};
use serde::{Deserialize, Serialize};

/// Session-scoped filter. The three criteria combine with AND; an empty
/// query, `tag: None` and `category: None` each mean "no filtering".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub category: Option<Status>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        normalized_query(&self.query).is_none() && self.tag.is_none() && self.category.is_none()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag.filter(|tag| !tag.trim().is_empty());
    }

    /// Clicking the active tag clears it; clicking another tag replaces it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if tag.trim().is_empty() || self.tag.as_deref() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_string());
        }
    }

    pub fn set_category(&mut self, category: Option<Status>) {
        self.category = category;
    }

    pub fn toggle_category(&mut self, category: Status) {
        if self.category == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: normalized_query(&self.query),
            tag: self.tag.as_deref(),
            category: self.category,
        }
    }

    pub fn matches(&self, item: &Solution) -> bool {
        self.matcher().matches(item)
    }
}

/// A [`FilterState`] with the query lowered once, so a pass over the registry
/// does not redo it per item.
#[derive(Clone, Debug)]
pub struct Matcher<'f> {
    needle: Option<String>,
    tag: Option<&'f str>,
    category: Option<Status>,
}

impl Matcher<'_> {
    pub fn matches(&self, item: &Solution) -> bool {
        if let Some(category) = self.category
            && item.status != category
        {
            return false;
        }
        if let Some(tag) = self.tag
            && !item.has_tag(tag)
        {
            return false;
        }
        match self.needle.as_deref() {
            None => true,
            Some(needle) => {
                item.title.to_lowercase().contains(needle)
                    || item.description.to_lowercase().contains(needle)
            }
        }
    }
}

/// Whitespace-only queries count as no query. Anything else is matched as
/// typed, surrounding spaces included.
pub fn normalized_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Ordered subset of `items` accepted by `state`.
pub fn filter<'a>(items: &'a [Solution], state: &FilterState) -> Vec<&'a Solution> {
    let matcher = state.matcher();
    items.iter().filter(|item| matcher.matches(item)).collect()
}

pub fn tag_catalog(items: &[Solution]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        for tag in &item.tags {
            if !out.iter().any(|seen| seen == tag) {
                out.push(tag.clone());
            }
        }
    }
    out
}
