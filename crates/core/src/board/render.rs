#![forbid(unsafe_code)]

use crate::model::{Solution, Status};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

pub const GENERIC_RENDERER: &str = "generic";
pub const CASE_STUDY_RENDERER: &str = "case_study";
pub const PROGRESS_REPORT_RENDERER: &str = "progress_report";
pub const IMPACT_SUMMARY_RENDERER: &str = "impact_summary";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: String },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    Metric { label: String, value: String },
    Progress { percent: u8 },
    Link { label: String, url: String },
    Tags { tags: Vec<String> },
}

/// Renderer-specific body of the detail modal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderedContent {
    pub blocks: Vec<ContentBlock>,
}

impl RenderedContent {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn push(&mut self, block: ContentBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    fn heading(&mut self, text: &str) -> &mut Self {
        self.push(ContentBlock::Heading {
            text: text.to_string(),
        })
    }

    /// Skips blank text so renderers do not emit empty paragraphs.
    fn paragraph(&mut self, text: &str) -> &mut Self {
        let text = text.trim();
        if !text.is_empty() {
            self.push(ContentBlock::Paragraph {
                text: text.to_string(),
            });
        }
        self
    }

    fn tags(&mut self, tags: &[String]) -> &mut Self {
        if !tags.is_empty() {
            self.push(ContentBlock::Tags {
                tags: tags.to_vec(),
            });
        }
        self
    }

    fn link(&mut self, solution: &Solution) -> &mut Self {
        if let Some(url) = solution.link.as_deref().map(str::trim)
            && !url.is_empty()
        {
            self.push(ContentBlock::Link {
                label: "Learn more".to_string(),
                url: url.to_string(),
            });
        }
        self
    }
}

pub type RendererFn = Arc<dyn Fn(&Solution) -> RenderedContent + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RendererKeyError {
    #[error("renderer key must not be empty")]
    Empty,
}

/// The renderer picked for a key, and the key that actually matched.
#[derive(Clone)]
pub struct ResolvedRenderer<'r> {
    pub key: &'r str,
    renderer: &'r RendererFn,
}

impl ResolvedRenderer<'_> {
    pub fn render(&self, solution: &Solution) -> RenderedContent {
        (self.renderer)(solution)
    }

    pub fn is_fallback(&self) -> bool {
        self.key == GENERIC_RENDERER
    }
}

/// Named detail renderers. Lookups never fail: any key that is absent or not
/// registered resolves to the generic renderer.
#[derive(Clone)]
pub struct RendererRegistry {
    renderers: HashMap<String, RendererFn>,
    fallback: RendererFn,
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: Arc::new(render_generic),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.insert(CASE_STUDY_RENDERER, Arc::new(render_case_study));
        registry.insert(PROGRESS_REPORT_RENDERER, Arc::new(render_progress_report));
        registry.insert(IMPACT_SUMMARY_RENDERER, Arc::new(render_impact_summary));
        registry
    }

    /// Registering under the generic key replaces the fallback itself.
    pub fn register(
        &mut self,
        key: &str,
        renderer: impl Fn(&Solution) -> RenderedContent + Send + Sync + 'static,
    ) -> Result<(), RendererKeyError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(RendererKeyError::Empty);
        }
        self.insert(key, Arc::new(renderer));
        Ok(())
    }

    fn insert(&mut self, key: &str, renderer: RendererFn) {
        if key == GENERIC_RENDERER {
            self.fallback = renderer;
        } else {
            self.renderers.insert(key.to_string(), renderer);
        }
    }

    /// The fallback cannot be removed; returns whether a renderer was dropped.
    pub fn unregister(&mut self, key: &str) -> bool {
        self.renderers.remove(key.trim()).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        let key = key.trim();
        key == GENERIC_RENDERER || self.renderers.contains_key(key)
    }

    pub fn resolve(&self, key: Option<&str>) -> ResolvedRenderer<'_> {
        let found = key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .and_then(|key| self.renderers.get_key_value(key));
        match found {
            Some((key, renderer)) => ResolvedRenderer {
                key: key.as_str(),
                renderer,
            },
            None => ResolvedRenderer {
                key: GENERIC_RENDERER,
                renderer: &self.fallback,
            },
        }
    }

    pub fn render(&self, solution: &Solution) -> (String, RenderedContent) {
        let resolved = self.resolve(solution.detail_renderer_key.as_deref());
        (resolved.key.to_string(), resolved.render(solution))
    }

    /// Sorted, fallback included.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        keys.push(GENERIC_RENDERER);
        keys.sort_unstable();
        keys
    }
}

pub fn render_generic(solution: &Solution) -> RenderedContent {
    let mut content = RenderedContent::default();
    content.paragraph(&solution.description);
    if !solution.impact.trim().is_empty() {
        content.heading("Impact").paragraph(&solution.impact);
    }
    content.tags(&solution.tags).link(solution);
    content
}

pub fn render_case_study(solution: &Solution) -> RenderedContent {
    let mut content = RenderedContent::default();
    content.heading("Challenge").paragraph(&solution.description);
    if !solution.impact.trim().is_empty() {
        content.heading("Outcome").paragraph(&solution.impact);
    }
    if !solution.tags.is_empty() {
        content.heading("Stack").push(ContentBlock::Bullets {
            items: solution.tags.clone(),
        });
    }
    if let Some(date) = solution.date.as_deref() {
        content.push(ContentBlock::Metric {
            label: "Delivered".to_string(),
            value: date.to_string(),
        });
    }
    content.link(solution);
    content
}

pub fn render_progress_report(solution: &Solution) -> RenderedContent {
    let mut content = RenderedContent::default();
    content
        .push(ContentBlock::Metric {
            label: "Stage".to_string(),
            value: solution.status.label().to_string(),
        })
        .push(ContentBlock::Progress {
            percent: solution.progress.min(100),
        });
    let next = match solution.status {
        Status::Planned => "Scoping and discovery",
        Status::InProgress => "Active build and iteration",
        Status::Completed => "Delivered and in use",
    };
    content.heading("Current phase").paragraph(next);
    content.paragraph(&solution.description);
    content.tags(&solution.tags).link(solution);
    content
}

pub fn render_impact_summary(solution: &Solution) -> RenderedContent {
    let mut content = RenderedContent::default();
    let impact = solution.impact.trim();
    if impact.is_empty() {
        content.paragraph(&solution.description);
    } else {
        let points: Vec<String> = impact
            .split(['.', ';', '\n'])
            .map(str::trim)
            .filter(|point| !point.is_empty())
            .map(str::to_string)
            .collect();
        content.heading("Impact").push(ContentBlock::Bullets { items: points });
        content.heading("Context").paragraph(&solution.description);
    }
    content.tags(&solution.tags).link(solution);
    content
}
