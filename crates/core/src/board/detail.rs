#![forbid(unsafe_code)]

use super::registry::SolutionRegistry;
use super::render::{RenderedContent, RendererRegistry};
use crate::ids::SolutionId;
use crate::model::{Solution, Status};
use serde::Serialize;
use std::collections::VecDeque;

pub const MAX_BACK_STACK: usize = 16;
const RELATED_PREVIEW_CHARS: usize = 120;

/// Which solution the detail modal shows, plus a bounded back-stack for
/// related-item navigation. Opening never stacks modals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailModal {
    current: Option<SolutionId>,
    back: VecDeque<SolutionId>,
}

impl DetailModal {
    pub fn current(&self) -> Option<&SolutionId> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn back_depth(&self) -> usize {
        self.back.len()
    }

    /// Opening from the board starts a fresh navigation.
    pub fn open(&mut self, id: SolutionId) {
        self.back.clear();
        self.current = Some(id);
    }

    pub fn open_related(&mut self, id: SolutionId) {
        if let Some(previous) = self.current.replace(id) {
            if self.back.len() == MAX_BACK_STACK {
                self.back.pop_front();
            }
            self.back.push_back(previous);
        }
    }

    pub fn back(&mut self) -> bool {
        match self.back.pop_back() {
            Some(previous) => {
                self.current = Some(previous);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.current = None;
        self.back.clear();
    }
}

/// Related solutions that still resolve, in `related_ids` order. Dangling
/// ids are skipped; every id that resolves is kept, repeats included.
pub fn resolve_related<'r, R>(registry: &'r R, solution: &Solution) -> Vec<&'r Solution>
where
    R: SolutionRegistry + ?Sized,
{
    solution
        .related_ids
        .iter()
        .filter_map(|id| registry.get(id.trim()))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelatedCard {
    pub id: SolutionId,
    pub title: String,
    pub status: Status,
    pub status_label: &'static str,
    pub preview: String,
}

impl RelatedCard {
    fn from_solution(solution: &Solution) -> Self {
        Self {
            id: solution.id.clone(),
            title: solution.title.clone(),
            status: solution.status,
            status_label: solution.status.label(),
            preview: solution.preview(RELATED_PREVIEW_CHARS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: SolutionId,
    pub title: String,
    pub status: Status,
    pub status_label: &'static str,
    pub progress: u8,
    pub date: Option<String>,
    pub description: String,
    pub impact: String,
    pub link: Option<String>,
    pub tags: Vec<String>,
    pub renderer: String,
    pub body: RenderedContent,
    pub related: Vec<RelatedCard>,
    pub can_go_back: bool,
}

impl DetailView {
    pub fn build<R>(registry: &R, renderers: &RendererRegistry, modal: &DetailModal) -> Option<Self>
    where
        R: SolutionRegistry + ?Sized,
    {
        let solution = registry.get(modal.current()?.as_str())?;
        let (renderer, body) = renderers.render(solution);
        let related = resolve_related(registry, solution)
            .into_iter()
            .map(RelatedCard::from_solution)
            .collect();
        Some(Self {
            id: solution.id.clone(),
            title: solution.title.clone(),
            status: solution.status,
            status_label: solution.status.label(),
            progress: solution.progress,
            date: solution.date.clone(),
            description: solution.description.clone(),
            impact: solution.impact.clone(),
            link: solution.link.clone(),
            tags: solution.tags.clone(),
            renderer,
            body,
            related,
            can_go_back: modal.can_go_back(),
        })
    }
}
