#![forbid(unsafe_code)]

use super::categorize::categorize;
use super::drag::DragState;
use super::filter::{FilterState, filter};
use crate::ids::SolutionId;
use crate::model::{Solution, Status};
use serde::{Deserialize, Serialize};

/// Widths below this render the narrow (tabbed) layout.
pub const DEFAULT_BREAKPOINT: u32 = 768;
const CARD_PREVIEW_CHARS: usize = 140;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Search,
    Tags,
}

/// Narrow-layout chrome: the visible tab and the two disclosure panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NarrowChrome {
    pub active_tab: Status,
    pub search_panel_open: bool,
    pub tags_panel_open: bool,
}

impl Default for NarrowChrome {
    fn default() -> Self {
        Self {
            active_tab: Status::Planned,
            search_panel_open: false,
            tags_panel_open: false,
        }
    }
}

impl NarrowChrome {
    pub fn toggle(&mut self, panel: Panel) {
        match panel {
            Panel::Search => self.search_panel_open = !self.search_panel_open,
            Panel::Tags => self.tags_panel_open = !self.tags_panel_open,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: SolutionId,
    pub title: String,
    pub preview: String,
    pub status: Status,
    pub progress: u8,
    pub tags: Vec<String>,
    pub date: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_dragging: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Column {
    pub bucket: Status,
    pub label: &'static str,
    pub count: usize,
    pub is_drop_target: bool,
    pub items: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub bucket: Status,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub tag: String,
    pub active: bool,
}

/// Filtered and categorized board content shared by both layouts. Layouts
/// only rearrange it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardModel {
    pub filter: FilterState,
    pub total: usize,
    pub tags: Vec<TagChip>,
    pub columns: Vec<Column>,
}

impl BoardModel {
    pub fn build(
        items: &[Solution],
        state: &FilterState,
        drag: &DragState,
        tag_catalog: Vec<String>,
    ) -> Self {
        let (dragged, hover) = match drag {
            DragState::Dragging { item, hover, .. } => (Some(item), *hover),
            _ => (None, None),
        };
        let buckets = categorize(filter(items, state));
        let columns = buckets
            .iter()
            .map(|(bucket, in_bucket)| Column {
                bucket,
                label: bucket.label(),
                count: in_bucket.len(),
                is_drop_target: hover == Some(bucket),
                items: in_bucket
                    .iter()
                    .map(|item| Card {
                        id: item.id.clone(),
                        title: item.title.clone(),
                        preview: item.preview(CARD_PREVIEW_CHARS),
                        status: item.status,
                        progress: item.progress,
                        tags: item.tags.clone(),
                        date: item.date.clone(),
                        thumbnail_url: item.thumbnail_url.clone(),
                        is_dragging: dragged == Some(&item.id),
                    })
                    .collect(),
            })
            .collect();
        let tags = tag_catalog
            .into_iter()
            .map(|tag| TagChip {
                active: state.tag.as_deref() == Some(tag.as_str()),
                tag,
            })
            .collect();
        Self {
            filter: state.clone(),
            total: buckets.total(),
            tags,
            columns,
        }
    }

    pub fn column(&self, bucket: Status) -> Option<&Column> {
        self.columns.iter().find(|column| column.bucket == bucket)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoardView {
    Wide {
        filter: FilterState,
        total: usize,
        tags: Vec<TagChip>,
        columns: Vec<Column>,
    },
    Narrow {
        filter: FilterState,
        total: usize,
        tags: Vec<TagChip>,
        tabs: Vec<Tab>,
        active: Column,
        search_panel_open: bool,
        tags_panel_open: bool,
    },
}

impl BoardView {
    pub fn mode(&self) -> LayoutMode {
        match self {
            BoardView::Wide { .. } => LayoutMode::Wide,
            BoardView::Narrow { .. } => LayoutMode::Narrow,
        }
    }
}

pub fn wide_layout(model: BoardModel) -> BoardView {
    BoardView::Wide {
        filter: model.filter,
        total: model.total,
        tags: model.tags,
        columns: model.columns,
    }
}

pub fn narrow_layout(model: BoardModel, chrome: &NarrowChrome) -> BoardView {
    let tabs = model
        .columns
        .iter()
        .map(|column| Tab {
            bucket: column.bucket,
            label: column.label,
            count: column.count,
            active: column.bucket == chrome.active_tab,
        })
        .collect();
    let mut columns = model.columns;
    let position = columns
        .iter()
        .position(|column| column.bucket == chrome.active_tab)
        .unwrap_or(0);
    let active = columns.swap_remove(position);
    BoardView::Narrow {
        filter: model.filter,
        total: model.total,
        tags: model.tags,
        tabs,
        active,
        search_panel_open: chrome.search_panel_open,
        tags_panel_open: chrome.tags_panel_open,
    }
}
