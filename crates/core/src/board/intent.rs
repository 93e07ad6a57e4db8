#![forbid(unsafe_code)]

use super::drag::DragEffect;
use super::geometry::BucketRegion;
use super::layout::{LayoutMode, Panel};
use super::registry::StatusMove;
use crate::ids::SolutionId;
use crate::model::Status;
use serde::{Deserialize, Serialize};

/// A user intent emitted by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum BoardIntent {
    SetQuery {
        query: String,
    },
    SetTag {
        #[serde(default)]
        tag: Option<String>,
    },
    ToggleTag {
        tag: String,
    },
    SetCategory {
        #[serde(default)]
        category: Option<Status>,
    },
    ToggleCategory {
        category: Status,
    },
    ClearFilters,
    SetViewport {
        width: u32,
    },
    SelectTab {
        bucket: Status,
    },
    TogglePanel {
        panel: Panel,
    },
    SetRegions {
        regions: Vec<BucketRegion>,
    },
    PointerDown {
        item: String,
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    PointerCancel,
    SelectItem {
        item: String,
    },
    OpenRelated {
        item: String,
    },
    Back,
    CloseModal,
}

impl BoardIntent {
    pub fn name(&self) -> &'static str {
        match self {
            BoardIntent::SetQuery { .. } => "set_query",
            BoardIntent::SetTag { .. } => "set_tag",
            BoardIntent::ToggleTag { .. } => "toggle_tag",
            BoardIntent::SetCategory { .. } => "set_category",
            BoardIntent::ToggleCategory { .. } => "toggle_category",
            BoardIntent::ClearFilters => "clear_filters",
            BoardIntent::SetViewport { .. } => "set_viewport",
            BoardIntent::SelectTab { .. } => "select_tab",
            BoardIntent::TogglePanel { .. } => "toggle_panel",
            BoardIntent::SetRegions { .. } => "set_regions",
            BoardIntent::PointerDown { .. } => "pointer_down",
            BoardIntent::PointerMove { .. } => "pointer_move",
            BoardIntent::PointerUp { .. } => "pointer_up",
            BoardIntent::PointerCancel => "pointer_cancel",
            BoardIntent::SelectItem { .. } => "select_item",
            BoardIntent::OpenRelated { .. } => "open_related",
            BoardIntent::Back => "back",
            BoardIntent::CloseModal => "close_modal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    UnknownSolution,
    ModalClosed,
    NoPreviousItem,
    MoveRejected,
}

/// What applying an intent did. None of these are failures.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IntentOutcome {
    Updated,
    LayoutChanged {
        mode: LayoutMode,
    },
    Drag {
        effect: DragEffect,
    },
    StatusMoved {
        #[serde(flatten)]
        change: StatusMove,
    },
    Opened {
        item: SolutionId,
    },
    Closed,
    Noop {
        reason: NoopReason,
    },
}
