#![forbid(unsafe_code)]

use super::detail::{DetailModal, DetailView};
use super::drag::{DEFAULT_DRAG_THRESHOLD, DragConfigError, DragController, DragEffect, DragState};
use super::filter::FilterState;
use super::geometry::{BucketRegion, Point};
use super::intent::{BoardIntent, IntentOutcome, NoopReason};
use super::layout::{
    BoardModel, BoardView, DEFAULT_BREAKPOINT, LayoutMode, NarrowChrome, Panel, narrow_layout,
    wide_layout,
};
use super::registry::SolutionRegistry;
use super::render::RendererRegistry;
use crate::model::Status;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub breakpoint: u32,
    pub drag_threshold: f64,
    pub viewport_width: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionConfigError {
    #[error("layout breakpoint must be greater than zero")]
    ZeroBreakpoint,
    #[error(transparent)]
    Drag(#[from] DragConfigError),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub mode: LayoutMode,
    pub viewport_width: u32,
    pub board: BoardView,
    pub detail: Option<DetailView>,
    pub drag: DragState,
}

/// One user's board: the registry plus every piece of UI state that sits on
/// top of it. Both layouts render from the same filtered model.
#[derive(Debug)]
pub struct BoardSession<R> {
    registry: R,
    renderers: RendererRegistry,
    filter: FilterState,
    breakpoint: u32,
    viewport_width: u32,
    mode: LayoutMode,
    chrome: NarrowChrome,
    regions: Vec<BucketRegion>,
    drag: DragController,
    modal: DetailModal,
}

impl<R: SolutionRegistry> BoardSession<R> {
    pub fn new(registry: R, config: SessionConfig) -> Result<Self, SessionConfigError> {
        if config.breakpoint == 0 {
            return Err(SessionConfigError::ZeroBreakpoint);
        }
        let drag = DragController::new(config.drag_threshold)?;
        Ok(Self {
            registry,
            renderers: RendererRegistry::with_builtins(),
            filter: FilterState::default(),
            breakpoint: config.breakpoint,
            viewport_width: config.viewport_width,
            mode: LayoutMode::for_width(config.viewport_width, config.breakpoint),
            chrome: NarrowChrome::default(),
            regions: Vec::new(),
            drag,
            modal: DetailModal::default(),
        })
    }

    pub fn with_renderers(mut self, renderers: RendererRegistry) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn renderers(&self) -> &RendererRegistry {
        &self.renderers
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn chrome(&self) -> &NarrowChrome {
        &self.chrome
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn apply(&mut self, intent: BoardIntent) -> IntentOutcome {
        debug!(intent = intent.name(), "board intent");
        match intent {
            BoardIntent::SetQuery { query } => {
                self.filter.set_query(query);
                IntentOutcome::Updated
            }
            BoardIntent::SetTag { tag } => {
                self.filter.set_tag(tag);
                IntentOutcome::Updated
            }
            BoardIntent::ToggleTag { tag } => {
                self.filter.toggle_tag(&tag);
                IntentOutcome::Updated
            }
            BoardIntent::SetCategory { category } => {
                self.filter.set_category(category);
                self.follow_category();
                IntentOutcome::Updated
            }
            BoardIntent::ToggleCategory { category } => {
                self.filter.toggle_category(category);
                self.follow_category();
                IntentOutcome::Updated
            }
            BoardIntent::ClearFilters => {
                self.filter.clear();
                IntentOutcome::Updated
            }
            BoardIntent::SetViewport { width } => self.set_viewport(width),
            BoardIntent::SelectTab { bucket } => {
                self.chrome.active_tab = bucket;
                IntentOutcome::Updated
            }
            BoardIntent::TogglePanel { panel } => {
                self.toggle_panel(panel);
                IntentOutcome::Updated
            }
            BoardIntent::SetRegions { regions } => {
                self.regions = regions;
                IntentOutcome::Updated
            }
            BoardIntent::PointerDown { item, x, y } => self.pointer_down(&item, Point::new(x, y)),
            BoardIntent::PointerMove { x, y } => IntentOutcome::Drag {
                effect: self.drag.pointer_move(Point::new(x, y), &self.regions),
            },
            BoardIntent::PointerUp { x, y } => self.pointer_up(Point::new(x, y)),
            BoardIntent::PointerCancel => IntentOutcome::Drag {
                effect: self.drag.cancel(),
            },
            BoardIntent::SelectItem { item } => self.select_item(&item),
            BoardIntent::OpenRelated { item } => self.open_related(&item),
            BoardIntent::Back => {
                if !self.modal.back() {
                    return IntentOutcome::Noop {
                        reason: NoopReason::NoPreviousItem,
                    };
                }
                match self.modal.current() {
                    Some(item) => IntentOutcome::Opened { item: item.clone() },
                    None => IntentOutcome::Closed,
                }
            }
            BoardIntent::CloseModal => {
                if !self.modal.is_open() {
                    return IntentOutcome::Noop {
                        reason: NoopReason::ModalClosed,
                    };
                }
                self.modal.close();
                IntentOutcome::Closed
            }
        }
    }

    /// Re-evaluates the layout mode; called on every viewport change, not
    /// only at startup.
    pub fn set_viewport(&mut self, width: u32) -> IntentOutcome {
        self.viewport_width = width;
        let mode = LayoutMode::for_width(width, self.breakpoint);
        if mode == self.mode {
            return IntentOutcome::Updated;
        }
        debug!(width, ?mode, "layout mode changed");
        self.mode = mode;
        IntentOutcome::LayoutChanged { mode }
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        self.chrome.toggle(panel);
    }

    pub fn select_item(&mut self, id: &str) -> IntentOutcome {
        let Some(solution) = self.registry.get(id.trim()) else {
            return IntentOutcome::Noop {
                reason: NoopReason::UnknownSolution,
            };
        };
        let item = solution.id.clone();
        self.modal.open(item.clone());
        IntentOutcome::Opened { item }
    }

    pub fn open_related(&mut self, id: &str) -> IntentOutcome {
        let Some(solution) = self.registry.get(id.trim()) else {
            return IntentOutcome::Noop {
                reason: NoopReason::UnknownSolution,
            };
        };
        let item = solution.id.clone();
        self.modal.open_related(item.clone());
        IntentOutcome::Opened { item }
    }

    pub fn view(&self) -> BoardView {
        let model = BoardModel::build(
            self.registry.solutions(),
            &self.filter,
            self.drag.state(),
            self.registry.tag_catalog(),
        );
        match self.mode {
            LayoutMode::Wide => wide_layout(model),
            LayoutMode::Narrow => narrow_layout(model, &self.chrome),
        }
    }

    pub fn detail(&self) -> Option<DetailView> {
        DetailView::build(&self.registry, &self.renderers, &self.modal)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            viewport_width: self.viewport_width,
            board: self.view(),
            detail: self.detail(),
            drag: self.drag.state().clone(),
        }
    }

    fn follow_category(&mut self) {
        if let Some(category) = self.filter.category {
            self.chrome.active_tab = category;
        }
    }

    fn pointer_down(&mut self, id: &str, at: Point) -> IntentOutcome {
        let Some(solution) = self.registry.get(id.trim()) else {
            return IntentOutcome::Noop {
                reason: NoopReason::UnknownSolution,
            };
        };
        let effect = self.drag.pointer_down(solution.id.clone(), solution.status, at);
        IntentOutcome::Drag { effect }
    }

    fn pointer_up(&mut self, at: Point) -> IntentOutcome {
        match self.drag.pointer_up(at, &self.regions) {
            DragEffect::Click { item } => self.select_item(item.as_str()),
            DragEffect::DropRequested { item, from, to } => self.commit_move(item.as_str(), from, to),
            effect => IntentOutcome::Drag { effect },
        }
    }

    fn commit_move(&mut self, id: &str, from: Status, to: Status) -> IntentOutcome {
        match self.registry.move_status(id, to) {
            Ok(change) => {
                info!(
                    id,
                    from = from.as_str(),
                    to = change.to.as_str(),
                    progress = change.progress,
                    revision = change.revision,
                    "status moved by drag"
                );
                IntentOutcome::StatusMoved { change }
            }
            Err(err) => {
                warn!(id, to = to.as_str(), error = %err, "status move rejected");
                IntentOutcome::Noop {
                    reason: NoopReason::MoveRejected,
                }
            }
        }
    }
}
