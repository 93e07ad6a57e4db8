#![forbid(unsafe_code)]

use super::geometry::{BucketRegion, Point, hit_test};
use crate::ids::SolutionId;
use crate::model::Status;
use serde::Serialize;

/// Pointer travel (in screen units) that turns a press into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Card drag lifecycle.
///
/// ```text
/// Idle -> Pressed -> Dragging -> Idle
///            \-----------------> Idle (click or cancel)
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    Idle,
    Pressed {
        item: SolutionId,
        origin_status: Status,
        origin: Point,
        current: Point,
    },
    Dragging {
        item: SolutionId,
        origin_status: Status,
        origin: Point,
        current: Point,
        hover: Option<Status>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    IdleWithoutActiveDrag,
    DragAlreadyActive,
    ThresholdNotReached,
    HoverUnchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragCancelReason {
    OutsideBuckets,
    OriginBucket,
    PointerCancel,
}

/// What one pointer event did to the machine.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Pressed {
        item: SolutionId,
    },
    DragStarted {
        item: SolutionId,
        hover: Option<Status>,
    },
    HoverChanged {
        item: SolutionId,
        hover: Option<Status>,
    },
    /// Released before crossing the threshold: treat as a card click.
    Click {
        item: SolutionId,
    },
    DropRequested {
        item: SolutionId,
        from: Status,
        to: Status,
    },
    Canceled {
        item: Option<SolutionId>,
        reason: DragCancelReason,
    },
    Noop {
        reason: DragNoopReason,
    },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DragConfigError {
    #[error("drag threshold must be a positive finite number (got {threshold})")]
    InvalidThreshold { threshold: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragController {
    state: DragState,
    threshold: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
            threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl DragController {
    pub fn new(threshold: f64) -> Result<Self, DragConfigError> {
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(DragConfigError::InvalidThreshold { threshold });
        }
        Ok(Self {
            state: DragState::Idle,
            threshold,
        })
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// The card being dragged. A press that has not crossed the threshold is
    /// not a drag yet.
    pub fn dragged_item(&self) -> Option<&SolutionId> {
        match &self.state {
            DragState::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn hover_bucket(&self) -> Option<Status> {
        match &self.state {
            DragState::Dragging { hover, .. } => *hover,
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, item: SolutionId, origin_status: Status, at: Point) -> DragEffect {
        if !self.is_idle() {
            return DragEffect::Noop {
                reason: DragNoopReason::DragAlreadyActive,
            };
        }
        self.state = DragState::Pressed {
            item: item.clone(),
            origin_status,
            origin: at,
            current: at,
        };
        DragEffect::Pressed { item }
    }

    pub fn pointer_move(&mut self, at: Point, regions: &[BucketRegion]) -> DragEffect {
        match &mut self.state {
            DragState::Idle => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
            DragState::Pressed {
                item,
                origin_status,
                origin,
                current,
            } => {
                *current = at;
                if origin.distance_to(at) < self.threshold {
                    return DragEffect::Noop {
                        reason: DragNoopReason::ThresholdNotReached,
                    };
                }
                let hover = hit_test(regions, at);
                let (item, origin_status, origin) = (item.clone(), *origin_status, *origin);
                self.state = DragState::Dragging {
                    item: item.clone(),
                    origin_status,
                    origin,
                    current: at,
                    hover,
                };
                DragEffect::DragStarted { item, hover }
            }
            DragState::Dragging {
                item,
                current,
                hover,
                ..
            } => {
                *current = at;
                let next = hit_test(regions, at);
                if next == *hover {
                    return DragEffect::Noop {
                        reason: DragNoopReason::HoverUnchanged,
                    };
                }
                *hover = next;
                DragEffect::HoverChanged {
                    item: item.clone(),
                    hover: next,
                }
            }
        }
    }

    /// Release. The machine is back in `Idle` afterwards whatever the outcome.
    pub fn pointer_up(&mut self, at: Point, regions: &[BucketRegion]) -> DragEffect {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
            DragState::Pressed { item, .. } => DragEffect::Click { item },
            DragState::Dragging {
                item,
                origin_status,
                ..
            } => match hit_test(regions, at) {
                Some(to) if to != origin_status => DragEffect::DropRequested {
                    item,
                    from: origin_status,
                    to,
                },
                Some(_) => DragEffect::Canceled {
                    item: Some(item),
                    reason: DragCancelReason::OriginBucket,
                },
                None => DragEffect::Canceled {
                    item: Some(item),
                    reason: DragCancelReason::OutsideBuckets,
                },
            },
        }
    }

    pub fn cancel(&mut self) -> DragEffect {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
            DragState::Pressed { item, .. } | DragState::Dragging { item, .. } => {
                DragEffect::Canceled {
                    item: Some(item),
                    reason: DragCancelReason::PointerCancel,
                }
            }
        }
    }
}
