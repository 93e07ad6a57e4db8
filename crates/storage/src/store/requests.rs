#![forbid(unsafe_code)]

use super::events::StatusEvent;
use sb_core::ids::SolutionId;
use sb_core::model::Status;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetStatusRequest {
    pub id: String,
    pub status: Status,
    pub expected_revision: Option<u64>,
}

/// Result of a status write. `event` is `None` when the status was already
/// the requested one and nothing changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub id: SolutionId,
    pub from: Status,
    pub to: Status,
    pub progress: u8,
    pub revision: u64,
    pub event: Option<StatusEvent>,
}

impl StatusChange {
    pub fn changed(&self) -> bool {
        self.event.is_some()
    }
}
