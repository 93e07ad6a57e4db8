#![forbid(unsafe_code)]

use sb_core::ids::SolutionId;
use sb_core::model::Status;
use serde::Serialize;
use std::collections::VecDeque;

pub const MAX_EVENTS: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    pub seq: u64,
    pub id: SolutionId,
    pub from: Status,
    pub to: Status,
    pub progress: u8,
    pub revision: u64,
    pub at: String,
}

impl StatusEvent {
    pub fn event_id(&self) -> String {
        format!("evt_{:016}", self.seq)
    }
}

/// Append-only log of status changes; only the newest [`MAX_EVENTS`] are
/// kept. Sequence numbers keep increasing across evictions.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventLog {
    last_seq: u64,
    entries: VecDeque<StatusEvent>,
}

impl EventLog {
    pub(crate) fn next_seq(&self) -> u64 {
        self.last_seq + 1
    }

    pub(crate) fn push(&mut self, event: StatusEvent) {
        self.last_seq = event.seq;
        if self.entries.len() == MAX_EVENTS {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    pub(crate) fn last_seq(&self) -> u64 {
        self.last_seq
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = &StatusEvent> + '_ {
        self.entries.iter()
    }

    pub(crate) fn after(&self, seq: u64) -> impl Iterator<Item = &StatusEvent> + '_ {
        self.entries.iter().filter(move |event| event.seq > seq)
    }
}
