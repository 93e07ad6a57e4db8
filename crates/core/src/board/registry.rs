#![forbid(unsafe_code)]

use crate::ids::SolutionId;
use crate::model::{Solution, Status};
use serde::Serialize;

/// The item registry as seen by the board: read access in registry order plus
/// the one permitted mutation, a status move.
pub trait SolutionRegistry {
    fn solutions(&self) -> &[Solution];

    fn get(&self, id: &str) -> Option<&Solution> {
        self.solutions()
            .iter()
            .find(|solution| solution.id.as_str() == id)
    }

    fn move_status(&mut self, id: &str, to: Status) -> Result<StatusMove, RegistryError>;

    /// Distinct tags across the whole registry, first-seen order.
    fn tag_catalog(&self) -> Vec<String> {
        super::tag_catalog(self.solutions())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMove {
    pub id: SolutionId,
    pub from: Status,
    pub to: Status,
    pub progress: u8,
    pub revision: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown solution id")]
    UnknownId,
    #[error("revision mismatch (expected={expected}, actual={actual})")]
    RevisionMismatch { expected: u64, actual: u64 },
    #[error("status move rejected: {0}")]
    Rejected(String),
}
