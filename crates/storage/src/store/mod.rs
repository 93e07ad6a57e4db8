#![forbid(unsafe_code)]

mod clock;
mod error;
mod events;
mod requests;
mod seed;

pub use error::StoreError;
pub use events::{MAX_EVENTS, StatusEvent};
pub use requests::*;

use events::EventLog;
use sb_core::board::{RegistryError, SolutionRegistry, StatusMove, tag_catalog};
use sb_core::model::{ProgressPolicy, Solution, Status};
use seed::SeedFormat;
use std::collections::HashMap;
use std::path::Path;
use time::OffsetDateTime;
use tracing::{debug, info};

/// In-memory item registry. Solutions keep their load order; each carries its
/// own revision, starting at 0 and bumped on every status change.
#[derive(Clone, Debug)]
pub struct SolutionStore {
    solutions: Vec<Solution>,
    revisions: Vec<u64>,
    index: HashMap<String, usize>,
    policy: ProgressPolicy,
    events: EventLog,
}

impl SolutionStore {
    /// The seed compiled into the binary.
    pub fn open_default() -> Result<Self, StoreError> {
        let solutions = seed::parse(seed::DEFAULT_SEED, SeedFormat::Json)?;
        let store = Self::from_solutions(solutions)?;
        info!(count = store.len(), source = "embedded", "solution store loaded");
        Ok(store)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let format = SeedFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let store = Self::from_solutions(seed::parse(&text, format)?)?;
        info!(
            count = store.len(),
            source = %path.display(),
            "solution store loaded"
        );
        Ok(store)
    }

    pub fn from_solutions(solutions: Vec<Solution>) -> Result<Self, StoreError> {
        let solutions = seed::validate(solutions)?;
        let index = solutions
            .iter()
            .enumerate()
            .map(|(pos, solution)| (solution.id.as_str().to_string(), pos))
            .collect();
        Ok(Self {
            revisions: vec![0; solutions.len()],
            solutions,
            index,
            policy: ProgressPolicy::default(),
            events: EventLog::default(),
        })
    }

    pub fn with_policy(mut self, policy: ProgressPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ProgressPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn all(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn get(&self, id: &str) -> Option<&Solution> {
        self.position(id).map(|pos| &self.solutions[pos])
    }

    pub fn revision(&self, id: &str) -> Option<u64> {
        self.position(id).map(|pos| self.revisions[pos])
    }

    pub fn tags(&self) -> Vec<String> {
        tag_catalog(&self.solutions)
    }

    pub fn events(&self) -> impl ExactSizeIterator<Item = &StatusEvent> + '_ {
        self.events.iter()
    }

    pub fn events_after(&self, seq: u64) -> impl Iterator<Item = &StatusEvent> + '_ {
        self.events.after(seq)
    }

    pub fn last_event_seq(&self) -> u64 {
        self.events.last_seq()
    }

    pub fn set_status(&mut self, request: SetStatusRequest) -> Result<StatusChange, StoreError> {
        self.set_status_at(request, OffsetDateTime::now_utc())
    }

    /// [`SolutionStore::set_status`] with an explicit clock, which stamps
    /// both the event time and any completion date.
    pub fn set_status_at(
        &mut self,
        request: SetStatusRequest,
        now: OffsetDateTime,
    ) -> Result<StatusChange, StoreError> {
        let SetStatusRequest {
            id,
            status,
            expected_revision,
        } = request;

        let Some(pos) = self.position(&id) else {
            return Err(StoreError::UnknownId);
        };
        let revision = self.revisions[pos];
        if let Some(expected) = expected_revision
            && expected != revision
        {
            debug!(id = %id.trim(), expected, actual = revision, "stale status write");
            return Err(StoreError::RevisionMismatch {
                expected,
                actual: revision,
            });
        }

        let solution = &mut self.solutions[pos];
        let from = solution.status;
        if from == status {
            return Ok(StatusChange {
                id: solution.id.clone(),
                from,
                to: status,
                progress: solution.progress,
                revision,
                event: None,
            });
        }

        self.policy
            .apply(solution, status, &clock::year_month(now));
        let new_revision = revision + 1;
        self.revisions[pos] = new_revision;

        let event = StatusEvent {
            seq: self.events.next_seq(),
            id: solution.id.clone(),
            from,
            to: status,
            progress: solution.progress,
            revision: new_revision,
            at: clock::rfc3339(now),
        };
        self.events.push(event.clone());
        info!(
            id = %event.id,
            from = from.as_str(),
            to = status.as_str(),
            progress = event.progress,
            revision = new_revision,
            "solution status changed"
        );

        Ok(StatusChange {
            id: event.id.clone(),
            from,
            to: status,
            progress: event.progress,
            revision: new_revision,
            event: Some(event),
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id.trim()).copied()
    }
}

impl SolutionRegistry for SolutionStore {
    fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    fn get(&self, id: &str) -> Option<&Solution> {
        SolutionStore::get(self, id)
    }

    fn move_status(&mut self, id: &str, to: Status) -> Result<StatusMove, RegistryError> {
        let change = self
            .set_status(SetStatusRequest {
                id: id.to_string(),
                status: to,
                expected_revision: None,
            })
            .map_err(|err| match err {
                StoreError::UnknownId => RegistryError::UnknownId,
                StoreError::RevisionMismatch { expected, actual } => {
                    RegistryError::RevisionMismatch { expected, actual }
                }
                other => RegistryError::Rejected(other.to_string()),
            })?;
        Ok(StatusMove {
            id: change.id,
            from: change.from,
            to: change.to,
            progress: change.progress,
            revision: change.revision,
        })
    }

    fn tag_catalog(&self) -> Vec<String> {
        self.tags()
    }
}
