#![forbid(unsafe_code)]

use crate::model::{Solution, Status};

/// The three status buckets. Every categorized item lands in exactly one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    pub planned: Vec<&'a Solution>,
    pub in_progress: Vec<&'a Solution>,
    pub completed: Vec<&'a Solution>,
}

impl<'a> Buckets<'a> {
    pub fn get(&self, status: Status) -> &[&'a Solution] {
        match status {
            Status::Planned => &self.planned,
            Status::InProgress => &self.in_progress,
            Status::Completed => &self.completed,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.get(status).len()
    }

    pub fn total(&self) -> usize {
        self.planned.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Status, &[&'a Solution])> + '_ {
        Status::ALL.into_iter().map(move |status| (status, self.get(status)))
    }

    fn bucket_mut(&mut self, status: Status) -> &mut Vec<&'a Solution> {
        match status {
            Status::Planned => &mut self.planned,
            Status::InProgress => &mut self.in_progress,
            Status::Completed => &mut self.completed,
        }
    }
}

/// Single partition pass; relative order inside each bucket follows the input.
pub fn categorize<'a, I>(items: I) -> Buckets<'a>
where
    I: IntoIterator<Item = &'a Solution>,
{
    let mut buckets = Buckets::default();
    for item in items {
        buckets.bucket_mut(item.status).push(item);
    }
    buckets
}
