#[cfg(test)]
#[path = "../../tests/unit/evolution/record_test.rs"]
mod record_test;

use crate::individual::Individual;
use crate::population::Member;
use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// A tag of recorded snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordTag {
    /// Parent fitness after initialization and after each selection.
    ParentFitness,
    /// Offspring fitness before each selection.
    OffspringFitness,
}

impl Display for RecordTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordTag::ParentFitness => write!(f, "parent fitness"),
            RecordTag::OffspringFitness => write!(f, "offspring fitness"),
        }
    }
}

/// Keeps per generation snapshots grouped by tag. Append only.
#[derive(Clone, Debug, Default)]
pub struct GenerationRecord {
    entries: FxHashMap<RecordTag, Vec<Vec<Float>>>,
}

impl GenerationRecord {
    /// Appends a snapshot under given tag.
    pub fn push(&mut self, tag: RecordTag, snapshot: Vec<Float>) {
        self.entries.entry(tag).or_default().push(snapshot);
    }

    /// Returns all snapshots recorded under given tag in recording order.
    pub fn get(&self, tag: RecordTag) -> &[Vec<Float>] {
        self.entries.get(&tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns true if given tag has at least one snapshot.
    pub fn contains(&self, tag: RecordTag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Returns true if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Records fitness history when enabled, does nothing otherwise.
pub(crate) struct InterimRecorder {
    record: Option<GenerationRecord>,
}

impl InterimRecorder {
    pub fn new(is_enabled: bool) -> Self {
        Self { record: is_enabled.then(GenerationRecord::default) }
    }

    pub fn on_parents<I: Individual>(&mut self, parents: &[Member<I>]) {
        self.push(RecordTag::ParentFitness, parents);
    }

    pub fn on_offspring<I: Individual>(&mut self, offspring: &[Member<I>]) {
        self.push(RecordTag::OffspringFitness, offspring);
    }

    pub fn into_record(self) -> GenerationRecord {
        self.record.unwrap_or_default()
    }

    fn push<I: Individual>(&mut self, tag: RecordTag, members: &[Member<I>]) {
        if let Some(record) = self.record.as_mut() {
            record.push(tag, members.iter().map(|member| member.fitness).collect());
        }
    }
}
