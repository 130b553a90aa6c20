//! Aggregation model: merge decoded entries into counters and decide when to snapshot.

pub mod counters;
pub mod gate;

pub use counters::Counters;
pub use gate::Gate;

use crate::log::{ProfilingEntry, Timestamp};

/// One snapshot block, taken at the time of the entry that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub time: Timestamp,
    /// Read-map names with their read counts, in first-seen order.
    /// Every section of the block is printed from these rows.
    pub rows: Vec<(String, u64)>,
}

/// What happened to an entry fed to the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingest {
    /// Operation kind is not read/write/function; nothing changed.
    Skipped,
    /// Counters updated, no snapshot due.
    Merged,
    /// Counters updated and the gate fired.
    Snapshot(Snapshot),
}

/// Per-run state: the three counter maps plus the snapshot gate.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    counters: Counters,
    gate: Gate,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn ingest(&mut self, entry: &ProfilingEntry) -> Ingest {
        if !self.counters.merge(entry) {
            tracing::warn!(
                operation = %entry.operation,
                name = %entry.name,
                "skipping entry with unknown operation"
            );
            return Ingest::Skipped;
        }

        if !self.gate.observe(&entry.time) {
            return Ingest::Merged;
        }

        tracing::debug!(
            time = %entry.time,
            reads = self.counters.reads.len(),
            writes = self.counters.writes.len(),
            function_calls = self.counters.function_calls.len(),
            "snapshot due"
        );
        Ingest::Snapshot(self.snapshot(entry.time))
    }

    fn snapshot(&self, time: Timestamp) -> Snapshot {
        Snapshot {
            time,
            rows: self
                .counters
                .reads
                .iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
        }
    }
}
