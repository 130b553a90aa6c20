//! Latest-count-per-name maps, one per operation kind.

use crate::log::ProfilingEntry;
use crate::record::Operation;
use std::collections::HashMap;

/// Name -> latest observed count. Iterates in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct CounterMap {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl CounterMap {
    /// Overwrite the count for `name`. A later value replaces, never adds.
    pub fn set(&mut self, name: &str, count: u64) {
        match self.counts.get_mut(name) {
            Some(slot) => *slot = count,
            None => {
                self.order.push(name.to_string());
                self.counts.insert(name.to_string(), count);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.counts[name.as_str()]))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Counters {
    pub reads: CounterMap,
    pub writes: CounterMap,
    pub function_calls: CounterMap,
}

impl Counters {
    /// Merge one entry into the map for its operation.
    /// Returns false (and changes nothing) for an unknown operation.
    pub fn merge(&mut self, entry: &ProfilingEntry) -> bool {
        let map = match entry.operation {
            Operation::Read => &mut self.reads,
            Operation::Write => &mut self.writes,
            Operation::Function => &mut self.function_calls,
            Operation::Unknown(_) => return false,
        };
        map.set(&entry.name, entry.count);
        true
    }
}
