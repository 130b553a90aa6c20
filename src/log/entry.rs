use crate::record::Operation;
use std::fmt;

/// Wall-clock time of a logcat line. Seconds are whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hour: u32,
    pub minute: u32,
    pub seconds: u32,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.seconds)
    }
}

/// A single decoded profiling line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilingEntry {
    pub time: Timestamp,
    pub name: String,
    pub operation: Operation,
    pub count: u64,
}
