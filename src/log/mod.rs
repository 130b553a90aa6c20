//! Log parsing for `<SOOT_PROFILING>` lines in Android logcat output.

pub mod entry;
pub mod error;
pub mod parse;

pub use entry::{ProfilingEntry, Timestamp};
pub use parse::{profiling_entries, read_log_file};
