//! Elapsed-seconds gate deciding when a snapshot is due.

use crate::log::Timestamp;

/// Minimum elapsed wall-clock seconds between two snapshots.
pub const SNAPSHOT_INTERVAL_SECS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    /// No reference time yet; the next entry only seeds it.
    #[default]
    AwaitingFirstEntry,
    /// Time of the last snapshot (or of the seeding entry).
    Gated { minute: u32, seconds: u32 },
}

/// Seconds from `reference` to `now` on a 60-second dial.
///
/// A smaller `now` means the clock wrapped past :59.
pub fn elapsed_seconds(reference: u32, now: u32) -> i64 {
    let (reference, now) = (i64::from(reference), i64::from(now));
    if now < reference {
        60 - reference + now
    } else {
        now - reference
    }
}

impl Gate {
    /// Feed the time of a merged entry. Returns true when a snapshot is due,
    /// in which case `time` becomes the new reference.
    pub fn observe(&mut self, time: &Timestamp) -> bool {
        let due = match *self {
            Gate::AwaitingFirstEntry => {
                *self = Gate::Gated {
                    minute: time.minute,
                    seconds: time.seconds,
                };
                return false;
            }
            Gate::Gated { seconds, .. } => {
                elapsed_seconds(seconds, time.seconds) >= SNAPSHOT_INTERVAL_SECS
            }
        };
        if due {
            *self = Gate::Gated {
                minute: time.minute,
                seconds: time.seconds,
            };
        }
        due
    }
}
