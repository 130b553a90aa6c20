//! Record layer: the shapes a `<SOOT_PROFILING>` line can take.
//!
//! It owns:
//! - Operation (which counter a record updates)
//! - RecordLayout (read/write vs function-call token positions)

pub mod layout;
pub mod operation;

pub use layout::RecordLayout;
pub use operation::Operation;
