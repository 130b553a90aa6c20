//! Rendering of snapshot blocks into the output file.

pub mod text;

pub use text::{append_snapshot, render_snapshot};
