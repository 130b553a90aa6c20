use crate::Result;
use crate::model::Snapshot;

use anyhow::Context;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

/// Line closing every snapshot block.
pub const SEPARATOR: &str = "==============";

/// Render one snapshot block.
///
/// Example:
/// Time: 14:3:16
/// com.app.Foo -> 7 reads
/// com.app.Foo -> 7 writes
/// com.app.Foo -> 7 function calls
///
/// ==============
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Time: {}", snapshot.time);
    for suffix in ["reads", "writes", "function calls"] {
        for (name, count) in &snapshot.rows {
            let _ = writeln!(out, "{} -> {} {}", name, count, suffix);
        }
    }
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Append one snapshot block to `path`, creating the file if needed.
/// The file is closed before returning.
pub fn append_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open output file {}", path.display()))?;
    file.write_all(render_snapshot(snapshot).as_bytes())
        .with_context(|| format!("write snapshot to {}", path.display()))?;
    Ok(())
}
