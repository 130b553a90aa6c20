use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod log;
mod model;
mod record;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "soot-profile-log")]
#[command(version)]
#[command(about = "Snapshot <SOOT_PROFILING> counters from an Android log", long_about = None)]
struct Cli {
    /// Logcat output containing <SOOT_PROFILING> lines.
    log_file: PathBuf,

    /// File that snapshot blocks are appended to.
    out_file: PathBuf,
}

/// Diagnostics go to stderr; RUST_LOG overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let written = run(&cli.log_file, &cli.out_file)?;
    tracing::info!(snapshots = written, out = %cli.out_file.display(), "done");
    Ok(())
}

/// Single pass over the log: decode, accumulate, append snapshots as the gate fires.
/// Returns the number of snapshot blocks written.
fn run(log_file: &Path, out_file: &Path) -> Result<usize> {
    // 1) Read the whole log.
    let text = log::read_log_file(log_file)?;

    // 2) Decode marker lines in order and feed the accumulator.
    let mut acc = model::Accumulator::new();
    let mut written = 0;
    for (lno, decoded) in log::profiling_entries(&text) {
        let entry = decoded.with_context(|| {
            format!("bad profiling line at {}:{}", log_file.display(), lno)
        })?;
        tracing::debug!(
            line = lno,
            name = %entry.name,
            operation = %entry.operation,
            count = entry.count,
            "decoded entry"
        );

        match acc.ingest(&entry) {
            model::Ingest::Skipped => println!("Unknown operation: {}", entry.operation),
            model::Ingest::Merged => {}
            model::Ingest::Snapshot(snapshot) => {
                // 3) Append the block.
                println!("Writing");
                println!(
                    "{} : {}  -- {} {} {}",
                    entry.time.minute, entry.time.seconds, entry.name, entry.operation, entry.count
                );
                render::append_snapshot(out_file, &snapshot)?;
                written += 1;
            }
        }
    }

    tracing::debug!(
        reads = acc.counters().reads.len(),
        writes = acc.counters().writes.len(),
        function_calls = acc.counters().function_calls.len(),
        "log consumed"
    );
    Ok(written)
}
