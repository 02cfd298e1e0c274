use anyhow::{Context, Result};
use circbuf::Config;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Keep the last N lines of stdin and print them oldest first.
fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to read configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut history = config
        .build_buffer::<String>()
        .context("Failed to create history buffer")?;

    let mut dropped = 0usize;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if history.insert(line).is_some() {
            dropped += 1;
        }
    }

    tracing::info!(
        "Kept {} of {} lines (capacity {})",
        history.len(),
        history.len() + dropped,
        history.capacity()
    );

    let mut out = io::stdout().lock();
    for (index, line) in &history {
        writeln!(out, "{index:>6}  {line}")?;
    }

    Ok(())
}
