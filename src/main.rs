use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use iso_week_gen::{ProbeSet, generate};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn main() -> Result<()> {
    // stdout carries the generated text, so logs go to stderr
    let builder = tracing_subscriber::fmt().with_writer(io::stderr);
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        builder.with_env_filter(filter).init();
    } else {
        builder.with_max_level(LevelFilter::WARN).init();
    }

    run().inspect_err(|e| error!("{e:#}"))
}

fn run() -> Result<()> {
    let probes = ProbeSet::default();
    debug!(probes = probes.len(), "starting generation");

    let stdout = io::stdout().lock();
    generate(&probes, BufWriter::new(stdout)).context("Failed to generate ISO week assertions")?;
    Ok(())
}
