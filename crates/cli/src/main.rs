//! Preposition formatter entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** — input and output paths from flags or
//!    environment (see [`config::Config`]).
//! 2. **Wire observability** — configure `tracing-subscriber` with an
//!    `EnvFilter`. Events go to stderr so stdout carries only the summary line.
//! 3. **Run once** — call [`run::run`] and print the entry count.
//!
//! Any failure is returned from `main`, which prints the error chain on stderr
//! and exits non-zero.

mod config;
mod run;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level);

    let count = run::run(&config)?;
    println!("{}", run::summary(count));
    Ok(())
}
