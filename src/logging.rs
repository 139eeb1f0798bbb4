//! File logging for the terminal programs.
//!
//! The terminal is in raw mode on the alternate screen while a game runs, so
//! log records go to a file in the working directory instead.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Route `log` records at info and above into `file_name`.
pub fn init(file_name: &str) -> Result<()> {
    let file = File::create(file_name).with_context(|| format!("failed to create {file_name}"))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), file)
        .context("a logger is already installed")?;
    Ok(())
}

/// Like [`init`], but a failure only costs the log file.
pub fn init_or_warn(file_name: &str) {
    if let Err(e) = init(file_name) {
        eprintln!("logging disabled: {e:#}");
    }
}
