//! jfifscope - JPEG/JFIF structure inspector
//!
//! This library crate exposes the command-line plumbing for integration testing.
//! Parsing itself lives in `jfifscope-core`.

pub mod config;
pub mod loader;
pub mod report;

use anyhow::{Context, Result};
use jfifscope_core::JfifInstance;
use std::path::Path;

/// Load `path` and parse it, returning the report for display.
pub fn inspect_file(path: &Path, config: &config::Config) -> Result<(report::Report, JfifInstance)> {
    let file = loader::load_file(path, config.input.max_file_size)?;

    let instance = jfifscope_core::parse(file.data.clone())
        .with_context(|| format!("Failed to parse {:?}", file.path))?;

    tracing::info!(
        "Parsed {} segments from {:?} (conforming: {})",
        instance.len(),
        file.path,
        instance.is_conforming
    );

    let report = report::Report::new(file.name, file.data.len(), &instance);
    Ok((report, instance))
}
