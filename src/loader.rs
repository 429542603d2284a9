//! Loading input files into memory for parsing.

use anyhow::{Context, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// A file read fully into memory.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    /// File name without directories (falls back to the full path)
    pub name: String,
    pub data: Bytes,
}

impl LoadedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Read `path` into a buffer, rejecting files larger than `max_size` bytes.
pub fn load_file(path: &Path, max_size: u64) -> Result<LoadedFile> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {:?}", path);
    }

    let metadata =
        std::fs::metadata(path).with_context(|| format!("Failed to stat file: {:?}", path))?;
    if !metadata.is_file() {
        anyhow::bail!("Not a regular file: {:?}", path);
    }
    if metadata.len() > max_size {
        anyhow::bail!(
            "File {:?} is {} bytes, larger than the {} byte limit",
            path,
            metadata.len(),
            max_size
        );
    }

    let data = std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    tracing::debug!("Loaded {} bytes from {:?}", data.len(), path);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LoadedFile {
        path: path.to_path_buf(),
        name,
        data: Bytes::from(data),
    })
}
