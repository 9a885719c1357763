// ABOUTME: Single read-transform-write pass that reformats an SSH config file in place
// ABOUTME: Keeps the text transformation pure so it can be tested without touching the file system

use crate::ssh::{Sections, parse_blocks};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const SUCCESS_MESSAGE: &str = "✅ SSH config sorted and updated successfully!";

/// What one pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub global_blocks: usize,
    pub host_blocks: usize,
    pub annotated_blocks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reformatted {
    pub content: String,
    pub global_blocks: usize,
    pub host_blocks: usize,
    pub annotated_blocks: usize,
}

pub fn reformat(content: &str) -> Reformatted {
    let blocks = parse_blocks(content);
    let sections = Sections::from_blocks(&blocks);

    Reformatted {
        content: sections.render(),
        global_blocks: sections.globals.len(),
        host_blocks: sections.hosts.len(),
        annotated_blocks: sections.annotated_count(),
    }
}

/// Reads `path`, reformats it and overwrites it with the result.
pub fn reformat_file(path: &Path) -> Result<Summary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read SSH config file: {}", path.display()))?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    let result = reformat(&content);
    tracing::info!(
        "Found {} global and {} host blocks ({} annotated)",
        result.global_blocks,
        result.host_blocks,
        result.annotated_blocks
    );

    fs::write(path, &result.content)
        .with_context(|| format!("Failed to write SSH config file: {}", path.display()))?;
    tracing::debug!("Wrote {} bytes to {}", result.content.len(), path.display());

    Ok(Summary {
        path: path.to_path_buf(),
        global_blocks: result.global_blocks,
        host_blocks: result.host_blocks,
        annotated_blocks: result.annotated_blocks,
    })
}
