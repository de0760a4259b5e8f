//! Well-known paths inside an agent workspace.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

pub const SKILLS_DIR: &str = "skills";
pub const SKILL_MARKER: &str = "SKILL.md";
pub const TOOLS_MARKER: &str = "TOOLS.md";
pub const MEMORY_DIR: &str = "memory";
pub const MEMORY_SUFFIX: &str = ".md";

/// Metadata of `path`, or `None` when nothing exists there.
///
/// Only a missing entry (or a missing directory along the way) counts as
/// absent. Any other stat failure, permission denied included, is an error.
pub fn metadata_if_present(path: &Path) -> anyhow::Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("stat {}", path.display())),
    }
}

pub fn is_file_at(path: &Path) -> anyhow::Result<bool> {
    Ok(metadata_if_present(path)?.is_some_and(|m| m.is_file()))
}

pub fn is_dir_at(path: &Path) -> anyhow::Result<bool> {
    Ok(metadata_if_present(path)?.is_some_and(|m| m.is_dir()))
}

fn has_memory_suffix(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(MEMORY_SUFFIX.as_bytes()))
}

/// Regular files under `<workspace>/memory` whose name ends in `.md`,
/// sorted by path. A missing memory directory yields an empty list.
pub fn memory_documents(workspace: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let dir = workspace.join(MEMORY_DIR);
    if !is_dir_at(&dir)? {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("read_dir {}", dir.display()))? {
        let path = entry?.path();
        if has_memory_suffix(&path) && is_file_at(&path)? {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Immediate subdirectories of `dir`, sorted by name.
pub fn subdirectories(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))? {
        let path = entry?.path();
        if is_dir_at(&path)? {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}
