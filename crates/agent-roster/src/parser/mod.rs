//! Parsers for the two per-agent markdown documents.
//!
//! Each parser names the file it reads and turns its raw text into a small
//! set of extracted fields. A missing document is not an error.

use std::path::Path;

use anyhow::Context as _;

use crate::layout::is_file_at;

pub mod identity;
pub mod soul;

pub use identity::{IdentityFields, IdentityParser};
pub use soul::{SoulFields, SoulParser};

/// Parser trait implemented by each document format.
pub trait DocumentParser {
    type Output: Default;

    /// File name looked up at the root of a workspace.
    const FILE_NAME: &'static str;

    fn parse(content: &str) -> Self::Output;

    fn exists_in(dir: &Path) -> anyhow::Result<bool> {
        is_file_at(&dir.join(Self::FILE_NAME))
    }

    /// Read and parse the document under `dir`, returning the raw text
    /// alongside the extracted fields. Missing files yield `None`.
    fn load(dir: &Path) -> anyhow::Result<Option<(String, Self::Output)>> {
        let path = dir.join(Self::FILE_NAME);
        if !is_file_at(&path)? {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        let parsed = Self::parse(&content);
        Ok(Some((content, parsed)))
    }
}

/// True when `dir` carries either recognised document.
pub fn has_agent_documents(dir: &Path) -> anyhow::Result<bool> {
    Ok(IdentityParser::exists_in(dir)? || SoulParser::exists_in(dir)?)
}
