//! Capability detection from workspace layout. Only file presence is
//! inspected, never content.

use std::path::Path;

use crate::layout::{
    SKILL_MARKER, SKILLS_DIR, TOOLS_MARKER, is_dir_at, is_file_at, memory_documents, subdirectories,
};
use crate::model::Capability;

/// Capabilities in a fixed order: skills (by directory name), tools, memory.
pub fn detect_capabilities(workspace: &Path) -> anyhow::Result<Vec<Capability>> {
    let mut out = Vec::new();

    let skills_dir = workspace.join(SKILLS_DIR);
    if is_dir_at(&skills_dir)? {
        for skill in subdirectories(&skills_dir)? {
            if !is_file_at(&skill.join(SKILL_MARKER))? {
                continue;
            }
            let Some(name) = skill.file_name().and_then(|s| s.to_str()) else {
                tracing::debug!("skipping non-utf8 skill dir {}", skill.display());
                continue;
            };
            out.push(Capability::enabled(name, format!("Skill: {name}")));
        }
    }

    if is_file_at(&workspace.join(TOOLS_MARKER))? {
        out.push(Capability::enabled("tools", "Custom tools configuration"));
    }

    if !memory_documents(workspace)?.is_empty() {
        out.push(Capability::enabled("memory", "Long-term memory system"));
    }

    Ok(out)
}
