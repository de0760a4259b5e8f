//! Workspace traversal.
//!
//! Responsibilities:
//! - List `workspace-*` directories under the scan root in name order.
//! - Apply the include/exclude filter.
//! - Treat a workspace without its own documents as a container and look one
//!   level down for nested agents.
//! - Collect assembled records in traversal order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assembler::assemble_agent;
use crate::filter::WorkspaceFilter;
use crate::layout::{is_dir_at, subdirectories};
use crate::model::AgentRecord;
use crate::parser::has_agent_documents;

/// Directory name prefix of candidate workspaces.
pub const WORKSPACE_PREFIX: &str = "workspace-";

/// Scanner configuration.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Directory holding the `workspace-*` folders.
    pub root: PathBuf,
    pub filter: WorkspaceFilter,
}

/// Result of one traversal pass.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub agents: Vec<AgentRecord>,
    /// Candidate directories found under the root.
    pub scanned: usize,
    pub included: usize,
    /// Candidates rejected by the filter.
    pub skipped: usize,
}

/// Candidate workspace directories under `root`, sorted by name.
pub fn candidate_workspaces(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(root).with_context(|| format!("read_dir {}", root.display()))? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with(WORKSPACE_PREFIX) {
            out.push(entry.path());
        }
    }
    out.sort();
    Ok(out)
}

fn log_agent(agent: &AgentRecord) {
    tracing::info!("  → {} {} ({})", agent.badge(), agent.name, agent.role);
}

/// Walk the scan root and assemble every qualifying agent.
///
/// A missing root is reported and yields an empty outcome. Any other I/O
/// failure on an existing path aborts the scan.
pub fn scan_workspaces(settings: &ScanSettings) -> anyhow::Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    if !is_dir_at(&settings.root)? {
        tracing::warn!("scan root {} not found", settings.root.display());
        return Ok(outcome);
    }

    let candidates = candidate_workspaces(&settings.root)?;
    tracing::info!("scanning {} workspace directories", candidates.len());

    for ws in candidates {
        if !is_dir_at(&ws)? {
            continue;
        }
        outcome.scanned += 1;
        let name = ws
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        if !settings.filter.includes(&name) {
            tracing::debug!("filtered out {}", name);
            outcome.skipped += 1;
            continue;
        }
        tracing::info!("✓ {}", name);
        outcome.included += 1;

        if has_agent_documents(&ws)? {
            if let Some(agent) = assemble_agent(&ws, None)? {
                log_agent(&agent);
                outcome.agents.push(agent);
            }
            continue;
        }

        // container: agents live one level down
        for sub in subdirectories(&ws)? {
            if !has_agent_documents(&sub)? {
                continue;
            }
            if let Some(agent) = assemble_agent(&sub, Some(&ws))? {
                log_agent(&agent);
                outcome.agents.push(agent);
            }
        }
    }

    tracing::info!(
        "{} included, {} filtered, {} agent(s)",
        outcome.included,
        outcome.skipped,
        outcome.agents.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn settings(root: &Path) -> ScanSettings {
        ScanSettings {
            root: root.to_path_buf(),
            filter: WorkspaceFilter::default(),
        }
    }

    fn write(path: &Path, content: &str) {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let out = scan_workspaces(&settings(&dir.path().join("nope"))).unwrap();
        assert!(out.agents.is_empty());
        assert_eq!(out.scanned, 0);
    }

    #[test]
    fn root_without_workspaces_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("other")).unwrap();
        write(&dir.path().join("workspace-code-file"), "not a dir");
        let out = scan_workspaces(&settings(dir.path())).unwrap();
        assert!(out.agents.is_empty());
        assert_eq!(out.scanned, 0);
        assert_eq!(out.skipped, 0);
    }

    #[test]
    fn filters_and_orders_direct_agents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("workspace-qa-zed/SOUL.md"), "Testing all day.\n");
        write(&root.join("workspace-code-amy/IDENTITY.md"), "**Name:** Amy\n");
        // excluded duplicate
        write(&root.join("workspace-code-amelia/IDENTITY.md"), "**Name:** Amelia\n");
        // not included by any pattern
        write(&root.join("workspace-misc/IDENTITY.md"), "**Name:** Misc\n");

        let out = scan_workspaces(&settings(root)).unwrap();
        let ids: Vec<&str> = out.agents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["workspace-code-amy", "workspace-qa-zed"]);
        assert_eq!(out.scanned, 4);
        assert_eq!(out.included, 2);
        assert_eq!(out.skipped, 2);
        assert_eq!(out.agents[1].role, Role::Executor);
    }

    #[test]
    fn container_yields_nested_agents_with_parent_team() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let container = root.join("workspace-writing-novel");
        write(&container.join("backend-bot/SOUL.md"), "Prose stylist.\n");
        // no documents: ignored
        fs::create_dir_all(container.join("drafts")).unwrap();

        let out = scan_workspaces(&settings(root)).unwrap();
        assert_eq!(out.agents.len(), 1);
        let agent = &out.agents[0];
        assert_eq!(agent.id, "backend-bot");
        assert_eq!(agent.workspace, "backend-bot");
        assert_eq!(agent.tags, vec!["writing", "specialist"]);
    }

    #[test]
    fn direct_documents_take_precedence_over_children() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let ws = root.join("workspace-code-lead");
        write(&ws.join("IDENTITY.md"), "**Name:** Lead\n");
        write(&ws.join("helper/IDENTITY.md"), "**Name:** Helper\n");
        let out = scan_workspaces(&settings(root)).unwrap();
        let names: Vec<&str> = out.agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Lead"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_workspace_fails_the_scan() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join("workspace-code-bob");
        write(&ws.join("IDENTITY.md"), "**Name:** Bob\n");
        // listable but not searchable
        fs::set_permissions(&ws, fs::Permissions::from_mode(0o744)).unwrap();
        let enforced = fs::metadata(ws.join("IDENTITY.md")).is_err();
        let res = scan_workspaces(&settings(dir.path()));
        fs::set_permissions(&ws, fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            // running as root
            return;
        }
        let err = res.unwrap_err();
        assert!(format!("{err:#}").contains("workspace-code-bob"));
    }

    #[test]
    fn empty_container_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("workspace-code-empty")).unwrap();
        let out = scan_workspaces(&settings(dir.path())).unwrap();
        assert!(out.agents.is_empty());
        assert_eq!(out.included, 1);
    }
}
