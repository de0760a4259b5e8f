//! JSON report output and the console summary.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::Context as _;

use crate::model::AgentRecord;

/// Group label used when an agent carries fewer than two tags.
const FALLBACK_GROUP: &str = "general";

/// Write the agent list as indented JSON, creating parent directories.
/// Non-ASCII text is written as-is.
pub fn write_report(path: &Path, agents: &[AgentRecord]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).with_context(|| format!("create_dir_all {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(agents).context("serialize agents")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Parse a report previously produced by [`write_report`], for consumers
/// that load the roster back.
pub fn read_report(path: &Path) -> anyhow::Result<Vec<AgentRecord>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

/// Agents grouped by their second tag, groups sorted by label.
pub fn group_by_second_tag(agents: &[AgentRecord]) -> BTreeMap<&str, Vec<&AgentRecord>> {
    let mut groups: BTreeMap<&str, Vec<&AgentRecord>> = BTreeMap::new();
    for agent in agents {
        let key = agent.tags.get(1).map(String::as_str).unwrap_or(FALLBACK_GROUP);
        groups.entry(key).or_default().push(agent);
    }
    groups
}

/// Human-readable summary. Informational only.
pub fn print_summary<W: Write>(
    out: &mut W,
    agents: &[AgentRecord],
    output_path: &Path,
) -> std::io::Result<()> {
    writeln!(out, "{} agents extracted → {}", agents.len(), output_path.display())?;
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    for (group, members) in group_by_second_tag(agents) {
        writeln!(out)?;
        writeln!(out, "  {} ({}):", group.to_uppercase(), members.len())?;
        for agent in members {
            writeln!(
                out,
                "    • {} {} ({}) - {} capabilities",
                agent.badge(),
                agent.name,
                agent.role,
                agent.capabilities.len()
            )?;
        }
    }
    Ok(())
}
