//! Builds one [`AgentRecord`] from a workspace directory.

use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};

use crate::capabilities::detect_capabilities;
use crate::classify::classify_team;
use crate::metrics::estimate_metrics;
use crate::model::{
    AgentRecord, AgentStatus, ModelDescriptor, Role, RunConfig, Team, display_name_from_workspace,
};
use crate::parser::{DocumentParser, IdentityFields, IdentityParser, SoulFields, SoulParser};

pub const CREATED_BY: &str = "system";

/// Tag order: optional emoji, team, role, then the first vibe keyword when
/// it is not already present.
pub fn build_tags(identity: &IdentityFields, team: Team, role: Role) -> Vec<String> {
    let mut tags = vec![team.to_string(), role.to_string()];
    if let Some(emoji) = identity.emoji.as_ref() {
        tags.insert(0, emoji.clone());
    }
    if let Some(vibe) = identity.vibe_keyword()
        && !tags.contains(&vibe)
    {
        tags.push(vibe);
    }
    tags
}

fn dir_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| format!("workspace name is not valid UTF-8: {}", path.display()))
}

/// Creation and modification times. Falls back to mtime where the platform
/// or filesystem does not record a birth time.
fn timestamps(path: &Path) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    let modified = meta
        .modified()
        .with_context(|| format!("mtime {}", path.display()))?;
    let created = meta.created().unwrap_or(modified);
    Ok((created.into(), modified.into()))
}

/// Assemble the agent living in `workspace`. Nested agents pass their
/// container as `parent` and inherit its team.
///
/// Returns `Ok(None)` when the directory carries neither document.
pub fn assemble_agent(workspace: &Path, parent: Option<&Path>) -> anyhow::Result<Option<AgentRecord>> {
    let identity = IdentityParser::load(workspace)?;
    let soul = SoulParser::load(workspace)?;
    if identity.is_none() && soul.is_none() {
        return Ok(None);
    }
    let (identity_md, identity) = identity.unwrap_or_default();
    let (soul_md, soul): (String, SoulFields) = soul.unwrap_or_default();

    let ws_name = dir_name(workspace)?;
    let team_source = match parent {
        Some(p) => dir_name(p)?,
        None => ws_name.clone(),
    };
    let team = classify_team(&team_source);
    let tags = build_tags(&identity, team, soul.role);
    let (created_at, updated_at) = timestamps(workspace)?;

    let name = identity
        .name
        .clone()
        .unwrap_or_else(|| display_name_from_workspace(&ws_name));

    tracing::debug!(
        "assembled '{}' from {} (team={}, role={})",
        name,
        workspace.display(),
        team,
        soul.role
    );

    Ok(Some(AgentRecord {
        id: ws_name.clone(),
        name,
        role: soul.role,
        status: AgentStatus::Idle,
        description: soul.description,
        model: ModelDescriptor::default(),
        capabilities: detect_capabilities(workspace)?,
        metrics: estimate_metrics(workspace)?,
        config: RunConfig::default(),
        created_at,
        updated_at,
        created_by: CREATED_BY.to_string(),
        tags,
        workspace: ws_name,
        identity_md,
        soul_md,
    }))
}
