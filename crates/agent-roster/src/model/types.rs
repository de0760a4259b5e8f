use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Behavioural role inferred from an agent's soul document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Orchestrator,
    Specialist,
    Reviewer,
    Executor,
    Monitor,
    Bridge,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Orchestrator => "orchestrator",
            Role::Specialist => "specialist",
            Role::Reviewer => "reviewer",
            Role::Executor => "executor",
            Role::Monitor => "monitor",
            Role::Bridge => "bridge",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team label inferred from a workspace name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Writing,
    Actionneurs,
    Code,
    General,
}

impl Team {
    pub fn as_str(self) -> &'static str {
        match self {
            Team::Writing => "writing",
            Team::Actionneurs => "actionneurs",
            Team::Code => "code",
            Team::General => "general",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime status as understood by the dashboard that consumes the report.
/// Extraction always emits `idle`; the other values are the rest of the
/// contract and round-trip through [`crate::report::read_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
    Busy,
    Error,
    Offline,
}

/// Reasoning effort of the agent's model, in the dashboard's value set.
/// Extraction always emits `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingLevel {
    Off,
    Low,
    Medium,
    High,
    Extended,
}

/// A feature attached to an agent because of files present in its workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl Capability {
    pub fn enabled(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled: true,
        }
    }
}

/// Usage figures estimated from memory-log files.
///
/// None of these values are measured. `totalMessages`, `tokensUsed` and `cost`
/// are multiples of the memory document count, and `successRate` and
/// `avgResponseTime` are hash-derived placeholders that stay stable per
/// workspace path. See [`crate::metrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_messages: u64,
    pub success_rate: f64,
    pub avg_response_time: u64,
    pub last_active: Option<DateTime<Utc>>,
    pub tokens_used: u64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub provider: String,
    pub name: String,
    pub alias: String,
    pub thinking: ThinkingLevel,
}

impl Default for ModelDescriptor {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            name: "claude-sonnet-4-5".to_string(),
            alias: "sonnet".to_string(),
            thinking: ThinkingLevel::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub auto_start: bool,
    pub timeout: u64,
    pub retry_attempts: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            auto_start: false,
            timeout: 300,
            retry_attempts: 3,
        }
    }
}

/// One extracted agent. `id` and `workspace` are always the workspace
/// directory name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub status: AgentStatus,
    pub description: String,
    pub model: ModelDescriptor,
    pub capabilities: Vec<Capability>,
    pub metrics: Metrics,
    pub config: RunConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub tags: Vec<String>,
    pub workspace: String,
    pub identity_md: String,
    pub soul_md: String,
}

impl AgentRecord {
    /// First tag, which is the identity emoji when one was declared.
    pub fn badge(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or("📝")
    }
}
