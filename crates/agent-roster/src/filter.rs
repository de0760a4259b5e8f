//! Name-based workspace filtering.
//!
//! Patterns are either an exact directory name or a prefix followed by `*`.
//! Exclusions are evaluated before inclusions, so a curated exclude entry
//! always wins over a broader include prefix. Names matching no include
//! pattern are rejected.

/// A single workspace name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspacePattern {
    Exact(String),
    Prefix(String),
}

impl WorkspacePattern {
    /// Parse `name` or `prefix*`. Only a trailing `*` is meaningful.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_suffix('*') {
            Some(prefix) => WorkspacePattern::Prefix(prefix.trim_end_matches('*').to_string()),
            None => WorkspacePattern::Exact(raw.to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            WorkspacePattern::Exact(exact) => name == exact,
            WorkspacePattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

/// Workspaces scanned by default.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "workspace-code-*",
    "workspace-frontend-*",
    "workspace-qa-*",
    "workspace-orchestration-*",
    "workspace-backend-*",
    "workspace-testing-*",
    "workspace-writing-*",
];

/// Workspaces skipped by default: containers, retired workspaces and known
/// duplicates of agents that live under another name.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    // novel project agents are published through workspace-writing-*
    "workspace-project-*",
    "workspace-amelia-dev",
    "workspace-main",
    "workspace-orchestrator",
    "workspace-coordinator",
    "workspace-elon-*",
    "workspace-damasio",
    // duplicate of workspace-frontend-amelia
    "workspace-code-amelia",
    // retired
    "workspace-code-john",
    // duplicate of workspace-orchestration-winston
    "workspace-code-winston",
    "workspace",
];

/// Ordered include/exclude pattern lists.
#[derive(Debug, Clone)]
pub struct WorkspaceFilter {
    include: Vec<WorkspacePattern>,
    exclude: Vec<WorkspacePattern>,
}

impl Default for WorkspaceFilter {
    fn default() -> Self {
        Self::new(DEFAULT_INCLUDE, DEFAULT_EXCLUDE)
    }
}

impl WorkspaceFilter {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let parse_all = |items: Vec<String>| -> Vec<WorkspacePattern> {
            items
                .iter()
                .filter(|s| !s.trim().is_empty())
                .map(|s| WorkspacePattern::parse(s))
                .collect()
        };
        Self {
            include: parse_all(include.into_iter().map(|s| s.as_ref().to_string()).collect()),
            exclude: parse_all(exclude.into_iter().map(|s| s.as_ref().to_string()).collect()),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|p| p.matches(name))
    }

    /// Decide whether a workspace directory named `name` is scanned.
    pub fn includes(&self, name: &str) -> bool {
        if self.is_excluded(name) {
            return false;
        }
        self.include.iter().any(|p| p.matches(name))
    }
}
