use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::filter::{DEFAULT_EXCLUDE, DEFAULT_INCLUDE, WorkspaceFilter};
use crate::loader::ScanSettings;

/// Default scan root, relative to `$HOME`.
pub const DEFAULT_ROOT_DIR: &str = ".openclaw";
/// Default report path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "data/agents.json";

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub scan: Option<ScanCfg>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<String>,
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub pretty: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanCfg {
    pub root: Option<String>,   // `~/` is expanded
    pub output: Option<String>, // `~/` is expanded
    /// Replaces the default include list when present.
    pub include: Option<Vec<String>>,
    /// Replaces the default exclude list when present.
    pub exclude: Option<Vec<String>>,
}

pub fn load_user_config(roster_home: &Path) -> anyhow::Result<Option<UserConfig>> {
    let path = roster_home.join("config.toml");
    if !path
        .try_exists()
        .with_context(|| format!("stat config {}", path.display()))?
    {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: UserConfig =
        toml::from_str(&s).with_context(|| format!("parse config {}", path.display()))?;
    Ok(Some(cfg))
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve scan settings and the report path. Non-empty environment values
/// win over the config file, which wins over the defaults.
pub fn resolve_scan(
    env_root: &str,
    env_output: &str,
    cfg: Option<&ScanCfg>,
) -> (ScanSettings, PathBuf) {
    let root = if !env_root.is_empty() {
        expand_home(env_root)
    } else if let Some(r) = cfg.and_then(|c| c.root.as_deref()) {
        expand_home(r)
    } else {
        home_dir().join(DEFAULT_ROOT_DIR)
    };
    let output = if !env_output.is_empty() {
        expand_home(env_output)
    } else if let Some(o) = cfg.and_then(|c| c.output.as_deref()) {
        expand_home(o)
    } else {
        PathBuf::from(DEFAULT_OUTPUT)
    };
    let include: Vec<String> = cfg
        .and_then(|c| c.include.clone())
        .unwrap_or_else(|| DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect());
    let exclude: Vec<String> = cfg
        .and_then(|c| c.exclude.clone())
        .unwrap_or_else(|| DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect());
    (
        ScanSettings {
            root,
            filter: WorkspaceFilter::new(include, exclude),
        },
        output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_user_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn parses_scan_and_logging_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            r#"
[logging]
level = "debug"
to_file = true

[scan]
root = "/srv/openclaw"
include = ["workspace-ops-*"]
"#,
        )
        .unwrap();
        let cfg = load_user_config(dir.path()).unwrap().expect("config present");
        let logging = cfg.logging.expect("logging");
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.to_file, Some(true));
        let scan = cfg.scan.expect("scan");
        assert_eq!(scan.root.as_deref(), Some("/srv/openclaw"));
        assert_eq!(scan.include, Some(vec!["workspace-ops-*".to_string()]));
        assert!(scan.exclude.is_none());
        assert!(scan.output.is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[scan\nroot = 1").unwrap();
        assert!(load_user_config(dir.path()).is_err());
    }

    #[test]
    fn env_wins_over_config() {
        let cfg = ScanCfg {
            root: Some("/from/config".into()),
            output: Some("/from/config/out.json".into()),
            ..Default::default()
        };
        let (settings, output) = resolve_scan("/from/env", "", Some(&cfg));
        assert_eq!(settings.root, PathBuf::from("/from/env"));
        assert_eq!(output, PathBuf::from("/from/config/out.json"));
    }

    #[test]
    fn defaults_without_env_or_config() {
        let (settings, output) = resolve_scan("", "", None);
        assert!(settings.root.ends_with(DEFAULT_ROOT_DIR));
        assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(settings.filter.includes("workspace-code-bob"));
        assert!(!settings.filter.includes("workspace-main"));
    }

    #[test]
    fn config_lists_replace_defaults() {
        let cfg = ScanCfg {
            include: Some(vec!["workspace-ops-*".into()]),
            exclude: Some(vec![]),
            ..Default::default()
        };
        let (settings, _) = resolve_scan("", "", Some(&cfg));
        assert!(settings.filter.includes("workspace-ops-1"));
        assert!(!settings.filter.includes("workspace-code-bob"));
    }

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
    }
}
