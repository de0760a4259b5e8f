use std::path::{Path, PathBuf};

use env_flags::env_flags;
use once_cell::sync::OnceCell;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, prelude::*};

use agent_roster::config::{LoggingCfg, load_user_config, resolve_scan};
use agent_roster::loader::scan_workspaces;
use agent_roster::report::{print_summary, write_report};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Copy)]
enum LogStyle {
    Json,
    Compact,
    Pretty,
    Full,
}

fn fmt_layer<W>(writer: W, ansi: bool, style: LogStyle) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer);
    match style {
        LogStyle::Json => base.json().boxed(),
        LogStyle::Compact => base.compact().boxed(),
        LogStyle::Pretty => base.pretty().boxed(),
        LogStyle::Full => base.boxed(),
    }
}

fn roster_home() -> PathBuf {
    env_flags! {
        /// Roster home directory (absolute). Defaults to $HOME/.agent-roster
        ROSTER_HOME: &str = "";
    }
    if !(*ROSTER_HOME).is_empty() {
        PathBuf::from((*ROSTER_HOME).to_string())
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".agent-roster")
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".agent-roster")
    }
}

fn init_tracing(roster_home: &Path, cfg: Option<&LoggingCfg>) {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// Pretty formatting for logs (ignored if TRACING_JSON=true).
        TRACING_PRETTY: bool = false;
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
        /// If true, also log to file under <ROSTER_HOME>/logs or LOG_DIR
        LOG_TO_FILE: bool = false;
        /// Optional explicit log directory (absolute). Defaults to <ROSTER_HOME>/logs
        LOG_DIR: &str = "";
    }

    let env_set = |k: &str| std::env::var_os(k).is_some();

    let mut level = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut json = *TRACING_JSON;
    let mut compact = *TRACING_COMPACT;
    let mut pretty = *TRACING_PRETTY;
    let mut to_file = *LOG_TO_FILE;
    let mut log_dir: Option<PathBuf> = if !(*LOG_DIR).is_empty() {
        Some(PathBuf::from((*LOG_DIR).to_string()))
    } else {
        None
    };

    if let Some(cfg) = cfg {
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(l) = cfg.level.as_ref()
        {
            level = l.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            json = v;
        }
        if !env_set("TRACING_COMPACT")
            && let Some(v) = cfg.compact
        {
            compact = v;
        }
        if !env_set("TRACING_PRETTY")
            && let Some(v) = cfg.pretty
        {
            pretty = v;
        }
        if !env_set("LOG_TO_FILE")
            && let Some(v) = cfg.to_file
        {
            to_file = v;
        }
        if !env_set("LOG_DIR")
            && let Some(dir) = cfg.dir.as_ref()
        {
            log_dir = Some(agent_roster::config::expand_home(dir));
        }
    }

    let style = if json {
        LogStyle::Json
    } else if compact {
        LogStyle::Compact
    } else if pretty {
        LogStyle::Pretty
    } else {
        LogStyle::Full
    };

    // stdout carries the summary; logs always go to stderr
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(std::io::stderr, true, style)];

    static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    let mut dir_error = None;
    if to_file {
        let dir = log_dir.unwrap_or_else(|| roster_home.join("logs"));
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "agent-roster.log");
                let (nb, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                layers.push(fmt_layer(nb, false, style));
            }
            Err(e) => dir_error = Some((dir, e)),
        }
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
    {
        eprintln!("tracing already set: {e:?}");
    }
    if let Some((dir, e)) = dir_error {
        tracing::warn!("failed to create log dir {}: {}", dir.display(), e);
    }
}

fn main() -> anyhow::Result<()> {
    let home = roster_home();
    let user_cfg = load_user_config(&home);
    init_tracing(
        &home,
        user_cfg
            .as_ref()
            .ok()
            .and_then(|c| c.as_ref())
            .and_then(|c| c.logging.as_ref()),
    );
    let user_cfg = user_cfg?;

    env_flags! {
        /// Directory holding the workspace-* folders. Defaults to $HOME/.openclaw
        ROSTER_ROOT: &str = "";
        /// Report path. Defaults to data/agents.json in the working directory.
        ROSTER_OUTPUT: &str = "";
    }

    let (settings, output) = resolve_scan(
        *ROSTER_ROOT,
        *ROSTER_OUTPUT,
        user_cfg.as_ref().and_then(|c| c.scan.as_ref()),
    );
    tracing::info!("roster_home={}", home.display());
    tracing::info!("scan_root={}", settings.root.display());

    let outcome = scan_workspaces(&settings)?;
    if outcome.agents.is_empty() {
        tracing::warn!("no agents found; {} not written", output.display());
        return Ok(());
    }

    write_report(&output, &outcome.agents)?;
    tracing::info!(
        "wrote {} agent(s) to {}",
        outcome.agents.len(),
        output.display()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_summary(&mut out, &outcome.agents, &output)?;
    Ok(())
}
