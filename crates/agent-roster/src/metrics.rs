//! Synthetic usage metrics.
//!
//! Workspaces carry no telemetry. Every figure produced here is an estimate
//! derived from the number and modification times of `memory/*.md` files,
//! plus two placeholder values seeded from a stable hash of the workspace
//! path so repeated runs over unchanged input produce identical output.
//! Nothing here should be read as a measurement.

use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};

use crate::layout::memory_documents;
use crate::model::Metrics;

/// Estimated messages per memory document.
pub const MESSAGES_PER_DOCUMENT: u64 = 10;
/// Estimated tokens per message.
pub const TOKENS_PER_MESSAGE: u64 = 500;
/// Estimated USD cost per message.
pub const COST_PER_MESSAGE: f64 = 0.003;

const SUCCESS_RATE_BASE: f64 = 95.0;
const SUCCESS_RATE_SPAN: u64 = 5;
const RESPONSE_TIME_BASE: u64 = 1200;
const RESPONSE_TIME_SPAN: u64 = 800;

/// Stable 64-bit seed for a workspace path (first 8 bytes of its MD5).
pub fn path_seed(path: &Path) -> u64 {
    let digest = md5::compute(path.to_string_lossy().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.0[..8]);
    u64::from_le_bytes(bytes)
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Build metrics from a document count, latest activity and hash seed.
pub fn synthesize(document_count: u64, last_active: Option<DateTime<Utc>>, seed: u64) -> Metrics {
    let total_messages = document_count * MESSAGES_PER_DOCUMENT;
    Metrics {
        total_messages,
        success_rate: SUCCESS_RATE_BASE + (seed % SUCCESS_RATE_SPAN) as f64,
        avg_response_time: RESPONSE_TIME_BASE + seed % RESPONSE_TIME_SPAN,
        last_active,
        tokens_used: total_messages * TOKENS_PER_MESSAGE,
        cost: round_cents(total_messages as f64 * COST_PER_MESSAGE),
    }
}

/// Estimate metrics for the workspace at `workspace`.
pub fn estimate_metrics(workspace: &Path) -> anyhow::Result<Metrics> {
    let docs = memory_documents(workspace)?;
    let mut last_active: Option<DateTime<Utc>> = None;
    for doc in &docs {
        let modified = std::fs::metadata(doc)
            .and_then(|m| m.modified())
            .with_context(|| format!("mtime {}", doc.display()))?;
        let modified = DateTime::<Utc>::from(modified);
        if last_active.is_none_or(|cur| modified > cur) {
            last_active = Some(modified);
        }
    }
    Ok(synthesize(docs.len() as u64, last_active, path_seed(workspace)))
}
