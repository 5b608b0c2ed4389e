//! `ordertrail` binary support: reads a snapshot file and builds its timeline.

pub mod args;

use std::path::Path;

use anyhow::Context;

use ordertrail_timeline::{
    BuildStatus, PurchaseSnapshot, PurchaseVocabulary, SalesSnapshot, SalesVocabulary,
    TimelineConfig, build,
};

pub use args::{Args, OrderKind};

/// Builds the timeline described by a JSON snapshot document.
pub fn build_from_json(
    kind: OrderKind,
    raw: &str,
    config: &TimelineConfig,
) -> anyhow::Result<BuildStatus> {
    let status = match kind {
        OrderKind::Sales => {
            let snapshot: SalesSnapshot =
                serde_json::from_str(raw).context("parsing sales snapshot")?;
            build(&SalesVocabulary, &snapshot, config)?
        }
        OrderKind::Purchase => {
            let snapshot: PurchaseSnapshot =
                serde_json::from_str(raw).context("parsing purchase snapshot")?;
            build(&PurchaseVocabulary, &snapshot, config)?
        }
    };
    Ok(status)
}

pub fn build_from_file(
    kind: OrderKind,
    path: &Path,
    config: &TimelineConfig,
) -> anyhow::Result<BuildStatus> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    build_from_json(kind, &raw, config).with_context(|| format!("building {}", path.display()))
}
