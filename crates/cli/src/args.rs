use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which vocabulary the snapshot file is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderKind {
    /// Storefront order with exchanges, claims, returns and edits
    Sales,
    /// Supplier purchase order with deliveries
    #[value(alias = "purchasing")]
    Purchase,
}

#[derive(Debug, Parser)]
#[command(name = "ordertrail")]
#[command(about = "Build an order timeline from a JSON snapshot")]
#[command(version)]
pub struct Args {
    /// Order kind of the snapshot
    #[arg(value_enum)]
    pub kind: OrderKind,

    /// Path to the snapshot document
    pub snapshot: PathBuf,
}
