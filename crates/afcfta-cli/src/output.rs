//! Output rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned human-readable text.
    #[default]
    Table,
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{rendered}");
    Ok(())
}

/// `18` → `18%`, `7.50` → `7.50%`.
pub fn pct(value: impl std::fmt::Display) -> String {
    format!("{value}%")
}
