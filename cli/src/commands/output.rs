//! Output Rendering
//!
//! Text mode prints the trace the way it would be written out by hand; JSON
//! mode prints the engine result as-is.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Format {
    /// Human-readable trace
    Text,
    /// Pretty-printed JSON (result plus structured trace)
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
