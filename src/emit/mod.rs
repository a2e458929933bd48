//! Serialization of compiled rows.
//!
//! Rows keep the field order the line-scanning engine expects:
//! `templateId, attackBits, emptyBits, enemyBits, attackShift, emptyShift,
//! enemyShift, priority, miaiGroupId, defenceOffsets, defencePriorities`.

pub mod jsonl;
pub mod table;

use std::io::Write;

use crate::compile::CompiledTemplate;

pub use jsonl::write_jsonl_row;
pub use table::write_table_row;

/// Errors raised while writing rows.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to write rows: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode row as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output layout for compiled rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aggregate-initializer rows, one per line, ready to include in C++.
    #[default]
    Table,
    /// One JSON object per line.
    Jsonl,
}

/// Writes every row in order, one per line.
pub fn write_rows<W: Write>(
    rows: &[CompiledTemplate],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), EmitError> {
    for row in rows {
        match format {
            OutputFormat::Table => write_table_row(row, out)?,
            OutputFormat::Jsonl => write_jsonl_row(row, out)?,
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
