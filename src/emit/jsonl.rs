//! JSON-lines rows.

use std::io::Write;

use crate::compile::CompiledTemplate;

/// Writes one row as a compact JSON object, without the trailing newline.
/// Keys appear in row order.
pub fn write_jsonl_row<W: Write>(
    row: &CompiledTemplate,
    out: &mut W,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer(out, row)
}
