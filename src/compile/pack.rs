//! Bit packing of finished views.

/// Maximum number of significant digits a packed view may carry.
pub const MAX_VIEW_WIDTH: usize = u32::BITS as usize;

/// Errors raised while packing a view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("{width} significant cells do not fit in {} bits", MAX_VIEW_WIDTH)]
    TooWide { width: usize },
}

/// Reads `digits` as a base-2 numeral, most significant digit first.
/// Leading zeros are allowed in any number; an empty slice packs to 0.
pub fn pack_bits(digits: &[bool]) -> Result<u32, PackError> {
    let significant = match digits.iter().position(|&d| d) {
        Some(first) => &digits[first..],
        None => return Ok(0),
    };
    if significant.len() > MAX_VIEW_WIDTH {
        return Err(PackError::TooWide {
            width: significant.len(),
        });
    }
    Ok(significant
        .iter()
        .fold(0u32, |acc, &d| (acc << 1) | u32::from(d)))
}
