//! Attack, empty and enemy views of a pattern.
//!
//! Each view substitutes the pattern's symbols into binary digits (the anchor
//! stays unresolved), then derives two strings from the result:
//!
//! - the offset source, trimmed of zeros at both ends, from which the view's
//!   shift is resolved;
//! - the bit source, where the anchor becomes a fixed digit, trimmed per view
//!   and packed into an integer.
//!
//! Trimming narrows an index range over the substituted cells; the cells
//! themselves are never rebuilt.

use std::fmt;
use std::ops::Range;

use super::pack::{pack_bits, PackError};
use crate::template::{Pattern, Symbol};

/// A cell of a substituted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCell {
    Zero,
    One,
    Anchor,
}

/// Which of the three encodings to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Own stones. Edges read as empty.
    Attack,
    /// Empty cells. Stones and edges read as zero.
    Empty,
    /// Edges, which block the line like an enemy stone.
    Enemy,
}

/// The three views, in row order.
pub const ALL_VIEWS: [ViewKind; 3] = [ViewKind::Attack, ViewKind::Empty, ViewKind::Enemy];

impl ViewKind {
    /// Maps a pattern symbol into this view.
    pub const fn substitute(self, symbol: Symbol) -> ViewCell {
        match (self, symbol) {
            (_, Symbol::Anchor) => ViewCell::Anchor,
            (ViewKind::Attack, Symbol::Stone) => ViewCell::One,
            (ViewKind::Attack, _) => ViewCell::Zero,
            (ViewKind::Empty, Symbol::Empty) => ViewCell::One,
            (ViewKind::Empty, _) => ViewCell::Zero,
            (ViewKind::Enemy, Symbol::Edge) => ViewCell::One,
            (ViewKind::Enemy, _) => ViewCell::Zero,
        }
    }

    /// The digit the anchor takes in the bit source.
    pub const fn anchor_bit(self) -> bool {
        matches!(self, ViewKind::Empty)
    }

    /// Whether leading zeros are trimmed from the bit source.
    pub const fn trims_leading_bits(self) -> bool {
        !matches!(self, ViewKind::Attack)
    }

    /// Lowercase view name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ViewKind::Attack => "attack",
            ViewKind::Empty => "empty",
            ViewKind::Enemy => "enemy",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The substituted cells of one view, with the anchor index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    kind: ViewKind,
    cells: Vec<ViewCell>,
    anchor: usize,
}

/// A finished view: packed bits and resolved shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEncoding {
    pub bits: u32,
    pub shift: i32,
}

impl View {
    /// Substitutes a pattern into the given view.
    pub fn build(kind: ViewKind, pattern: &Pattern) -> View {
        View {
            kind,
            cells: pattern.cells().iter().map(|&s| kind.substitute(s)).collect(),
            anchor: pattern.anchor(),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn cells(&self) -> &[ViewCell] {
        &self.cells
    }

    /// The offset source: the cells with zeros trimmed from both ends.
    /// The anchor is never trimmed, so the range always contains it.
    pub fn offset_source(&self) -> Range<usize> {
        trim(&self.cells, |c| c == ViewCell::Zero, true)
    }

    /// The signed shift of this view, resolved on its offset source.
    pub fn shift(&self) -> i32 {
        let range = self.offset_source();
        let anchor = self.anchor - range.start;
        resolve_offset(&self.cells[range], anchor)
    }

    /// The bit source: cells as digits with the anchor fixed, trimmed per view.
    pub fn bit_source(&self) -> Vec<bool> {
        let mut digits: Vec<bool> = self
            .cells
            .iter()
            .map(|&c| match c {
                ViewCell::Zero => false,
                ViewCell::One => true,
                ViewCell::Anchor => self.kind.anchor_bit(),
            })
            .collect();

        // A lone anchor cell carries no enemy information.
        if self.kind == ViewKind::Enemy && digits.len() == 1 {
            digits.clear();
        }

        let range = trim(&digits, |d| !d, self.kind.trims_leading_bits());
        digits[range].to_vec()
    }

    /// Packs the bit source. An empty bit source packs to 0.
    pub fn bits(&self) -> Result<u32, PackError> {
        pack_bits(&self.bit_source())
    }

    /// Packs the bits and resolves the shift.
    pub fn encode(&self) -> Result<ViewEncoding, PackError> {
        Ok(ViewEncoding {
            bits: self.bits()?,
            shift: self.shift(),
        })
    }
}

/// Narrows `0..cells.len()` past trimmable cells at the end and, when
/// `leading` is set, at the start.
fn trim<T: Copy>(cells: &[T], trimmable: impl Fn(T) -> bool, leading: bool) -> Range<usize> {
    let mut start = 0;
    let mut end = cells.len();
    while end > start && trimmable(cells[end - 1]) {
        end -= 1;
    }
    if leading {
        while start < end && trimmable(cells[start]) {
            start += 1;
        }
    }
    start..end
}

/// Resolves the representative offset of a view relative to `anchor`.
///
/// Prefers the farthest `One` at or after the anchor. Only when there is none
/// does it fall back to the nearest `One` before the anchor. With no `One`
/// at all the offset is 0. Offsets are `anchor - index`.
pub fn resolve_offset(cells: &[ViewCell], anchor: usize) -> i32 {
    if anchor >= cells.len() {
        return 0;
    }
    let is_one = |i: &usize| cells[*i] == ViewCell::One;

    let hit = (anchor..cells.len())
        .filter(is_one)
        .last()
        .or_else(|| (0..=anchor).rev().find(is_one));

    hit.map_or(0, |i| anchor as i32 - i as i32)
}
