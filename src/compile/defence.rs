//! Defence offsets of a template.
//!
//! The defence pattern marks, with `1`, the cells the defending side should
//! consider once the template fires. Offsets use the same convention as the
//! view shifts: `anchor - index`, positive before the anchor.

use crate::template::{Pattern, Symbol};

/// Parallel offset and priority lists, seeded with the anchor itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefenceOffsets {
    pub offsets: Vec<i32>,
    pub priorities: Vec<i32>,
}

impl DefenceOffsets {
    fn push(&mut self, offset: i32, priority: i32) {
        self.offsets.push(offset);
        self.priorities.push(priority);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Collects the defence offsets of `pattern`, every entry at `priority`.
///
/// Order: the anchor `(0, priority)`, then stones to the left nearest first,
/// then stones to the right nearest first.
pub fn collect_defence(pattern: &Pattern, priority: i32) -> DefenceOffsets {
    let cells = pattern.cells();
    let anchor = pattern.anchor();
    let mut out = DefenceOffsets {
        offsets: vec![0],
        priorities: vec![priority],
    };

    let left = (0..anchor).rev();
    let right = anchor + 1..cells.len();
    for i in left.chain(right) {
        if cells[i] == Symbol::Stone {
            out.push(anchor as i32 - i as i32, priority);
        }
    }
    out
}
