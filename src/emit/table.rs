//! Aggregate-initializer rows.
//!
//! `{id, attack, empty, enemy, attackShift, emptyShift, enemyShift, priority,
//! miai, {offsets...}, {priorities...}},`

use std::io::{self, Write};

use crate::compile::CompiledTemplate;

/// Writes one row without the trailing newline.
pub fn write_table_row<W: Write>(row: &CompiledTemplate, out: &mut W) -> io::Result<()> {
    write!(
        out,
        "{{{}, {}, {}, {}, {}, {}, {}, {}, {}, ",
        row.template_id,
        row.attack_bits,
        row.empty_bits,
        row.enemy_bits,
        row.attack_shift,
        row.empty_shift,
        row.enemy_shift,
        row.priority,
        row.miai_group_id
    )?;
    write_braced_list(&row.defence_offsets, out)?;
    write!(out, ", ")?;
    write_braced_list(&row.defence_priorities, out)?;
    write!(out, "}},")
}

fn write_braced_list<W: Write>(values: &[i32], out: &mut W) -> io::Result<()> {
    write!(out, "{{")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", v)?;
    }
    write!(out, "}}")
}
