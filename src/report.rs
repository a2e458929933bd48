//! Human-readable listing of the miai groups.
//!
//! Each group prints as a `-` separator, its id, and one line per member with
//! the member's pattern and unique id. Used to eyeball group membership while
//! authoring templates.

use std::io::{self, Write};

use crate::template::TemplateSet;

/// Placeholder printed for members that name no template.
const UNKNOWN_PATTERN: &str = "<unknown>";

/// Writes the miai group listing for `set`.
pub fn write_miai_report<W: Write>(set: &TemplateSet, out: &mut W) -> io::Result<()> {
    for group in &set.miai_groups {
        writeln!(out, "-")?;
        writeln!(out, "Miai id: {}", group.group_id)?;
        for id in &group.members {
            let pattern = set
                .find(id)
                .map_or(UNKNOWN_PATTERN, |t| t.pattern.as_str());
            writeln!(out, "{:<16} {}", pattern, id)?;
        }
    }
    out.flush()
}
