//! Template compilation.
//!
//! Turns each authored template into a `CompiledTemplate`: three packed views
//! with their shifts, the miai group id, and the defence offset lists. Every
//! template compiles independently; `compile_all` numbers them in input order
//! and stops at the first error.

pub mod defence;
pub mod miai;
pub mod pack;
pub mod view;

use std::fmt;

use serde::Serialize;

pub use defence::{collect_defence, DefenceOffsets};
pub use miai::{MiaiError, MiaiIndex};
pub use pack::{pack_bits, PackError, MAX_VIEW_WIDTH};
pub use view::{resolve_offset, View, ViewCell, ViewEncoding, ViewKind, ALL_VIEWS};

use crate::template::{Pattern, PatternError, Template, TemplateKey, TemplateSet};

/// One compiled row. Field order is the row layout read by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledTemplate {
    pub template_id: usize,
    pub attack_bits: u32,
    pub empty_bits: u32,
    pub enemy_bits: u32,
    pub attack_shift: i32,
    pub empty_shift: i32,
    pub enemy_shift: i32,
    pub priority: i32,
    pub miai_group_id: i64,
    pub defence_offsets: Vec<i32>,
    pub defence_priorities: Vec<i32>,
}

/// Which pattern string of a template an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternField {
    Pattern,
    DefencePattern,
}

impl fmt::Display for PatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternField::Pattern => f.write_str("pattern"),
            PatternField::DefencePattern => f.write_str("defence_pattern"),
        }
    }
}

/// Fatal authoring errors found while compiling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("template {id} (#{index}): {field}: {source}")]
    Pattern {
        index: usize,
        id: TemplateKey,
        field: PatternField,
        source: PatternError,
    },

    #[error("template {id} (#{index}): attack view has no stones")]
    EmptyAttackView { index: usize, id: TemplateKey },

    #[error("template {id} (#{index}): {view} view: {source}")]
    TooWide {
        index: usize,
        id: TemplateKey,
        view: ViewKind,
        source: PackError,
    },

    #[error("template {id} (#{index}): unresolved miai group")]
    UnresolvedMiai { index: usize, id: TemplateKey },

    #[error(transparent)]
    Miai(#[from] MiaiError),
}

/// Compiles a single template. `index` becomes its template id.
pub fn compile_template(
    index: usize,
    template: &Template,
    miai: &MiaiIndex,
) -> Result<CompiledTemplate, CompileError> {
    let id = &template.unique_id;
    let parse = |s: &str, field: PatternField| {
        Pattern::parse(s).map_err(|source| CompileError::Pattern {
            index,
            id: id.clone(),
            field,
            source,
        })
    };
    let pattern = parse(&template.pattern, PatternField::Pattern)?;
    let defence_pattern = parse(&template.defence_pattern, PatternField::DefencePattern)?;

    let mut encodings = [ViewEncoding { bits: 0, shift: 0 }; 3];
    for (slot, kind) in encodings.iter_mut().zip(ALL_VIEWS) {
        let view = View::build(kind, &pattern);
        if kind == ViewKind::Attack && view.bit_source().is_empty() {
            return Err(CompileError::EmptyAttackView {
                index,
                id: id.clone(),
            });
        }
        *slot = view.encode().map_err(|source| CompileError::TooWide {
            index,
            id: id.clone(),
            view: kind,
            source,
        })?;
    }
    let [attack, empty, enemy] = encodings;

    let miai_group_id = miai.lookup(id).ok_or_else(|| CompileError::UnresolvedMiai {
        index,
        id: id.clone(),
    })?;

    let defence = collect_defence(&defence_pattern, template.priority);

    Ok(CompiledTemplate {
        template_id: index,
        attack_bits: attack.bits,
        empty_bits: empty.bits,
        enemy_bits: enemy.bits,
        attack_shift: attack.shift,
        empty_shift: empty.shift,
        enemy_shift: enemy.shift,
        priority: template.priority,
        miai_group_id,
        defence_offsets: defence.offsets,
        defence_priorities: defence.priorities,
    })
}

/// Compiles every template of the set, in input order.
pub fn compile_all(set: &TemplateSet) -> Result<Vec<CompiledTemplate>, CompileError> {
    let miai = MiaiIndex::build(&set.miai_groups)?;
    set.templates
        .iter()
        .enumerate()
        .map(|(index, template)| compile_template(index, template, &miai))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::MiaiGroup;

    fn template(id: i64, pattern: &str, defence: &str, priority: i32) -> Template {
        Template {
            unique_id: TemplateKey::Int(id),
            pattern: pattern.to_string(),
            defence_pattern: defence.to_string(),
            priority,
        }
    }

    fn set(templates: Vec<Template>, groups: Vec<(i64, Vec<i64>)>) -> TemplateSet {
        TemplateSet {
            templates,
            miai_groups: groups
                .into_iter()
                .map(|(group_id, members)| MiaiGroup {
                    group_id,
                    members: members.into_iter().map(TemplateKey::Int).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn worked_example_row() {
        let s = set(
            vec![template(10, "01*10", "1*01", 7)],
            vec![(3, vec![10])],
        );
        let rows = compile_all(&s).unwrap();
        assert_eq!(
            rows,
            vec![CompiledTemplate {
                template_id: 0,
                attack_bits: 5,
                empty_bits: 21,
                enemy_bits: 0,
                attack_shift: -1,
                empty_shift: -2,
                enemy_shift: 0,
                priority: 7,
                miai_group_id: 3,
                defence_offsets: vec![0, 1, -2],
                defence_priorities: vec![7, 7, 7],
            }]
        );
    }

    #[test]
    fn template_ids_follow_input_order() {
        let s = set(
            vec![
                template(30, "1*", "*", 1),
                template(10, "*1", "*", 1),
                template(20, "1*1", "*", 1),
            ],
            vec![(0, vec![10, 20, 30])],
        );
        let rows = compile_all(&s).unwrap();
        let ids: Vec<usize> = rows.iter().map(|r| r.template_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn recompiling_is_identical() {
        let s = set(
            vec![template(1, "E1*01", "11*1", 4), template(2, "0*110", "*01", 2)],
            vec![(0, vec![1]), (1, vec![2])],
        );
        assert_eq!(compile_all(&s).unwrap(), compile_all(&s).unwrap());
    }

    #[test]
    fn defence_lists_are_parallel() {
        let miai = MiaiIndex::build(&set(vec![], vec![(0, vec![1])]).miai_groups).unwrap();
        let row = compile_template(0, &template(1, "1*1", "1E1*0110", 6), &miai).unwrap();
        assert_eq!(row.defence_offsets.len(), row.defence_priorities.len());
        assert_eq!(row.defence_offsets[0], 0);
        assert_eq!(row.defence_priorities[0], 6);
        assert_eq!(row.defence_offsets, vec![0, 1, 3, -2, -3]);
    }

    #[test]
    fn enemy_bits_zero_without_edges() {
        let s = set(
            vec![template(1, "0110*0100", "*", 1)],
            vec![(0, vec![1])],
        );
        let row = &compile_all(&s).unwrap()[0];
        assert_eq!(row.enemy_bits, 0);
        assert_eq!(row.enemy_shift, 0);
    }

    #[test]
    fn missing_anchor_in_pattern() {
        let s = set(vec![template(4, "0110", "*", 1)], vec![(0, vec![4])]);
        let err = compile_all(&s).unwrap_err();
        assert_eq!(
            err,
            CompileError::Pattern {
                index: 0,
                id: TemplateKey::Int(4),
                field: PatternField::Pattern,
                source: PatternError::MissingAnchor,
            }
        );
        assert!(err.to_string().contains("missing anchor"));
    }

    #[test]
    fn missing_anchor_in_defence_pattern() {
        let s = set(vec![template(4, "1*", "101", 1)], vec![(0, vec![4])]);
        let err = compile_all(&s).unwrap_err();
        assert_eq!(
            err.to_string(),
            "template 4 (#0): defence_pattern: missing anchor '*'"
        );
    }

    #[test]
    fn unresolved_miai_group() {
        let s = set(
            vec![template(1, "1*", "*", 1), template(2, "*1", "*", 1)],
            vec![(0, vec![1])],
        );
        let err = compile_all(&s).unwrap_err();
        assert_eq!(
            err,
            CompileError::UnresolvedMiai {
                index: 1,
                id: TemplateKey::Int(2)
            }
        );
        assert_eq!(err.to_string(), "template 2 (#1): unresolved miai group");
    }

    #[test]
    fn conflicting_miai_groups() {
        let s = set(vec![template(1, "1*", "*", 1)], vec![(0, vec![1]), (1, vec![1])]);
        assert!(matches!(compile_all(&s), Err(CompileError::Miai(_))));
    }

    #[test]
    fn pattern_without_stones_is_rejected() {
        let s = set(vec![template(8, "E0*0", "*", 1)], vec![(0, vec![8])]);
        assert_eq!(
            compile_all(&s).unwrap_err(),
            CompileError::EmptyAttackView {
                index: 0,
                id: TemplateKey::Int(8)
            }
        );
    }

    #[test]
    fn wide_pattern_is_rejected() {
        let pattern = format!("1{}*1", "0".repeat(40));
        let s = set(vec![template(1, &pattern, "*", 1)], vec![(0, vec![1])]);
        assert!(matches!(
            compile_all(&s),
            Err(CompileError::TooWide {
                view: ViewKind::Attack,
                ..
            })
        ));
    }

    #[test]
    fn empty_set_compiles_to_nothing() {
        let s = set(vec![], vec![]);
        assert!(compile_all(&s).unwrap().is_empty());
    }
}
