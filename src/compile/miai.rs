//! Template id to miai group lookup.

use std::collections::HashMap;

use crate::template::{MiaiGroup, TemplateKey};

/// Errors raised while inverting the miai groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MiaiError {
    #[error("template {id} listed in miai groups {first} and {second}")]
    ConflictingGroups {
        id: TemplateKey,
        first: i64,
        second: i64,
    },
}

/// Reverse index from template unique-id to the id of its miai group.
#[derive(Debug, Clone, Default)]
pub struct MiaiIndex {
    groups: HashMap<TemplateKey, i64>,
}

impl MiaiIndex {
    /// Inverts the groups. Listing a template twice in the same group is
    /// accepted; listing it under two different groups is not.
    pub fn build(groups: &[MiaiGroup]) -> Result<MiaiIndex, MiaiError> {
        let mut index = HashMap::new();
        for group in groups {
            for id in &group.members {
                if let Some(&first) = index.get(id) {
                    if first != group.group_id {
                        return Err(MiaiError::ConflictingGroups {
                            id: id.clone(),
                            first,
                            second: group.group_id,
                        });
                    }
                    continue;
                }
                index.insert(id.clone(), group.group_id);
            }
        }
        Ok(MiaiIndex { groups: index })
    }

    /// Returns the group id for a template, if any group lists it.
    pub fn lookup(&self, id: &TemplateKey) -> Option<i64> {
        self.groups.get(id).copied()
    }

    /// Number of distinct templates covered by the index.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(group_id: i64, members: &[i64]) -> MiaiGroup {
        MiaiGroup {
            group_id,
            members: members.iter().map(|&m| TemplateKey::Int(m)).collect(),
        }
    }

    #[test]
    fn inverts_groups() {
        let index = MiaiIndex::build(&[group(0, &[1, 2]), group(5, &[3])]).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup(&TemplateKey::Int(1)), Some(0));
        assert_eq!(index.lookup(&TemplateKey::Int(2)), Some(0));
        assert_eq!(index.lookup(&TemplateKey::Int(3)), Some(5));
    }

    #[test]
    fn missing_id_is_none() {
        let index = MiaiIndex::build(&[group(0, &[1])]).unwrap();
        assert_eq!(index.lookup(&TemplateKey::Int(9)), None);
        assert_eq!(index.lookup(&TemplateKey::Name("1".to_string())), None);
    }

    #[test]
    fn empty_groups_build_empty_index() {
        let index = MiaiIndex::build(&[]).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn repeat_in_same_group_is_accepted() {
        let index = MiaiIndex::build(&[group(2, &[1, 1]), group(2, &[1])]).unwrap();
        assert_eq!(index.lookup(&TemplateKey::Int(1)), Some(2));
    }

    #[test]
    fn conflicting_groups_are_rejected() {
        let err = MiaiIndex::build(&[group(2, &[1]), group(3, &[1])]).unwrap_err();
        assert_eq!(
            err,
            MiaiError::ConflictingGroups {
                id: TemplateKey::Int(1),
                first: 2,
                second: 3
            }
        );
    }
}
