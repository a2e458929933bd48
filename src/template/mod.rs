//! Template description types.
//!
//! Mirrors the JSON description authored upstream: a list of line templates
//! and a list of miai groups naming which templates share a double threat.
//! Field names follow the JSON keys of the authored file.

pub mod input;
pub mod symbol;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use input::{load_templates, load_templates_from_reader, load_templates_from_str, TemplateError};
pub use symbol::{Pattern, PatternError, Symbol};

/// A template's unique identifier. Authored either as a number or a string;
/// `7` and `"7"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TemplateKey {
    Int(i64),
    Name(String),
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKey::Int(n) => write!(f, "{}", n),
            TemplateKey::Name(s) => write!(f, "{}", s),
        }
    }
}

/// A single line template as authored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    #[serde(rename = "uniqueId")]
    pub unique_id: TemplateKey,
    pub pattern: String,
    pub defence_pattern: String,
    pub priority: i32,
}

/// A miai group: templates that share one double-threat relationship.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MiaiGroup {
    #[serde(rename = "miaiId")]
    pub group_id: i64,
    #[serde(rename = "patterns")]
    pub members: Vec<TemplateKey>,
}

/// The full input description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateSet {
    pub templates: Vec<Template>,
    #[serde(rename = "miai_points")]
    pub miai_groups: Vec<MiaiGroup>,
}

impl TemplateSet {
    /// Finds a template by its unique id.
    pub fn find(&self, id: &TemplateKey) -> Option<&Template> {
        self.templates.iter().find(|t| &t.unique_id == id)
    }
}
