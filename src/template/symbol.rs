//! Template symbols and parsed line patterns.
//!
//! A pattern is a short string over the alphabet `0`, `1`, `E`, `*` that
//! describes the cells of one board line around a candidate move. Parsing
//! checks the alphabet and locates the single anchor cell.

use std::fmt;

/// One cell of a line pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `0`: an empty cell.
    Empty,
    /// `1`: a stone of the side the template is written for.
    Stone,
    /// `E`: beyond the playable line.
    Edge,
    /// `*`: the candidate cell every offset is measured from.
    Anchor,
}

impl Symbol {
    /// Returns the character used for this symbol in template files.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Empty => '0',
            Symbol::Stone => '1',
            Symbol::Edge => 'E',
            Symbol::Anchor => '*',
        }
    }

    /// Parses a symbol from its template-file character.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '0' => Some(Symbol::Empty),
            '1' => Some(Symbol::Stone),
            'E' => Some(Symbol::Edge),
            '*' => Some(Symbol::Anchor),
            _ => None,
        }
    }
}

/// Errors that can occur while parsing a pattern string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("missing anchor '*'")]
    MissingAnchor,

    #[error("multiple anchors at positions {first} and {second}")]
    MultipleAnchors { first: usize, second: usize },

    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// A validated pattern: its cells plus the index of its anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Symbol>,
    anchor: usize,
}

impl Pattern {
    /// Parses a pattern string, requiring exactly one anchor.
    pub fn parse(s: &str) -> Result<Pattern, PatternError> {
        let mut cells = Vec::with_capacity(s.len());
        let mut anchor: Option<usize> = None;

        for (position, c) in s.chars().enumerate() {
            let symbol =
                Symbol::from_char(c).ok_or(PatternError::InvalidSymbol { symbol: c, position })?;
            if symbol == Symbol::Anchor {
                if let Some(first) = anchor {
                    return Err(PatternError::MultipleAnchors {
                        first,
                        second: position,
                    });
                }
                anchor = Some(position);
            }
            cells.push(symbol);
        }

        let anchor = anchor.ok_or(PatternError::MissingAnchor)?;
        Ok(Pattern { cells, anchor })
    }

    /// All cells, left to right.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Index of the anchor cell.
    pub fn anchor(&self) -> usize {
        self.anchor
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.cells {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}
