//! Compiler run configuration.

use std::path::{Path, PathBuf};

use crate::emit::OutputFormat;

/// Input path that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Configuration for one compiler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Template description to read (`-` for stdin).
    pub input: PathBuf,
    /// Destination for the rows; stdout when unset.
    pub output: Option<PathBuf>,
    /// Row layout.
    pub format: OutputFormat,
    /// Suppress progress and summary output on stderr.
    pub quiet: bool,
    /// Print the miai group listing to stderr before compiling.
    pub list_miai: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            input: PathBuf::from(STDIN_PATH),
            output: None,
            format: OutputFormat::Table,
            quiet: false,
            list_miai: false,
        }
    }
}

impl CompilerConfig {
    /// Whether the input is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_stdin_writes_table() {
        let cfg = CompilerConfig::default();
        assert!(cfg.reads_stdin());
        assert_eq!(cfg.output, None);
        assert_eq!(cfg.format, OutputFormat::Table);
        assert!(!cfg.quiet);
        assert!(!cfg.list_miai);
    }

    #[test]
    fn file_input_is_not_stdin() {
        let cfg = CompilerConfig {
            input: PathBuf::from("templates.json"),
            ..CompilerConfig::default()
        };
        assert!(!cfg.reads_stdin());
    }
}
