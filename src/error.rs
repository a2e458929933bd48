//! Top-level error type for a compiler run.

use std::path::PathBuf;

use crate::compile::CompileError;
use crate::emit::EmitError;
use crate::template::TemplateError;

/// Any failure that aborts a compiler run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
