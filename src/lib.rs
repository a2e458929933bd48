//! linepat library.
//!
//! Compiles line templates for a connection game into bit-packed rows read by
//! a line-scanning engine. Exposes the template model, the compiler, and the
//! row emitters for use by the binary, integration tests, and benchmarks.

pub mod compile;
pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod report;
pub mod template;

pub use compile::{compile_all, compile_template, CompileError, CompiledTemplate};
pub use config::CompilerConfig;
pub use driver::{render, run, RunSummary};
pub use emit::{write_rows, OutputFormat};
pub use error::Error;
pub use template::{load_templates, load_templates_from_str, Template, TemplateSet};
