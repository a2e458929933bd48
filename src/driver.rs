//! One compiler run: load, compile, emit.
//!
//! The rows are rendered into memory first and written only once every
//! template compiled, so a failing run leaves no partial table behind.

use std::fs;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::compile::compile_all;
use crate::config::CompilerConfig;
use crate::emit::{write_rows, EmitError, OutputFormat};
use crate::error::Error;
use crate::report::write_miai_report;
use crate::template::{load_templates, load_templates_from_reader, TemplateSet};

/// Counters reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub templates: usize,
    pub miai_groups: usize,
    pub bytes_written: usize,
    pub elapsed: Duration,
}

/// Compiles every template of `set` and renders the rows in `format`.
pub fn render(set: &TemplateSet, format: OutputFormat) -> Result<Vec<u8>, Error> {
    let rows = compile_all(set)?;
    let mut buf = Vec::new();
    write_rows(&rows, format, &mut buf)?;
    Ok(buf)
}

/// Runs the compiler as configured.
pub fn run(cfg: &CompilerConfig) -> Result<RunSummary, Error> {
    let start = Instant::now();

    let set = if cfg.reads_stdin() {
        load_templates_from_reader(io::stdin().lock())?
    } else {
        load_templates(&cfg.input)?
    };

    if !cfg.quiet {
        eprintln!(
            "Loaded {} templates and {} miai groups from {}",
            set.templates.len(),
            set.miai_groups.len(),
            cfg.input.display()
        );
    }

    if cfg.list_miai {
        write_miai_report(&set, &mut io::stderr().lock()).map_err(EmitError::from)?;
    }

    let table = render(&set, cfg.format)?;

    match &cfg.output {
        Some(path) => {
            fs::write(path, &table).map_err(|source| Error::Output {
                path: path.clone(),
                source,
            })?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(&table)
                .and_then(|_| out.flush())
                .map_err(EmitError::from)?;
        }
    }

    let summary = RunSummary {
        templates: set.templates.len(),
        miai_groups: set.miai_groups.len(),
        bytes_written: table.len(),
        elapsed: start.elapsed(),
    };

    if !cfg.quiet {
        let dest = cfg
            .output
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        eprintln!(
            "Compiled {} templates in {:.1}ms, wrote {} bytes to {}",
            summary.templates,
            summary.elapsed.as_secs_f64() * 1000.0,
            summary.bytes_written,
            dest
        );
    }

    Ok(summary)
}
