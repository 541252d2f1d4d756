//! Responsible for turning a batch of source files into function definitions

use crate::report::CompileReport;
use oberon_ast::error::TraversalError;
use oberon_ast_parsing::parse_unit;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, info_span};

/// Parses oberon files in the order they are given.
///
/// Must be configured using an [OberonCBuilder].
#[derive(Debug)]
pub struct OberonC {
    keep_going: bool,
}

impl OberonC {
    /// Creates the default OberonCBuilder
    #[inline]
    pub fn builder() -> OberonCBuilder {
        OberonCBuilder::new()
    }

    /// Compile a single file
    #[inline]
    pub fn compile(&self, path: &Path) -> Result<CompileReport, DriverError> {
        self.compile_all([path])
    }

    /// Compiles every file in order, collecting the functions of every unit that parsed.
    ///
    /// A unit that fails to parse contributes a diagnostic instead of functions. Unless
    /// `keep_going` is set, no file after the first failure is read. A file that can't be read
    /// ends the batch, even with `keep_going`, and is kept as the report's [io
    /// error](CompileReport::io_error) alongside the diagnostics collected before it.
    pub fn compile_all<I>(&self, paths: I) -> Result<CompileReport, DriverError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut report = CompileReport::default();
        for path in paths {
            let path = path.as_ref();
            let _enter = info_span!("unit", path = %path.display()).entered();
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(source) => {
                    debug!("could not read unit: {source}");
                    report.set_io_error(DriverError::Io {
                        path: path.to_path_buf(),
                        source,
                    });
                    break;
                }
            };
            let file = path.display().to_string();
            let result = parse_unit(&file, &text);
            report.add_source(file, text);
            match result {
                Ok(functions) => {
                    debug!("found {} functions", functions.len());
                    report.add_functions(functions);
                }
                Err(error) => {
                    debug!("compile failed: {error}");
                    report.add_failure(error);
                    if !self.keep_going {
                        break;
                    }
                }
            }
        }
        info!(
            "compiled {} functions with {} failures",
            report.functions().len(),
            report.failures().len()
        );
        Ok(report)
    }
}

/// Builder for creating an [OberonC] instance.
#[derive(Debug, Default)]
pub struct OberonCBuilder {
    keep_going: bool,
}

impl OberonCBuilder {
    /// Creates an OberonCBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue with later files after a unit fails to parse
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Builds an [OberonC] instance from this builder
    pub fn build(self) -> OberonC {
        OberonC {
            keep_going: self.keep_going,
        }
    }
}

/// Failures that belong to the driver rather than to a unit
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}
