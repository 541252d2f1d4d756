//! What a batch compile produced

use crate::DriverError;
use itertools::Itertools as _;
use oberon_ast::function::FunctionDefinition;
use oberon_ast::printer::AstPrinter;
use oberon_ast_parsing::UnitError;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// The functions of every unit that parsed, in processing order, and the diagnostics of every
/// unit that did not.
///
/// Displays as the compile summary:
/// ```text
/// Found: 2 functions during compile
/// > add (w/2 parameters)
/// > main (w/0 parameters)
/// ```
#[derive(Debug, Default)]
pub struct CompileReport {
    functions: Vec<FunctionDefinition>,
    failures: Vec<UnitError>,
    sources: HashMap<String, String>,
    io_error: Option<DriverError>,
}

impl CompileReport {
    pub fn functions(&self) -> &[FunctionDefinition] {
        &self.functions
    }

    pub fn failures(&self) -> &[UnitError] {
        &self.failures
    }

    /// The names of every function found, comma separated
    pub fn function_names(&self) -> String {
        self.functions.iter().map(|f| f.name()).join(", ")
    }

    /// The file that could not be read, ending the batch early
    pub fn io_error(&self) -> Option<&DriverError> {
        self.io_error.as_ref()
    }

    /// No unit failed and every file was read
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.io_error.is_none()
    }

    /// Gets the text of a compiled file, by the name its locations use
    pub fn source(&self, file: &str) -> Option<&str> {
        self.sources.get(file).map(String::as_str)
    }

    /// Writes every function with an [AstPrinter], stopping at the first failure
    pub fn dump_ast<W: Write>(&self, out: W, show_locations: bool) -> Result<W, DriverError> {
        let mut printer = AstPrinter::new(out).show_locations(show_locations);
        oberon_ast::traverse(&mut printer, &self.functions)?;
        Ok(printer.into_inner())
    }

    pub(crate) fn add_source(&mut self, file: String, text: String) {
        self.sources.insert(file, text);
    }

    pub(crate) fn add_functions(&mut self, functions: Vec<FunctionDefinition>) {
        self.functions.extend(functions);
    }

    pub(crate) fn add_failure(&mut self, error: UnitError) {
        self.failures.push(error);
    }

    pub(crate) fn set_io_error(&mut self, error: DriverError) {
        self.io_error = Some(error);
    }
}

impl Display for CompileReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Found: {} functions during compile", self.functions.len())?;
        for function in &self.functions {
            writeln!(
                f,
                "> {} (w/{} parameters)",
                function.name(),
                function.parameters().len()
            )?;
        }
        Ok(())
    }
}
