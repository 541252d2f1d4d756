use crate::args::Args;
use clap::Parser;
use eyre::eyre;
use oberon_tokens::Diagnostic;
use oberonc::render::DiagnosticRenderer;
use oberonc::{CompileReport, DriverError, OberonC};
use owo_colors::Stream;
use std::io::{stderr, stdout, Write};
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting oberonc with args: {args:?}");
    debug!("oberonc version: {}", env!("CARGO_PKG_VERSION"));

    let oberonc = OberonC::builder().keep_going(args.keep_going).build();
    let report = oberonc.compile_all(&args.files)?;
    debug!("functions found: {}", report.function_names());

    let renderer = DiagnosticRenderer::new().colored(Stream::Stderr);
    for failure in report.failures() {
        emit(&renderer, &report, failure)?;
    }

    let mut out = stdout().lock();
    write!(out, "{report}")?;

    if args.dump_ast && report.is_success() {
        match report.dump_ast(&mut out, args.locations) {
            Ok(_) => {}
            Err(DriverError::Traversal(error)) => {
                emit(&renderer, &report, &error)?;
                return Err(eyre!("could not print the syntax tree"));
            }
            Err(error) => return Err(error.into()),
        }
    }
    out.flush()?;

    if let Some(error) = report.io_error() {
        return Err(eyre!("{error}").wrap_err(format!(
            "compile stopped with {} diagnostics",
            report.failures().len()
        )));
    }
    if !report.is_success() {
        return Err(eyre!(
            "compile failed with {} diagnostics",
            report.failures().len()
        ));
    }
    Ok(())
}

fn emit(
    renderer: &DiagnosticRenderer,
    report: &CompileReport,
    diagnostic: &dyn Diagnostic,
) -> eyre::Result<()> {
    let source = report.source(diagnostic.location().file());
    write!(stderr().lock(), "{}", renderer.render(diagnostic, source))?;
    Ok(())
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;
    Ok(())
}
