//! the args for running oberonc

use clap::{value_parser, ArgAction};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Parses oberon source files and reports the functions found")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Specify which source files to compile, in order
    #[clap(required = true, value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
    /// Print the syntax tree of every function found
    #[clap(long, env = "OBERONC_DUMP_AST")]
    pub dump_ast: bool,
    /// Show the location of every node when printing the syntax tree
    #[clap(long, requires = "dump_ast")]
    pub locations: bool,
    /// Keep parsing later files after one fails
    #[clap(long, env = "OBERONC_KEEP_GOING")]
    pub keep_going: bool,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

/// Sets the logging level with `-v[v]` or `-q[q]`
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose.min(2) as i8 - self.quiet.min(2) as i8;
        match sum {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_args_parsing() {
        let test = "oberonc a.ob b.ob --keep-going";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert_eq!(args.files, [Path::new("a.ob"), Path::new("b.ob")]);
        assert!(args.keep_going);
        assert!(!args.dump_ast);
        assert_eq!(args.logging().log_level_filter(), LevelFilter::WARN);
    }

    #[test]
    fn test_files_required() {
        assert!(Args::try_parse_from(["oberonc", "--dump-ast"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = Args::try_parse_from(["oberonc", "-vv", "a.ob"]).unwrap();
        assert_eq!(args.logging().log_level_filter(), LevelFilter::TRACE);
        let args = Args::try_parse_from(["oberonc", "-q", "a.ob"]).unwrap();
        assert_eq!(args.logging().log_level_filter(), LevelFilter::ERROR);
        assert!(Args::try_parse_from(["oberonc", "-v", "-q", "a.ob"]).is_err());
    }

    #[test]
    fn test_locations_require_dump() {
        assert!(Args::try_parse_from(["oberonc", "--locations", "a.ob"]).is_err());
        let args = Args::try_parse_from(["oberonc", "--dump-ast", "--locations", "a.ob"]).unwrap();
        assert!(args.locations);
    }
}
