//! CLI entry point for walk

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use tracing::info;
use walk::{ErrorPolicy, MatchMode, MatchSink, PathPrinter, TreeWalker, WalkConfig, report_error};

/// Color output mode for error messages
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to color stderr based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "walk")]
#[command(
    about = "Recursively descend the directory tree for the specified directory \
             and print files that match the specified substring patterns"
)]
#[command(override_usage = "walk [OPTIONS] <directory> [PATTERN]...")]
#[command(version)]
struct Args {
    /// Directory to walk, then substring patterns matched against file names
    /// (no patterns: print every file). Flags end at the directory, so
    /// everything after it is a pattern, even when it starts with `-`.
    #[arg(value_name = "DIRECTORY [PATTERN]", num_args = 1.., trailing_var_arg = true)]
    operands: Vec<OsString>,

    /// Treat patterns as file extensions (match the end of the name)
    #[arg(short = 'x')]
    suffix: bool,

    /// Skip directories with this name (can be used multiple times or comma-separated)
    #[arg(short = 's', value_name = "NAME", value_delimiter = ',')]
    skip: Vec<String>,

    /// Stop at the first unreadable entry instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Suppress diagnostic output
    #[arg(short, long)]
    quiet: bool,

    /// Control color of error messages: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    // At the very least the directory must be given
    let mut operands = args.operands.into_iter();
    let Some(directory) = operands.next().map(PathBuf::from) else {
        eprintln!("{}", Args::command().render_help());
        process::exit(1);
    };

    setup_logging(args.verbose, args.quiet);
    let use_color = should_use_color(args.color);

    let config = WalkConfig::new(directory)
        .with_patterns(operands)
        .with_match_mode(if args.suffix {
            MatchMode::Suffix
        } else {
            MatchMode::Contains
        })
        .with_skip_dirs(args.skip)
        .with_error_policy(if args.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Skip
        });

    let walker = TreeWalker::new(config);
    let mut printer = PathPrinter::stdout();

    match walker.walk(&mut printer) {
        Ok(summary) => {
            if summary.errors > 0 {
                info!(errors = summary.errors, "walk completed with skipped entries");
            }
        }
        // Reader hung up (e.g. `walk . | head`)
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            // Keep whatever was matched before the failure
            let _ = printer.finish();
            let _ = report_error(&e.to_string(), use_color);
            process::exit(1);
        }
    }
}
