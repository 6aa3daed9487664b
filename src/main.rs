//! Lox Scanner CLI
//!
//! Command-line interface for the Lox scanner. `lox tokenize <file>` prints
//! one line per token on stdout and one line per lexical error on stderr,
//! then exits with 0 for a clean scan or 65 if any lexical error occurred.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_scanner::error::{CliError, CliResult};
use lox_scanner::report::{write_output_styled, ErrorStyle};
use lox_scanner::{tokenize, ExitStatus, VERSION};

/// Exit code for usage and I/O failures
const EXIT_FAILURE: i32 = 1;

/// Lox - lexical scanner for the Lox scripting language
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version = VERSION)]
#[command(about = "Lexical scanner for the Lox scripting language", long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "LOX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a source file and print its tokens
    Tokenize(TokenizeArgs),
}

#[derive(Args, Debug)]
struct TokenizeArgs {
    /// Source file to scan
    filename: PathBuf,

    /// Render lexical errors with surrounding source lines
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_FAILURE);
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{}", e);
        process::exit(EXIT_FAILURE);
    }

    let result = match cli.command {
        Command::Tokenize(args) => run_tokenize(&args),
    };

    match result {
        Ok(status) => process::exit(status.code()),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(EXIT_FAILURE);
        }
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` wins when set; otherwise `debug` with `--verbose`, `warn`
/// without. Logs go to stderr so stdout carries only tokens.
fn init_logging(verbose: bool, no_color: bool) -> CliResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Scan a file and write the token report
fn run_tokenize(args: &TokenizeArgs) -> CliResult<ExitStatus> {
    let source = fs::read_to_string(&args.filename).map_err(|source| CliError::ReadFile {
        path: args.filename.clone(),
        source,
    })?;

    debug!(file = %args.filename.display(), bytes = source.len(), "read source");

    let output = tokenize(&source);

    let style = if args.pretty {
        ErrorStyle::Pretty { source: &source }
    } else {
        ErrorStyle::Plain
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    write_output_styled(&output, style, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(output.exit_status())
}
