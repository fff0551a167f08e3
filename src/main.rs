//! setanta-highlight - command-line front end
//!
//! ```bash
//! # Colour a file for the terminal
//! setanta-highlight clár.set
//!
//! # Dump the token stream of stdin
//! echo 'scríobh(x)' | setanta-highlight --format tokens
//!
//! # Produce an HTML fragment with editor style classes
//! setanta-highlight clár.set --format html > clár.html
//! ```

use std::fs;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use setanta_highlight::render::{render_ansi, render_html, render_token_table};
use setanta_highlight::{Config, Result, Tokenizer};
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "setanta-highlight",
    version = env!("CARGO_PKG_VERSION"),
    about = "Syntax highlighter for the Setanta programming language"
)]
struct Cli {
    /// Source file to highlight (stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "ansi")]
    format: Format,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Terminal colours
    Ansi,
    /// HTML with editor style classes
    Html,
    /// One token per line with position and class
    Tokens,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let tokenizer = Tokenizer::setanta()?;
    let source = read_source(cli.file.as_deref())?;
    debug!(bytes = source.len(), format = ?cli.format, "highlighting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let tokens = tokenizer.tokenize(&source);
    match cli.format {
        Format::Ansi => render_ansi(&mut out, tokens, config.theme()),
        Format::Html => render_html(&mut out, tokens),
        Format::Tokens => render_token_table(&mut out, &source, tokens),
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool, log_level: Option<LogLevel>) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}
