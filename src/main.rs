//! cdoc — generate Markdown documentation from commented C source files.
//!
//! A documentation block is a run of lines starting with `//`, directly
//! followed by the function signature or struct definition it documents and
//! terminated by a line starting with `{` or a blank line:
//!
//! ```c
//! // Opens a box and returns the value inside.
//! BOX_VALUE_TYPE
//! box_open(box_t* box)
//! {
//! ```
//!
//! - **file mode** (default): `cdoc box.c -o README.md`
//! - **stdout mode**: `cdoc box.c --target stdout`

mod error;
mod model;
mod parser;
mod render;
mod source;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "cdoc",
    about = "Generate Markdown documentation from commented C source files"
)]
struct Cli {
    /// C source file to scan
    #[arg(default_value = "box.c")]
    source: PathBuf,

    /// Where to send the rendered documentation
    #[arg(short = 't', long, value_enum, default_value_t = OutputTarget::File)]
    target: OutputTarget,

    /// Output file (file target only)
    #[arg(short = 'o', long, default_value = "README.md")]
    output: PathBuf,

    /// Log dropped and malformed blocks in detail
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputTarget {
    File,
    Stdout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default = if verbose { "cdoc=debug" } else { "cdoc=warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load, parse and render `cli.source`, then emit the result.
///
/// The source is read in full before any output is touched, so a missing
/// file leaves an existing output file as it was.
fn run(cli: &Cli) -> Result<()> {
    let lines = source::load_lines(&cli.source)?;
    let records = parser::parse_source(&lines);
    let output = render::render_document(&records);

    match cli.target {
        OutputTarget::Stdout => print!("{}", output),
        OutputTarget::File => write_output(&cli.output, &output)
            .with_context(|| format!("failed to document {}", cli.source.display()))?,
    }
    Ok(())
}

fn write_output(path: &Path, output: &str) -> Result<(), error::DocError> {
    fs::write(path, output).map_err(|source| error::DocError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote documentation");
    Ok(())
}
