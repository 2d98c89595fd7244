//! Static page renderer for the portfolio widget.
//!
//! # Responsibility
//! - Run the widget against an in-memory document from the command line.
//! - Print the resulting markup so a page can be pre-rendered or inspected.

mod render;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Render portfolio cards from a projects JSON document.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Projects document (`{"projects": [...]}`); defaults to the configured data_url.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Widget config JSON overriding element ids and labels.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Replace the full list with search results for this query.
    #[arg(long)]
    pub search: Option<String>,

    /// Apply a category filter after rendering (`all` shows everything).
    #[arg(long)]
    pub category: Option<String>,

    /// Log level (trace|debug|info|warn|error); requires `--log-dir`.
    #[arg(long, requires = "log_dir")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off without it.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match render::run(&cli) {
        Ok(html) => {
            print!("{html}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}
