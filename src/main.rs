//! # AS Name Map
//!
//! Scrapes the Autonomous Systems table from the Anapaya ISD-AS assignments
//! page and writes it out as a JavaScript object literal (`.as_name_map.js`)
//! for inclusion in the extension's source.
//!
//! ## Usage
//!
//! ```sh
//! as_name_map
//! as_name_map -o src/as_name_map.js --timeout-secs 30
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetching**: Download the documentation page ([`fetch`])
//! 2. **Extraction**: Locate the heading and table, read the rows ([`extract`])
//! 3. **Output**: Render the sorted snippet and write it ([`outputs::js`])
//!
//! Any failure ends the run with exit status 1. The output file is only
//! touched once a non-empty map has been built.

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod error;
mod extract;
mod fetch;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use error::{AppError, Result};
use extract::extract_as_map;
use fetch::fetch_page;
use outputs::js::{render_snippet, write_snippet};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();

    match run(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "as_name_map failed");
            ExitCode::FAILURE
        }
    }
}

/// Fetch, extract, render and write. Returns the number of entries written.
#[instrument(level = "info", skip_all, fields(output = %args.output))]
async fn run(args: &Cli) -> Result<usize> {
    let start_time = Instant::now();

    let url = args.validated_url()?;
    let extract_config = args.extract_config()?;

    info!(%url, "Downloading webpage");
    let html = fetch_page(url.as_str(), &args.fetch_options()).await?;

    info!("Parsing AS data");
    let as_map = extract_as_map(&html, &extract_config)?;
    if as_map.is_empty() {
        return Err(AppError::EmptyResult);
    }
    info!(count = as_map.len(), "Found AS entries");

    let snippet = render_snippet(&as_map, &args.identifier);
    write_snippet(&args.output, &snippet).await?;
    info!(path = %args.output, "JavaScript snippet written");

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");
    Ok(as_map.len())
}
