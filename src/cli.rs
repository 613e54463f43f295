//! Command-line interface definitions for AS Name Map.
//!
//! Every option defaults to the values used against the Anapaya ISD-AS
//! assignments page, so running the binary with no arguments regenerates
//! `.as_name_map.js` in the current directory.

use crate::error::{AppError, Result};
use crate::extract::{ExtractConfig, TableMatcher};
use crate::fetch::FetchOptions;
use clap::Parser;
use std::time::Duration;
use url::Url;

pub const DEFAULT_URL: &str = "https://docs.anapaya.net/en/latest/resources/isd-as-assignments/";
pub const DEFAULT_OUTPUT: &str = ".as_name_map.js";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_HEADING: &str = "Autonomous Systems";
pub const DEFAULT_TABLE_SELECTOR: &str = "table.docutils.align-default";
pub const DEFAULT_IDENTIFIER: &str = "asNameMap";

/// Command-line arguments for the AS Name Map generator.
///
/// # Examples
///
/// ```sh
/// # Regenerate .as_name_map.js from the live documentation
/// as_name_map
///
/// # Point at a mirror and tolerate a restyled table
/// as_name_map --url https://mirror.example/isd-as/ --table-selector "table.docutils"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Documentation page holding the AS assignment table
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,

    /// File the JavaScript snippet is written to (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Phrase the <h2> section heading must contain
    #[arg(long, default_value = DEFAULT_HEADING)]
    pub heading: String,

    /// CSS selector the data table following the heading must match
    #[arg(long, default_value = DEFAULT_TABLE_SELECTOR)]
    pub table_selector: String,

    /// JavaScript identifier the object literal is assigned to
    #[arg(long, default_value = DEFAULT_IDENTIFIER)]
    pub identifier: String,

    /// Request timeout in seconds (HTTP client default when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Validate `--url` before anything goes over the wire.
    pub fn validated_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| AppError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Compile the heading phrase and table selector into an [`ExtractConfig`].
    pub fn extract_config(&self) -> Result<ExtractConfig> {
        Ok(ExtractConfig {
            heading_phrase: self.heading.clone(),
            table: TableMatcher::parse(&self.table_selector)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["as_name_map"]);

        assert_eq!(cli.url, DEFAULT_URL);
        assert_eq!(cli.output, ".as_name_map.js");
        assert_eq!(cli.heading, "Autonomous Systems");
        assert_eq!(cli.identifier, "asNameMap");
        assert!(cli.user_agent.starts_with("Mozilla/5.0"));
        assert!(cli.timeout_secs.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["as_name_map", "-u", "http://localhost:8080/", "-o", "/tmp/map.js"]);

        assert_eq!(cli.url, "http://localhost:8080/");
        assert_eq!(cli.output, "/tmp/map.js");
    }

    #[test]
    fn test_cli_table_selector_override() {
        let cli = Cli::parse_from(["as_name_map", "--table-selector", "table.grid", "--timeout-secs", "5"]);

        assert_eq!(cli.table_selector, "table.grid");
        assert_eq!(cli.fetch_options().timeout, Some(Duration::from_secs(5)));
        assert!(cli.extract_config().is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let cli = Cli::parse_from(["as_name_map", "--url", "not a url"]);
        assert!(matches!(cli.validated_url(), Err(AppError::InvalidUrl { .. })));
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let cli = Cli::parse_from(["as_name_map", "--table-selector", "table[[["]);
        assert!(matches!(cli.extract_config(), Err(AppError::InvalidSelector { .. })));
    }
}
