//! Error types for the scrape pipeline.
//!
//! Every failure this tool can hit is fatal. The variants exist so the
//! diagnostic printed on exit names what went wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("error downloading webpage: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid table selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("could not find '{phrase}' section")]
    SectionNotFound { phrase: String },

    #[error("could not find AS table matching {selector:?}")]
    TableNotFound { selector: String },

    #[error("no AS data found")]
    EmptyResult,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
