//! Kata: a competitive programming workbench
//!
//! This crate fetches problems and their sample cases from supported contest
//! sites, materializes them as a local directory tree, and judges solutions
//! by running a user command against the saved samples.

pub mod config;
pub mod crawler;
pub mod judge;
pub mod problem;
pub mod site;

use thiserror::Error;

/// Main error type for kata operations
#[derive(Debug, Error)]
pub enum KataError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Unsupported site: {host}")]
    UnsupportedSite { host: String },

    #[error("Fetch failed for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{what} not found in {url}")]
    NotFound { what: &'static str, url: String },

    #[error("No sample cases found in {url}")]
    NoSamples { url: String },

    #[error("No problem links found in {url}")]
    NoUrls { url: String },

    #[error("Execution failed for '{command}': {message}")]
    Execution { command: String, message: String },

    #[error("Directory walk failed under {path}: {source}")]
    Walk {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for kata operations
pub type Result<T> = std::result::Result<T, KataError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlStats, Crawler, DocumentFetcher};
pub use judge::{TestFile, TestResult, Verdict};
pub use problem::{Materializer, Problem, ProblemSink, SampleCase};
pub use site::{PageKind, SiteAdapter, SiteKind, SiteRegistry};
