//! Configuration module for kata
//!
//! This module handles loading, validating, and bootstrapping the TOML
//! configuration file kept under the user's config directory.
//!
//! # Example
//!
//! ```no_run
//! use kata::config::{default_config_path, load_or_init};
//!
//! let config = load_or_init(&default_config_path()).unwrap();
//! println!("Problems live under: {}", config.root_dir().display());
//! ```

mod parser;
mod types;

// Re-export types
pub use types::Config;

// Re-export parser functions
pub use parser::{default_config_path, load_config, load_or_init};
