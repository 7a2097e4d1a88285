use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for kata
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory problems are materialized under
    #[serde(default = "default_root")]
    pub root: String,

    /// Optional upper bound on pages fetched per crawl; absent means unbounded
    #[serde(rename = "max-fetches", default)]
    pub max_fetches: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_fetches: None,
        }
    }
}

impl Config {
    /// Returns the problem root with a leading `~` expanded
    pub fn root_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.root).into_owned())
    }
}

fn default_root() -> String {
    "~/.kata".to_string()
}
