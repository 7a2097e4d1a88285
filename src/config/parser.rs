use crate::config::types::Config;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Template written on first use so the file documents itself
const DEFAULT_CONFIG: &str = r#"# kata configuration

# Directory problems are materialized under.
root = "~/.kata"

# Upper bound on pages fetched by a single `kata fetch`.
# Leave commented out for an unbounded crawl.
# max-fetches = 200
"#;

/// Returns the default configuration file path
///
/// `~/.config/kata/config.toml`, with the `~` expanded against the current
/// user's home directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/.config/kata/config.toml").into_owned())
}

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Loads the configuration, creating the file with defaults when missing
///
/// First use bootstraps the file (and its parent directories) with the
/// commented default template, then loads it like [`load_config`].
///
/// # Example
///
/// ```no_run
/// use kata::config::{default_config_path, load_or_init};
///
/// let config = load_or_init(&default_config_path()).unwrap();
/// println!("root = {}", config.root);
/// ```
pub fn load_or_init(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        tracing::info!("Created default configuration at {}", path.display());
    }
    load_config(path)
}

/// Validates a parsed configuration
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.root.trim().is_empty() {
        return Err(ConfigError::Validation(
            "root must not be empty".to_string(),
        ));
    }

    if config.max_fetches == Some(0) {
        return Err(ConfigError::Validation(
            "max-fetches must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(
            r#"
root = "/tmp/problems"
max-fetches = 50
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.root, "/tmp/problems");
        assert_eq!(config.max_fetches, Some(50));
    }

    #[test]
    fn test_load_config_applies_defaults() {
        let file = create_temp_config("");

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.root, "~/.kata");
        assert_eq!(config.max_fetches, None);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("root = [not toml");

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_root_rejected() {
        let file = create_temp_config(r#"root = "  ""#);

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_max_fetches_rejected() {
        let file = create_temp_config(
            r#"
root = "/tmp/problems"
max-fetches = 0
"#,
        );

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/nonexistent/kata-config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_init_bootstraps_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.root, "~/.kata");
        assert_eq!(config.max_fetches, None);

        // A second load reads the file it just wrote
        let reloaded = load_or_init(&path).unwrap();
        assert_eq!(reloaded.root, config.root);
    }

    #[test]
    fn test_load_or_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, r#"root = "/srv/kata""#).unwrap();

        let config = load_or_init(&path).unwrap();
        assert_eq!(config.root, "/srv/kata");
    }
}
