//! Configuration loading
//!
//! Loads client configuration from a TOML file. Without an explicit path,
//! `pixoo.toml` in the working directory is tried first, then the defaults
//! compiled into the binary.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use super::{parse_config, ClientConfig, ConfigError};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pixoo.toml";

/// Embedded default configuration (compiled into the binary)
const EMBEDDED_CONFIG: &str = include_str!("../../pixoo.toml");

/// Load configuration
///
/// An explicit `path` must exist and parse. Otherwise a missing
/// [`DEFAULT_CONFIG_FILE`] falls back to the embedded defaults.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    if let Some(path) = path {
        info!("Loading configuration from {}", path.display());
        return load_file(path);
    }

    match load_file(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(config) => {
            info!("Loaded configuration from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No {} found, using embedded defaults", DEFAULT_CONFIG_FILE);
            load_embedded()
        }
        Err(e) => {
            warn!("Failed to load {}: {}", DEFAULT_CONFIG_FILE, e);
            Err(e)
        }
    }
}

/// Load configuration from a TOML file
fn load_file(path: &Path) -> Result<ClientConfig, ConfigError> {
    let toml_str = fs::read_to_string(path)?;
    debug!("Read {} bytes of TOML from {}", toml_str.len(), path.display());

    let config = parse_config(&toml_str)?;
    log_config_summary(&config);
    Ok(config)
}

/// Load the embedded default configuration
fn load_embedded() -> Result<ClientConfig, ConfigError> {
    let config = parse_config(EMBEDDED_CONFIG)?;
    log_config_summary(&config);
    Ok(config)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &ClientConfig) {
    debug!("  address: {:?}", config.address);
    debug!("  size: {}x{}", config.size, config.size);
    debug!("  timeout: {} ms", config.timeout_ms);
    if let Some(level) = config.brightness {
        debug!("  brightness: {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pixoo-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = load_embedded().unwrap();
        assert_eq!(config.size, super::super::DEFAULT_SIZE);
    }

    #[test]
    fn test_load_explicit_path() {
        let path = temp_file("explicit.toml", "address = \"10.0.0.5\"\nsize = 16\n");
        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.address.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.size, 16);
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let path = std::env::temp_dir().join("pixoo-does-not-exist.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_load_explicit_path_invalid() {
        let path = temp_file("invalid.toml", "size = -1\n");
        let result = load_config(Some(&path));
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
