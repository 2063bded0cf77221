//! Client configuration
//!
//! Configuration is a small TOML file:
//!
//! ```toml
//! address = "192.168.1.50"   # device host, required unless given with --address
//! size = 64                   # matrix side length in pixels
//! timeout_ms = 5000           # per-request timeout
//! brightness = 80             # optional, applied before every command
//! ```
//!
//! Command-line flags override file values.

pub mod loader;

use core::fmt;
use std::io;
use std::time::Duration;

use log::warn;
use pixoo_display::MAX_SIZE;
use pixoo_protocol::command::MAX_BRIGHTNESS;
use serde::Deserialize;

pub use loader::load_config;

/// Matrix sizes Pixoo devices ship with
pub const STANDARD_SIZES: [usize; 3] = [16, 32, 64];

/// Default matrix size (Pixoo 64)
pub const DEFAULT_SIZE: usize = 64;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(io::Error),
    /// TOML parsing failed
    Parse(toml::de::Error),
    /// Display size of zero or above [`MAX_SIZE`]
    InvalidSize(usize),
    /// Brightness above the device maximum
    InvalidBrightness(u8),
    /// No device address in the file or on the command line
    MissingAddress,
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read config: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::InvalidSize(size) => {
                write!(f, "display size {size} is not between 1 and {MAX_SIZE}")
            }
            Self::InvalidBrightness(level) => {
                write!(f, "brightness {level} exceeds maximum of {MAX_BRIGHTNESS}")
            }
            Self::MissingAddress => {
                write!(f, "no device address; set `address` in the config or pass --address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Configuration as read from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Device host (and optional port)
    #[serde(default)]
    pub address: Option<String>,
    /// Matrix side length in pixels
    #[serde(default = "default_size")]
    pub size: usize,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Brightness to set before running a command
    #[serde(default)]
    pub brightness: Option<u8>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: None,
            size: DEFAULT_SIZE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            brightness: None,
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Device host
    pub address: String,
    /// Matrix side length in pixels
    pub size: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Brightness to set before running a command
    pub brightness: Option<u8>,
}

impl ClientConfig {
    /// Apply command-line overrides and validate
    pub fn resolve(
        self,
        address: Option<String>,
        size: Option<usize>,
    ) -> Result<Settings, ConfigError> {
        let address = address
            .or(self.address)
            .filter(|a| !a.trim().is_empty())
            .ok_or(ConfigError::MissingAddress)?;
        let size = size.unwrap_or(self.size);

        if size == 0 || size > MAX_SIZE {
            return Err(ConfigError::InvalidSize(size));
        }
        if !STANDARD_SIZES.contains(&size) {
            warn!("Display size {} is not a standard Pixoo size", size);
        }
        if let Some(level) = self.brightness {
            if level > MAX_BRIGHTNESS {
                return Err(ConfigError::InvalidBrightness(level));
            }
        }

        Ok(Settings {
            address,
            size,
            timeout: Duration::from_millis(self.timeout_ms),
            brightness: self.brightness,
        })
    }
}

/// Parse TOML configuration
pub fn parse_config(input: &str) -> Result<ClientConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}
