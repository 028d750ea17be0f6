//! Configuration types for creditnorm.
//!
//! [`Config::load`] layers `~/.config/creditnorm/config.toml` (when present)
//! over the built-in defaults. [`Config::load_from`] does the same with an
//! explicit, required file. [`Config::defaults`] returns the defaults without
//! touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::NormalizeError;
use crate::types::Vendor;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[vendors]
enabled = ["creditscore360", "bizcreditplus", "enterprisecreditdata"]

[output]
pretty = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/creditnorm/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vendors: VendorsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[vendors]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorsConfig {
    /// Vendor identifiers a normaliser will accept. Narrowing this list turns
    /// the removed vendors into configuration errors at construction.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

fn default_enabled() -> Vec<String> {
    Vendor::ALL.iter().map(|v| v.id().to_string()).collect()
}

impl Default for VendorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/creditnorm/config.toml`, layered on top of the
    /// built-in defaults. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::build(&config_path(), false)
    }

    /// Load from `path`, layered on top of the built-in defaults. The file
    /// must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::build(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Resolve `vendors.enabled` to vendors. Unknown names are configuration
    /// errors rather than being silently dropped.
    pub fn allowed_vendors(&self) -> Result<Vec<Vendor>, NormalizeError> {
        self.vendors
            .enabled
            .iter()
            .map(|id| id.parse::<Vendor>())
            .collect()
    }

    fn build(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("creditnorm")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
