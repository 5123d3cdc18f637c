//! Optional `iconsmith.toml` configuration.
//!
//! Everything has a sensible default; the file only exists to override the
//! archive label, JPEG quality, or the render thread cap. A missing file is
//! not an error — defaults apply. `gen-config` prints the documented stock
//! file via [`stock_config_toml`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "iconsmith.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub encoding: EncodingConfig,
    pub processing: ProcessingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive: ArchiveConfig::default(),
            encoding: EncodingConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Base label for the generated archive file name.
    pub base_label: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_label: "Iconsmith".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodingConfig {
    /// JPEG quality, 1–100.
    pub jpeg_quality: u8,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Render thread cap. 0 means one thread per available core.
    pub threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { threads: 0 }
    }
}

/// Load config from an explicit path, or `iconsmith.toml` if present.
///
/// With no explicit path and no file on disk, returns defaults.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.exists() {
                return Ok(Config::default());
            }
            default.to_path_buf()
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Effective render thread count: capped at available cores, user can
/// constrain down but not up.
pub fn effective_threads(processing: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    if processing.threads == 0 {
        cores
    } else {
        processing.threads.min(cores)
    }
}

/// Stock config with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    "\
# iconsmith configuration. Every setting is optional; delete anything you
# don't want to override.

[archive]
# Base label for the archive file name: \"<base_label> - <suffix>.zip\".
base_label = \"Iconsmith\"

[encoding]
# JPEG quality, 1-100.
jpeg_quality = 90

[processing]
# Render thread cap. 0 = one thread per available core.
threads = 0
"
    .to_string()
}
