//! Configuration management with TOML and CLI overrides.

use crate::walmart::fields::{FieldMap, MAX_VARIANTS};
use crate::walmart::Normalizer;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scraped export to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Normalized file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Number of numbered variant slots probed per record
    #[serde(default = "default_max_variants")]
    pub max_variants: usize,

    /// Source keys per output field
    #[serde(default)]
    pub fields: FieldMap,
}

fn default_input() -> PathBuf {
    PathBuf::from("walmart-2025-12-27.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("walmart-2025-12-27.normalized.json")
}

fn default_max_variants() -> usize {
    MAX_VARIANTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            max_variants: default_max_variants(),
            fields: FieldMap::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration from an explicit path, or returns the defaults.
    ///
    /// No file is discovered implicitly: a run without `--config` depends
    /// only on its flags.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match explicit_path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Builds a normalizer from the field table and variant bound.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.fields.clone(), self.max_variants)
    }
}
