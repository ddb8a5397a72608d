//! Normalize command implementation.

use crate::config::Config;
use crate::error::NormalizeError;
use crate::walmart::{NormalizeStats, NormalizedProduct, Record};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads a scraped export, normalizes it, and writes the result.
pub struct NormalizeCommand {
    config: Config,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct NormalizeSummary {
    /// Number of products written
    pub count: usize,
    /// Where they were written
    pub output: PathBuf,
    /// Parse diagnostics for the batch
    pub stats: NormalizeStats,
}

impl fmt::Display for NormalizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normalized {} items -> {}", self.count, self.output.display())
    }
}

impl NormalizeCommand {
    /// Creates a new normalize command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the whole pipeline. Nothing is written unless every record was read.
    pub fn execute(&self) -> Result<NormalizeSummary> {
        let input = &self.config.input;
        let output = &self.config.output;

        info!("Reading records from {}", input.display());
        let records = load_records(input)?;

        let normalizer = self.config.normalizer();
        let products = normalizer.normalize_data(&records);

        let stats = NormalizeStats::collect(&products, normalizer.fields());
        debug!(
            "Normalized {} records ({} incomplete, {} variants, {} unparsed fields: {:?})",
            stats.records,
            stats.incomplete,
            stats.variants,
            stats.unparsed_total(),
            stats.unparsed
        );

        save_products(output, &products)
            .with_context(|| format!("Failed to save {} products", products.len()))?;
        info!("Wrote {} products to {}", products.len(), output.display());

        Ok(NormalizeSummary { count: products.len(), output: output.clone(), stats })
    }
}

/// Reads a JSON array of flat objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>, NormalizeError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| NormalizeError::ReadInput { path: path.to_path_buf(), source })?;

    serde_json::from_str(&content)
        .map_err(|source| NormalizeError::InvalidJson { path: path.to_path_buf(), source })
}

/// Writes products as pretty-printed JSON, replacing any existing file.
pub fn save_products(path: &Path, products: &[NormalizedProduct]) -> Result<(), NormalizeError> {
    let json = serde_json::to_string_pretty(products).map_err(NormalizeError::Encode)?;

    std::fs::write(path, json)
        .map_err(|source| NormalizeError::WriteOutput { path: path.to_path_buf(), source })
}
