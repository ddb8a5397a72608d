//! Errors for the file boundary of a normalization run.
//!
//! Per-field parse failures never surface here; see [`crate::walmart::parser`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("failed to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input JSON in {} (expected an array of objects): {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode normalized output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
