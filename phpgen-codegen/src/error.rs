// Error types for the phpgen codegen pipeline.
//
// Only the ambient layers (config and input loading) can fail. Descriptor
// building and declaration assembly are total.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or reflected input.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `php_version` that is not a dotted list of integers.
    #[error("invalid PHP version: {0:?}")]
    InvalidVersion(String),
}

/// Convenience alias used throughout the crate.
pub type CodegenResult<T> = Result<T, CodegenError>;
