//! Preview configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default cap on payload size for inline image decoding (20 MB).
const DEFAULT_MAX_DECODE_BYTES: u64 = 20 * 1024 * 1024;

/// Configuration for the preview collaborators.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PreviewConfig {
    /// Largest payload the inline image decoder will attempt, in bytes.
    #[builder(default = "DEFAULT_MAX_DECODE_BYTES")]
    #[serde(default = "default_max_decode_bytes")]
    pub max_decode_bytes: u64,

    /// Directory saved copies are written to (None = current directory).
    #[builder(default)]
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
}

fn default_max_decode_bytes() -> u64 {
    DEFAULT_MAX_DECODE_BYTES
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_decode_bytes: DEFAULT_MAX_DECODE_BYTES,
            save_dir: None,
        }
    }
}

impl PreviewConfig {
    /// Create a new config builder.
    pub fn builder() -> PreviewConfigBuilder {
        PreviewConfigBuilder::default()
    }
}

impl PreviewConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.max_decode_bytes {
            return Err("max_decode_bytes must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = PreviewConfig::builder().build().unwrap();
        assert_eq!(config.max_decode_bytes, DEFAULT_MAX_DECODE_BYTES);
        assert!(config.save_dir.is_none());
    }

    #[test]
    fn test_builder_rejects_zero_limit() {
        let result = PreviewConfig::builder().max_decode_bytes(0u64).build();
        assert!(result.is_err());
    }
}
