//! Centralized model configuration for the encoder and decoder models.
//!
//! Defaults live here as named constants; callers apply overrides (typically
//! from command-line arguments) at a higher layer instead of mutating ambient
//! globals. [`ModelConfig`] is the explicit, immutable record that gets passed
//! by reference to whatever component needs model identifiers.

use serde::{Deserialize, Serialize};

/// Default encoder model (sentence-transformer used for code embeddings).
pub const DEFAULT_ENCODER: &str = "Qwen/Qwen3-Embedding-0.6B";

/// Default Matryoshka embedding dimension.
///
/// `None` keeps the encoder's full native dimension. Smaller dimensions mean
/// faster training and inference at slightly lower quality.
pub const DEFAULT_MATRYOSHKA_DIM: Option<usize> = Some(128);

/// Default decoder model (LLM used for code generation).
pub const DEFAULT_DECODER: &str = "Qwen/Qwen3-4B-Instruct-2507";

/// Model identifiers and embedding settings for one process.
///
/// Constructed once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelConfig {
    /// Encoder model identifier.
    pub encoder: String,

    /// Embedding truncation dimension; `None` uses the native dimension.
    pub matryoshka_dim: Option<usize>,

    /// Decoder model identifier.
    pub decoder: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            encoder: DEFAULT_ENCODER.to_string(),
            matryoshka_dim: DEFAULT_MATRYOSHKA_DIM,
            decoder: DEFAULT_DECODER.to_string(),
        }
    }
}

impl ModelConfig {
    /// Builder: override the encoder model identifier.
    #[must_use]
    pub fn encoder(mut self, encoder: impl Into<String>) -> Self {
        self.encoder = encoder.into();
        self
    }

    /// Builder: override the decoder model identifier.
    #[must_use]
    pub fn decoder(mut self, decoder: impl Into<String>) -> Self {
        self.decoder = decoder.into();
        self
    }

    /// Builder: override the Matryoshka dimension (`None` = native).
    #[must_use]
    pub const fn matryoshka_dim(mut self, dim: Option<usize>) -> Self {
        self.matryoshka_dim = dim;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.encoder.trim().is_empty() {
            return Err("encoder model identifier must not be empty".to_string());
        }

        if self.decoder.trim().is_empty() {
            return Err("decoder model identifier must not be empty".to_string());
        }

        if self.matryoshka_dim == Some(0) {
            return Err("matryoshka_dim must be > 0 (use None for the native dimension)".to_string());
        }

        Ok(())
    }
}
