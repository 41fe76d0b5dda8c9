// Embedding model configuration
pub const TARGET_EMBEDDING: &str = "embedding";
pub const MODEL_URL: &str =
    "https://huggingface.co/bert-base-uncased/resolve/main/model.safetensors";
pub const TOKENIZER_URL: &str =
    "https://huggingface.co/bert-base-uncased/resolve/main/tokenizer.json";

use anyhow::Result;

pub mod bert;
pub mod config;

// Re-export main components
pub use bert::*;
pub use config::*;

/// Maps text to a fixed-length dense vector.
///
/// Implementations must be deterministic for identical text and return vectors
/// of the same length (`dimensions`) for every call.
pub trait EmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn dimensions(&self) -> usize;
}
