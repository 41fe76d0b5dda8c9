use anyhow::{anyhow, Result};
use candle_core::Device;
use candle_transformers::models::bert::{Config as BertConfig, HiddenAct, PositionEmbeddingType};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::{MODEL_URL, TARGET_EMBEDDING, TOKENIZER_URL};

/// Configuration struct for the BERT embedding model
pub struct BertModelConfig {
    pub model_dir: PathBuf,
    pub model_path: PathBuf,
    pub tokenizer_path: PathBuf,
    pub dimensions: usize,
    pub max_length: usize,
    pub device: Device,
}

impl Default for BertModelConfig {
    fn default() -> Self {
        Self::in_dir(crate::config::DEFAULT_MODEL_DIR)
    }
}

impl BertModelConfig {
    /// Config for `bert-base-uncased` files stored under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model_dir: dir.to_path_buf(),
            model_path: dir.join("bert-base-uncased.safetensors"),
            tokenizer_path: dir.join("bert-base-uncased-tokenizer.json"),
            dimensions: 768,
            max_length: 512,
            device: Device::Cpu,
        }
    }

    /// Transformer hyperparameters of `bert-base-uncased`.
    pub fn bert_config(&self) -> BertConfig {
        BertConfig {
            hidden_size: self.dimensions,
            intermediate_size: 3072,
            max_position_embeddings: self.max_length,
            num_attention_heads: 12,
            num_hidden_layers: 12,
            vocab_size: 30522,
            layer_norm_eps: 1e-12,
            pad_token_id: 0,
            hidden_act: HiddenAct::Gelu,
            hidden_dropout_prob: 0.1,
            type_vocab_size: 2,
            initializer_range: 0.02,
            position_embedding_type: PositionEmbeddingType::Absolute,
            use_cache: true,
            classifier_dropout: None,
            // Checkpoint tensors are stored under a "bert." prefix
            model_type: Some("bert".to_string()),
        }
    }

    pub async fn ensure_models_exist(&self) -> Result<()> {
        // Create models directory if it doesn't exist
        if !self.model_dir.exists() {
            fs::create_dir_all(&self.model_dir).await?;
        }

        download_if_missing(MODEL_URL, &self.model_path).await?;
        download_if_missing(TOKENIZER_URL, &self.tokenizer_path).await?;

        Ok(())
    }
}

async fn download_if_missing(url: &str, path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    info!(target: TARGET_EMBEDDING, "Downloading {} to {}", url, path.display());
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "Download of {} failed with status {}",
            url,
            response.status()
        ));
    }
    let bytes = response.bytes().await?;
    fs::write(path, bytes).await?;
    info!(target: TARGET_EMBEDDING, "Downloaded {} ({} bytes)", path.display(), path.metadata()?.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_model_dir() {
        let config = BertModelConfig::in_dir("/tmp/newsfeed-models");
        assert_eq!(
            config.model_path,
            PathBuf::from("/tmp/newsfeed-models/bert-base-uncased.safetensors")
        );
        assert_eq!(
            config.tokenizer_path,
            PathBuf::from("/tmp/newsfeed-models/bert-base-uncased-tokenizer.json")
        );
        assert_eq!(config.dimensions, 768);
    }

    #[test]
    fn test_bert_config_matches_dimensions() {
        let config = BertModelConfig::default();
        let bert = config.bert_config();
        assert_eq!(bert.hidden_size, 768);
        assert_eq!(bert.max_position_embeddings, 512);
        assert_eq!(config.model_dir, PathBuf::from("models"));
    }
}
