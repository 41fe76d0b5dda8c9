use anyhow::{anyhow, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::BertModel;
use std::time::Instant;
use tokenizers::Tokenizer;
use tracing::{debug, error, info};

use super::config::BertModelConfig;
use super::{EmbeddingProvider, TARGET_EMBEDDING};

/// Mean-pooled BERT sentence embeddings.
///
/// Owns its model and tokenizer; construct once and pass it where embeddings are needed.
pub struct BertEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    dimensions: usize,
    max_length: usize,
}

impl BertEmbedder {
    /// Load model weights and tokenizer from the paths in `config`.
    ///
    /// Call [`BertModelConfig::ensure_models_exist`] first if the files may be missing.
    pub fn load(config: &BertModelConfig) -> Result<Self> {
        let start = Instant::now();
        info!(target: TARGET_EMBEDDING, "Loading BERT model from {}", config.model_path.display());

        // Load the safetensors file
        let tensors = match candle_core::safetensors::load_buffer(
            &std::fs::read(&config.model_path)?,
            &config.device,
        ) {
            Ok(t) => t,
            Err(e) => {
                error!(target: TARGET_EMBEDDING, "Failed to load model tensors: {}", e);
                return Err(anyhow!("Failed to load model tensors"));
            }
        };

        // Create VarBuilder from the loaded tensors
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &config.device);
        let model = BertModel::load(vb, &config.bert_config())?;

        info!(target: TARGET_EMBEDDING, "Loading tokenizer from {}", config.tokenizer_path.display());
        let tokenizer = Tokenizer::from_file(&config.tokenizer_path)
            .map_err(|e| anyhow!("Failed to load tokenizer: {}", e))?;

        info!(target: TARGET_EMBEDDING, "BERT embedder ready in {:?}", start.elapsed());

        Ok(Self {
            model,
            tokenizer,
            device: config.device.clone(),
            dimensions: config.dimensions,
            max_length: config.max_length,
        })
    }

    fn forward(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow!("Tokenization failed: {}", e))?;

        let input_ids: Vec<u32> = encoding
            .get_ids()
            .iter()
            .take(self.max_length)
            .copied()
            .collect();
        let attention_mask: Vec<u32> = encoding
            .get_attention_mask()
            .iter()
            .take(self.max_length)
            .copied()
            .collect();
        let token_count = input_ids.len();

        let input_ids = Tensor::new(input_ids, &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(attention_mask, &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        // Last hidden state: [1, tokens, hidden]
        let hidden_state = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // Mean over the token axis, no normalization
        let vector = hidden_state.mean(1)?.squeeze(0)?.to_vec1::<f32>()?;

        debug!(
            target: TARGET_EMBEDDING,
            "Embedded {} chars ({} tokens) into {} dimensions",
            text.len(),
            token_count,
            vector.len()
        );

        Ok(vector)
    }
}

impl EmbeddingProvider for BertEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let start = Instant::now();
        let embedding = self.forward(text)?;

        if embedding.len() != self.dimensions {
            error!(target: TARGET_EMBEDDING, "Unexpected embedding dimensions: got {}, expected {}",
                embedding.len(), self.dimensions);
            return Err(anyhow!(
                "Unexpected embedding dimensions: got {}, expected {}",
                embedding.len(),
                self.dimensions
            ));
        }

        let magnitude: f32 = embedding.iter().map(|x| x.powi(2)).sum::<f32>().sqrt();
        debug!(target: TARGET_EMBEDDING, "Embedding complete in {:?}, magnitude {:.6}", start.elapsed(), magnitude);

        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
