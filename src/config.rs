use serde::Serialize;

use crate::environment::{get_env_var_or, get_env_var_string};
use crate::ranking::RankingConfig;

pub const MAX_ARTICLES_ENV: &str = "NEWSFEED_MAX_ARTICLES";
pub const TOP_N_ENV: &str = "NEWSFEED_TOP_N";
pub const CATEGORY_BOOST_ENV: &str = "NEWSFEED_CATEGORY_BOOST";
pub const SIMILARITY_THRESHOLD_ENV: &str = "NEWSFEED_SIMILARITY_THRESHOLD";
pub const MODEL_DIR_ENV: &str = "NEWSFEED_MODEL_DIR";

pub const DEFAULT_MODEL_DIR: &str = "models";

/// Feed-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedConfig {
    pub max_articles: usize,       // Maximum articles loaded from the dataset
    pub top_n: usize,              // Number of top recommendations
    pub category_boost: f32,       // Boost for articles matching user categories
    pub similarity_threshold: f32, // Rows below this are dimmed when displayed
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_articles: 15,
            top_n: 3,
            category_boost: 0.1,
            similarity_threshold: 0.4,
        }
    }
}

impl FeedConfig {
    /// Build a config from `NEWSFEED_*` environment variables, using defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_articles: get_env_var_or(MAX_ARTICLES_ENV, defaults.max_articles),
            top_n: get_env_var_or(TOP_N_ENV, defaults.top_n),
            category_boost: get_env_var_or(CATEGORY_BOOST_ENV, defaults.category_boost),
            similarity_threshold: get_env_var_or(
                SIMILARITY_THRESHOLD_ENV,
                defaults.similarity_threshold,
            ),
        }
    }

    pub fn ranking(&self) -> RankingConfig {
        RankingConfig {
            top_n: self.top_n,
            category_boost: self.category_boost,
        }
    }
}

/// Directory holding the embedding model files.
pub fn model_dir() -> String {
    get_env_var_string(MODEL_DIR_ENV, DEFAULT_MODEL_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.max_articles, 15);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.category_boost, 0.1);
        assert_eq!(config.similarity_threshold, 0.4);
    }

    #[test]
    fn test_ranking_projection() {
        let config = FeedConfig {
            top_n: 5,
            category_boost: 0.2,
            ..FeedConfig::default()
        };
        assert_eq!(
            config.ranking(),
            RankingConfig {
                top_n: 5,
                category_boost: 0.2
            }
        );
    }
}
