use serde::Serialize;

use super::categories::{normalize_category, parse_categories, CategorySet};

/// A news article with its embedding attached.
///
/// The embedding is set once at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub category_label: String, // Original label, e.g. "Technology, Health"
    pub categories: CategorySet,
    #[serde(skip)]
    embedding: Vec<f32>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category_label: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        let category_label = category_label.into();
        Self {
            title: title.into(),
            content: content.into(),
            categories: parse_categories(&category_label),
            category_label,
            embedding,
        }
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }
}

/// The user's corrected interests and their embedding.
#[derive(Debug, Clone, Serialize)]
pub struct UserQuery {
    pub raw_interests: Vec<String>,
    pub categories: CategorySet,
    #[serde(skip)]
    embedding: Vec<f32>,
}

impl UserQuery {
    pub fn new(raw_interests: Vec<String>, embedding: Vec<f32>) -> Self {
        let categories = raw_interests
            .iter()
            .map(|interest| normalize_category(interest))
            .filter(|category| !category.is_empty())
            .collect();
        Self {
            raw_interests,
            categories,
            embedding,
        }
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }
}

/// Ranking knobs consumed by [`super::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankingConfig {
    pub top_n: usize,
    pub category_boost: f32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            category_boost: 0.1,
        }
    }
}

/// An article paired with its scores for one ranking run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle<'a> {
    pub article: &'a Article,
    pub similarity: f32,          // Raw cosine similarity
    pub adjusted_similarity: f32, // Similarity plus category boost
}

/// Output of a ranking run.
///
/// `top` is always a prefix of `all`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult<'a> {
    pub all: Vec<ScoredArticle<'a>>,
    pub top: Vec<ScoredArticle<'a>>,
}

impl<'a> RankingResult<'a> {
    pub fn empty() -> Self {
        Self {
            all: Vec::new(),
            top: Vec::new(),
        }
    }
}
