use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

use crate::config::FeedConfig;
use crate::corpus::{embed_corpus, CorpusEntry};
use crate::embedding::EmbeddingProvider;
use crate::interests::{process_interests, ProcessedInterests};
use crate::ranking::{rank, Article, RankingResult, UserQuery};
use crate::spelling::SpellCorrector;

pub const TARGET_FEED: &str = "feed";

/// Everything produced for one user request.
#[derive(Debug, Serialize)]
pub struct Recommendations<'a> {
    pub interests: ProcessedInterests,
    pub query: UserQuery,
    pub ranking: RankingResult<'a>,
}

/// A personalized news feed over a fixed, pre-embedded corpus.
pub struct NewsFeed<E, S> {
    articles: Vec<Article>,
    embedder: E,
    corrector: S,
    config: FeedConfig,
}

impl<E, S> NewsFeed<E, S>
where
    E: EmbeddingProvider,
    S: SpellCorrector,
{
    /// Embed `entries` once and keep the collaborators for later requests.
    pub fn load(
        entries: &[CorpusEntry],
        embedder: E,
        corrector: S,
        config: FeedConfig,
    ) -> Result<Self> {
        let start = Instant::now();
        let articles = embed_corpus(entries, &embedder)?;
        info!(
            target: TARGET_FEED,
            "Loaded {} articles ({} dimensions) in {:?}",
            articles.len(),
            embedder.dimensions(),
            start.elapsed()
        );

        Ok(Self {
            articles,
            embedder,
            corrector,
            config,
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Correct the user's interests, embed them and rank the corpus.
    pub fn recommend(&self, raw_input: &str) -> Result<Recommendations<'_>> {
        let interests = process_interests(raw_input, &self.corrector)?;
        let query_text = interests.query_text();
        info!(target: TARGET_FEED, "Processed interests: {}", query_text);

        let embedding = self
            .embedder
            .embed(&query_text)
            .context("Failed to embed user interests")?;
        let query = UserQuery::new(interests.interests.clone(), embedding);

        let ranking = rank(&self.articles, &query, &self.config.ranking())?;

        Ok(Recommendations {
            interests,
            query,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::news_dataset;
    use crate::spelling::DictionaryCorrector;

    const VOCABULARY: &[&str] = &["sports", "football", "technology", "health", "market"];

    /// Counts vocabulary words, so texts sharing words point the same way.
    struct KeywordEmbedder;

    impl EmbeddingProvider for KeywordEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            let lowered = text.to_lowercase();
            Ok(VOCABULARY
                .iter()
                .map(|word| lowered.matches(word).count() as f32)
                .collect())
        }

        fn dimensions(&self) -> usize {
            VOCABULARY.len()
        }
    }

    fn feed(config: FeedConfig) -> NewsFeed<KeywordEmbedder, DictionaryCorrector> {
        let entries = news_dataset(config.max_articles);
        NewsFeed::load(
            entries,
            KeywordEmbedder,
            DictionaryCorrector::from_corpus(entries),
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_sports_interest_ranks_sports_first() {
        let feed = feed(FeedConfig::default());
        let recommendations = feed.recommend("sprots").unwrap();

        assert_eq!(recommendations.interests.interests, vec!["sports"]);
        assert_eq!(recommendations.interests.corrections.len(), 1);

        let top: Vec<&str> = recommendations
            .ranking
            .top
            .iter()
            .map(|s| s.article.title.as_str())
            .collect();
        assert_eq!(
            top,
            vec![
                "Sports Teams Compete in Championship",
                "Football Season Kicks Off with Surprises",
                "New AI Technology Improves Healthcare",
            ]
        );
        assert_eq!(recommendations.ranking.all.len(), 15);
    }

    #[test]
    fn test_top_n_and_max_articles_respected() {
        let feed = feed(FeedConfig {
            max_articles: 5,
            top_n: 0,
            ..FeedConfig::default()
        });
        assert_eq!(feed.articles().len(), 5);

        let recommendations = feed.recommend("technology").unwrap();
        assert!(recommendations.ranking.top.is_empty());
        assert_eq!(recommendations.ranking.all.len(), 5);
    }

    #[test]
    fn test_empty_interests_rejected() {
        let feed = feed(FeedConfig::default());
        assert!(feed.recommend(" , ").is_err());
    }
}
