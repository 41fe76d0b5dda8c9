use anyhow::{Context, Result};
use tracing::info;

use crate::embedding::EmbeddingProvider;
use crate::ranking::Article;

pub const TARGET_CORPUS: &str = "corpus";

/// A raw dataset record before its embedding is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusEntry {
    pub title: &'static str,
    pub content: &'static str,
    pub category: &'static str, // Comma-separated category label
}

impl CorpusEntry {
    /// Text handed to the embedding provider.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

const NEWS_DATASET: &[CorpusEntry] = &[
    CorpusEntry {
        title: "New AI Technology Improves Healthcare",
        content: "AI systems are revolutionizing healthcare with new tools and innovations.",
        category: "Technology, Health",
    },
    CorpusEntry {
        title: "Sports Teams Compete in Championship",
        content: "Top teams battle it out in an exciting sports season full of surprises.",
        category: "Sports",
    },
    CorpusEntry {
        title: "Climate Change Impacts Coastal Cities",
        content: "Rising sea levels threaten urban areas globally due to climate change.",
        category: "Environment",
    },
    CorpusEntry {
        title: "Breakthrough in Quantum Computing",
        content: "Scientists unveil a new quantum computing method that promises speed.",
        category: "Technology",
    },
    CorpusEntry {
        title: "Football Season Kicks Off with Surprises",
        content: "The football season starts with unexpected wins and dramatic matches.",
        category: "Sports",
    },
    CorpusEntry {
        title: "New Tax Policy Sparks Debate in Congress",
        content: "Lawmakers argue over a new tax policy affecting millions of citizens.",
        category: "Politics",
    },
    CorpusEntry {
        title: "Stock Market Hits Record High",
        content: "Investors cheer as the stock market reaches an all-time high this week.",
        category: "Business",
    },
    CorpusEntry {
        title: "Blockbuster Movie Breaks Box Office Records",
        content: "A new blockbuster film shatters expectations with massive ticket sales.",
        category: "Entertainment",
    },
    CorpusEntry {
        title: "Study Links Diet to Heart Disease Prevention",
        content: "Research shows a balanced diet can reduce heart disease risk significantly.",
        category: "Health",
    },
    CorpusEntry {
        title: "Global Leaders Meet to Discuss Trade Deals",
        content: "World leaders negotiate trade agreements to boost economic growth.",
        category: "Politics, Business",
    },
    CorpusEntry {
        title: "New Streaming Service Launches with Big Stars",
        content: "A streaming platform debuts with exclusive shows featuring top celebrities.",
        category: "Entertainment",
    },
    CorpusEntry {
        title: "Air Pollution Levels Reach Critical Highs",
        content: "Cities report dangerous air quality as pollution levels spike this month.",
        category: "Environment",
    },
    CorpusEntry {
        title: "Tech Giants Face Antitrust Investigations",
        content: "Regulators probe major tech companies for monopolistic practices.",
        category: "Technology, Business",
    },
    CorpusEntry {
        title: "Pop Star Announces World Tour Dates",
        content: "A famous pop star reveals plans for a global concert tour next year.",
        category: "Entertainment",
    },
    CorpusEntry {
        title: "Small Businesses Thrive in New Economy",
        content: "Local entrepreneurs report record profits thanks to recent economic shifts.",
        category: "Business",
    },
];

/// Returns at most `max_articles` entries of the built-in dataset, in corpus order.
pub fn news_dataset(max_articles: usize) -> &'static [CorpusEntry] {
    &NEWS_DATASET[..max_articles.min(NEWS_DATASET.len())]
}

/// Embed every entry and build the article list.
///
/// A single provider failure aborts the whole load.
pub fn embed_corpus<E>(entries: &[CorpusEntry], provider: &E) -> Result<Vec<Article>>
where
    E: EmbeddingProvider + ?Sized,
{
    info!(target: TARGET_CORPUS, "Computing embeddings for {} articles", entries.len());

    entries
        .iter()
        .map(|entry| -> Result<Article> {
            let embedding = provider
                .embed(&entry.combined_text())
                .with_context(|| format!("Failed to embed article '{}'", entry.title))?;
            Ok(Article::new(
                entry.title,
                entry.content,
                entry.category,
                embedding,
            ))
        })
        .collect()
}
