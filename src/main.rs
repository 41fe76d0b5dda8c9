use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;

use newsfeed::config::{model_dir, FeedConfig};
use newsfeed::corpus::news_dataset;
use newsfeed::display::print_recommendations;
use newsfeed::embedding::{BertEmbedder, BertModelConfig};
use newsfeed::feed::{NewsFeed, TARGET_FEED};
use newsfeed::interests::read_interests;
use newsfeed::logging;
use newsfeed::spelling::DictionaryCorrector;

/// Personalized news feed ranked by semantic similarity to your interests.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated interests, e.g. "technology, sports" (prompted for when omitted)
    #[arg(short, long)]
    interests: Option<String>,

    /// Number of top recommendations
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Boost added to articles matching one of your categories
    #[arg(short, long)]
    boost: Option<f32>,

    /// Maximum number of articles loaded from the dataset
    #[arg(short, long)]
    max_articles: Option<usize>,

    /// Scores below this are dimmed in the full listing
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Directory holding (or receiving) the BERT model files
    #[arg(long)]
    model_dir: Option<String>,

    /// Print the result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Flags win over `NEWSFEED_*` variables, which win over defaults.
    fn feed_config(&self) -> FeedConfig {
        let env = FeedConfig::from_env();
        FeedConfig {
            max_articles: self.max_articles.unwrap_or(env.max_articles),
            top_n: self.top_n.unwrap_or(env.top_n),
            category_boost: self.boost.unwrap_or(env.category_boost),
            similarity_threshold: self.threshold.unwrap_or(env.similarity_threshold),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::configure_logging();

    let cli = Cli::parse();
    let config = cli.feed_config();
    info!(target: TARGET_FEED, "Starting news feed with {:?}", config);

    let model_config = BertModelConfig::in_dir(cli.model_dir.clone().unwrap_or_else(model_dir));
    model_config.ensure_models_exist().await?;
    let embedder = BertEmbedder::load(&model_config)?;

    let entries = news_dataset(config.max_articles);
    let corrector = DictionaryCorrector::from_corpus(entries);

    if !cli.json {
        println!("Computing article embeddings...");
    }
    let feed = NewsFeed::load(entries, embedder, corrector, config)?;

    let raw_input = match &cli.interests {
        Some(interests) => interests.clone(),
        // Keep stdout for the JSON document when --json is set
        None if cli.json => read_interests(io::stdin().lock(), io::stderr())?,
        None => read_interests(io::stdin().lock(), io::stdout())?,
    };

    let recommendations = feed.recommend(&raw_input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(&recommendations, feed.config().similarity_threshold);
    }

    Ok(())
}
