pub mod config;
pub mod corpus;
pub mod display;
pub mod embedding;
pub mod environment;
pub mod feed;
pub mod interests;
pub mod logging;
pub mod ranking;
pub mod spelling;

pub use config::FeedConfig;
pub use feed::{NewsFeed, Recommendations};
pub use ranking::{
    rank, Article, RankingConfig, RankingError, RankingResult, ScoredArticle, UserQuery,
};
