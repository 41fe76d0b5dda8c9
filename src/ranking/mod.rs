pub mod categories;
pub mod engine;
pub mod error;
pub mod scorer;
pub mod similarity;
pub mod types;

// Re-export main components
pub use categories::*;
pub use engine::*;
pub use error::RankingError;
pub use scorer::*;
pub use similarity::*;
pub use types::*;

// Module-level constants
pub const TARGET_RANKING: &str = "ranking";
