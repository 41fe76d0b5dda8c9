use thiserror::Error;

/// Failures raised by the ranking core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// Two vectors that must be compared have different (or zero) lengths.
    #[error("vector dimensions don't match: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, RankingError>;
