use super::error::{RankingError, Result};

/// Calculate cosine similarity directly between two vectors
///
/// # Arguments
/// * `vec1` - First vector
/// * `vec2` - Second vector
///
/// # Returns
/// * `Ok(similarity)` in `[-1, 1]`, or exactly `0.0` when either vector has zero magnitude
/// * `Err(RankingError::DimensionMismatch)` when the lengths differ or are zero
pub fn cosine_similarity(vec1: &[f32], vec2: &[f32]) -> Result<f32> {
    if vec1.len() != vec2.len() || vec1.is_empty() {
        return Err(RankingError::DimensionMismatch {
            expected: vec1.len(),
            found: vec2.len(),
        });
    }

    // Accumulate in f64: squared sums of finite f32 values neither overflow nor underflow
    let dot_product: f64 = vec1
        .iter()
        .zip(vec2.iter())
        .map(|(&a, &b)| f64::from(a) * f64::from(b))
        .sum();
    let mag1: f64 = vec1.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt();
    let mag2: f64 = vec2.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return Ok(0.0);
    }

    Ok((dot_product / (mag1 * mag2)) as f32)
}
