use std::cmp::Ordering;
use tracing::{debug, error, info};

use super::error::Result;
use super::scorer::adjusted_score;
use super::similarity::cosine_similarity;
use super::types::{Article, RankingConfig, RankingResult, ScoredArticle, UserQuery};
use super::TARGET_RANKING;

/// Rank every article against the user's query.
///
/// Scores each article by cosine similarity plus the category boost, then sorts
/// descending by the adjusted score. The sort is stable, so articles with equal
/// scores keep their corpus order. `top` holds the first `min(top_n, len)` entries.
///
/// Any article whose embedding length differs from the query's aborts the whole
/// run with [`super::RankingError::DimensionMismatch`]; no partial result is returned.
pub fn rank<'a>(
    articles: &'a [Article],
    query: &UserQuery,
    config: &RankingConfig,
) -> Result<RankingResult<'a>> {
    if articles.is_empty() {
        info!(target: TARGET_RANKING, "No articles to rank");
        return Ok(RankingResult::empty());
    }

    let mut scored = Vec::with_capacity(articles.len());
    for article in articles {
        let similarity = match cosine_similarity(query.embedding(), article.embedding()) {
            Ok(similarity) => similarity,
            Err(e) => {
                error!(
                    target: TARGET_RANKING,
                    "Aborting ranking, bad embedding for '{}': {}", article.title, e
                );
                return Err(e);
            }
        };

        let adjusted_similarity = adjusted_score(
            similarity,
            &article.categories,
            &query.categories,
            config.category_boost,
        );

        debug!(
            target: TARGET_RANKING,
            "Scored '{}': similarity={:.4}, adjusted={:.4}",
            article.title, similarity, adjusted_similarity
        );

        scored.push(ScoredArticle {
            article,
            similarity,
            adjusted_similarity,
        });
    }

    // Vec::sort_by is stable, ties keep corpus order
    scored.sort_by(|a, b| descending_nan_last(a.adjusted_similarity, b.adjusted_similarity));

    let top: Vec<ScoredArticle<'a>> = scored.iter().take(config.top_n).cloned().collect();

    info!(
        target: TARGET_RANKING,
        "Ranked {} articles against {} user categories, returning top {}",
        scored.len(),
        query.categories.len(),
        top.len()
    );

    Ok(RankingResult { all: scored, top })
}

/// Higher scores first; NaN (only reachable from non-finite embeddings) sorts after every number.
fn descending_nan_last(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
