use super::categories::{categories_match, CategorySet};

/// Combine a base similarity with the flat category boost.
///
/// The boost is added once when any category overlaps, regardless of how many
/// do. The result is not clamped and may exceed 1.0.
pub fn adjusted_score(
    similarity: f32,
    article_categories: &CategorySet,
    user_categories: &CategorySet,
    boost_amount: f32,
) -> f32 {
    if categories_match(article_categories, user_categories) {
        similarity + boost_amount
    } else {
        similarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::categories::parse_categories;

    #[test]
    fn test_boost_applied_on_match() {
        let article = parse_categories("Sports");
        let user = parse_categories("sports");
        assert_eq!(adjusted_score(0.5, &article, &user, 0.1), 0.5 + 0.1);
    }

    #[test]
    fn test_no_boost_without_match() {
        let article = parse_categories("Politics");
        let user = parse_categories("sports");
        assert_eq!(adjusted_score(0.55, &article, &user, 0.1), 0.55);
    }

    #[test]
    fn test_boost_applied_once_for_multiple_overlaps() {
        let article = parse_categories("Technology, Business");
        let user = parse_categories("technology, business");
        assert_eq!(adjusted_score(0.3, &article, &user, 0.1), 0.3 + 0.1);
    }

    #[test]
    fn test_score_not_clamped() {
        let article = parse_categories("Health");
        let user = parse_categories("health");
        let score = adjusted_score(1.0, &article, &user, 0.25);
        assert_eq!(score, 1.25);
        assert!(score > 1.0);
    }

    #[test]
    fn test_negative_similarity_boosted() {
        let article = parse_categories("Environment");
        let user = parse_categories("environment");
        assert_eq!(adjusted_score(-0.4, &article, &user, 0.1), -0.4 + 0.1);
    }
}
