use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

/// Normalized, ordered set of category names.
pub type CategorySet = BTreeSet<String>;

/// Apply category normalization: Unicode normalization, lowercase, whitespace
pub fn normalize_category(raw: &str) -> String {
    raw.nfkd()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a comma-separated label such as `"Technology, Health"` into a normalized set.
///
/// Empty fragments are dropped, so `"Sports,,"` yields `{"sports"}`.
pub fn parse_categories(label: &str) -> CategorySet {
    label
        .split(',')
        .map(normalize_category)
        .filter(|category| !category.is_empty())
        .collect()
}

/// Returns true when the two normalized sets share at least one category.
///
/// Both sides must already be normalized with [`normalize_category`]; a single
/// shared category is enough and extra overlaps earn nothing more.
pub fn categories_match(article_categories: &CategorySet, user_categories: &CategorySet) -> bool {
    let (smaller, larger) = if article_categories.len() <= user_categories.len() {
        (article_categories, user_categories)
    } else {
        (user_categories, article_categories)
    };
    smaller.iter().any(|category| larger.contains(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> CategorySet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Sports"), "sports");
        assert_eq!(normalize_category("  TECHNOLOGY "), "technology");
        assert_eq!(normalize_category("Climate   Change"), "climate change");
        assert_eq!(normalize_category("   "), "");
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            parse_categories("Technology, Health"),
            set(&["health", "technology"])
        );
        assert_eq!(parse_categories("Sports,, "), set(&["sports"]));
        assert!(parse_categories("").is_empty());
    }

    #[test]
    fn test_match_on_single_shared_category() {
        let article = parse_categories("Politics, Business");
        assert!(categories_match(&article, &set(&["business"])));
        assert!(categories_match(&article, &set(&["sports", "politics"])));
    }

    #[test]
    fn test_case_and_whitespace_insensitive_after_normalization() {
        let article = parse_categories(" SPORTS ");
        let user: CategorySet = ["Sports"].iter().map(|s| normalize_category(s)).collect();
        assert!(categories_match(&article, &user));
    }

    #[test]
    fn test_no_match() {
        let article = parse_categories("Entertainment");
        assert!(!categories_match(&article, &set(&["sports", "health"])));
        assert!(!categories_match(&article, &CategorySet::new()));
        assert!(!categories_match(&CategorySet::new(), &set(&["sports"])));
    }
}
