use colored::Colorize;
use prettytable::{format, Attr, Cell, Row, Table};

use crate::feed::Recommendations;
use crate::interests::Correction;
use crate::ranking::ScoredArticle;

/// Formats an adjusted score the way every listing shows it.
pub fn format_similarity(score: f32) -> String {
    format!("Similarity: {:.3}", score)
}

/// One line per correction, e.g. `Did you mean 'sports' instead of 'sprots'?`
pub fn correction_notice(correction: &Correction) -> String {
    format!(
        "Did you mean '{}' instead of '{}'? Using corrected version.",
        correction.corrected, correction.original
    )
}

/// Build a table of scored articles.
///
/// When `dim_below` is set, rows scoring under it are rendered dimmed. Dimming is
/// a cell style applied by the terminal, so it never changes column widths.
pub fn article_table(entries: &[ScoredArticle<'_>], dim_below: Option<f32>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(vec![
        Cell::new("Title"),
        Cell::new("Category"),
        Cell::new("Score"),
    ]));

    for entry in entries {
        let dimmed = dim_below.is_some_and(|threshold| entry.adjusted_similarity < threshold);
        let cells = [
            entry.article.title.clone(),
            entry.article.category_label.clone(),
            format_similarity(entry.adjusted_similarity),
        ];
        table.add_row(Row::new(
            cells
                .iter()
                .map(|text| {
                    let cell = Cell::new(text);
                    if dimmed {
                        cell.with_style(Attr::Dim)
                    } else {
                        cell
                    }
                })
                .collect(),
        ));
    }

    table
}

fn print_heading(heading: &str, width: usize) {
    println!("\n{}", heading.bright_blue());
    println!("{}", "-".repeat(width).dimmed());
}

/// Print the corrections, the recommended slice and the full ordering.
pub fn print_recommendations(recommendations: &Recommendations<'_>, similarity_threshold: f32) {
    for correction in &recommendations.interests.corrections {
        println!("{}", correction_notice(correction).bright_yellow());
    }
    println!(
        "{}: {}",
        "Processed interests".bright_blue(),
        recommendations.interests.query_text()
    );

    print_heading("Recommended Articles", 30);
    if recommendations.ranking.top.is_empty() {
        println!("{}", "No recommendations".dimmed());
    } else {
        article_table(&recommendations.ranking.top, None).printstd();
    }

    print_heading("All Articles (Sorted by Relevance)", 60);
    article_table(&recommendations.ranking.all, Some(similarity_threshold)).printstd();
}
