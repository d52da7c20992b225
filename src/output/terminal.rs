// Colored terminal output for analysis results.
//
// main.rs calls into here after the pipeline finishes; nothing in this
// module affects the written report.

use colored::Colorize;

use crate::compare::overlap::ComparisonResult;
use crate::report::{AnalysisReport, DocumentSummary};

/// How many top words to print per document.
const WORDS_SHOWN: usize = 10;

/// Display one document's vocabulary and sentiment summary.
pub fn display_document_summary(summary: &DocumentSummary) {
    println!(
        "\n{}",
        format!("=== {} ===", super::truncate_chars(&summary.title, 60)).bold()
    );
    println!("  {}", summary.author.dimmed());
    println!(
        "  Total tokens: {}  Unique words: {}  Lexical diversity: {:.4}",
        summary.total_words, summary.unique_words, summary.lexical_diversity
    );

    let compound = summary.sentiment.compound;
    let compound_str = format!("{compound:+.3}");
    let colored_compound = if compound >= 0.05 {
        compound_str.green()
    } else if compound <= -0.05 {
        compound_str.red()
    } else {
        compound_str.normal()
    };
    println!(
        "  Sentiment: compound {}  (pos {:.3}, neg {:.3}, neu {:.3})",
        colored_compound,
        summary.sentiment.positive,
        summary.sentiment.negative,
        summary.sentiment.neutral
    );

    if summary.top_words.is_empty() {
        println!("  {}", "No words survived filtering.".yellow());
        return;
    }

    let words: Vec<String> = summary
        .top_words
        .iter()
        .take(WORDS_SHOWN)
        .map(|w| format!("{} ({})", w.word, w.count))
        .collect();
    println!("  Top words: {}", words.join(", ").dimmed());
}

/// Display the vocabulary comparison.
pub fn display_comparison(comparison: &ComparisonResult) {
    println!("\n{}", "=== Vocabulary Comparison ===".bold());
    println!(
        "  Shared words: {}  Unique to {}: {}  Unique to {}: {}",
        comparison.total_shared_words,
        comparison.document_a,
        comparison.unique_to_a,
        comparison.document_b,
        comparison.unique_to_b
    );
    println!(
        "  Overlap: {}",
        format!("{:.2}%", comparison.overlap_percentage).bold()
    );

    if !comparison.top_shared_words.is_empty() {
        let shared: Vec<String> = comparison
            .top_shared_words
            .iter()
            .take(WORDS_SHOWN)
            .map(|s| format!("{} ({})", s.word, s.combined_count))
            .collect();
        println!("  Top shared: {}", shared.join(", ").dimmed());
    }
}

/// Display the full report followed by the list of generated files.
pub fn display_report(report: &AnalysisReport, report_path: &str) {
    for summary in &report.texts {
        display_document_summary(summary);
    }
    display_comparison(&report.comparison);

    println!("\n{}", "Generated files:".bold());
    println!("  - {report_path}");
    for path in report.metadata.wordcloud_images.values() {
        println!("  - {path}");
    }
}
