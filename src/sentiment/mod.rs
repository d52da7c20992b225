// Sentiment scoring: trait-based abstraction over a polarity scorer.
//
// The SentimentScorer trait defines the interface. VaderScorer implements it
// with the VADER lexicon. Tests and alternative scorers plug in behind the
// same trait without touching the pipeline.

pub mod traits;
pub mod vader;

/// Maximum number of characters handed to a scorer per document.
pub const SAMPLE_CHAR_BUDGET: usize = 1_000_000;

/// The first `max_chars` characters of `text`, cut on a char boundary.
pub fn sample_text(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
