// Set-based vocabulary overlap.
//
// Compares two frequency tables by their key sets:
//
//   shared   = A ∩ B
//   overlap  = |A ∩ B| / |A ∪ B| * 100
//
// Shared words are ranked by their combined count across both texts. All
// iteration follows the tables' first-seen order, so results are stable for
// a given pair of inputs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::text::frequency::FrequencyTable;

/// How many shared words to keep, ranked by combined count.
pub const TOP_SHARED: usize = 50;

/// How many unique words to list per side.
pub const UNIQUE_SAMPLE: usize = 30;

/// A word present in both texts with its summed count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedWord {
    pub word: String,
    pub combined_count: u64,
}

/// Vocabulary overlap between document A and document B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Key of the first document
    pub document_a: String,
    /// Key of the second document
    pub document_b: String,
    pub total_shared_words: usize,
    pub unique_to_a: usize,
    pub unique_to_b: usize,
    /// Shared words as a percentage of the combined vocabulary (0 to 100)
    pub overlap_percentage: f64,
    pub top_shared_words: Vec<SharedWord>,
    pub top_unique_a: Vec<String>,
    pub top_unique_b: Vec<String>,
}

/// Words present in both tables, in A's first-seen order.
pub fn shared_words<'a>(a: &'a FrequencyTable, b: &FrequencyTable) -> Vec<&'a str> {
    a.words().filter(|w| b.contains(w)).collect()
}

/// Number of distinct words across both tables.
pub fn union_size(a: &FrequencyTable, b: &FrequencyTable) -> usize {
    a.len() + b.words().filter(|w| !a.contains(w)).count()
}

/// Shared vocabulary as a percentage of the union; 0 when both are empty.
pub fn overlap_percentage(a: &FrequencyTable, b: &FrequencyTable) -> f64 {
    let union = union_size(a, b);
    if union == 0 {
        return 0.0;
    }
    shared_words(a, b).len() as f64 / union as f64 * 100.0
}

/// Shared words ranked by combined count, ties in A's first-seen order.
pub fn rank_shared(a: &FrequencyTable, b: &FrequencyTable) -> Vec<SharedWord> {
    let mut ranked: Vec<SharedWord> = shared_words(a, b)
        .into_iter()
        .map(|w| SharedWord {
            word: w.to_string(),
            combined_count: a.get(w) + b.get(w),
        })
        .collect();
    ranked.sort_by(|x, y| y.combined_count.cmp(&x.combined_count));
    ranked
}

/// Words only in `table`, most frequent first, ties in first-seen order.
fn unique_sample(table: &FrequencyTable, other: &FrequencyTable, n: usize) -> Vec<String> {
    table
        .most_common(table.len())
        .into_iter()
        .filter(|(w, _)| !other.contains(w))
        .take(n)
        .map(|(w, _)| w)
        .collect()
}

/// Compare two documents' vocabularies.
pub fn compare(
    key_a: &str,
    a: &FrequencyTable,
    key_b: &str,
    b: &FrequencyTable,
) -> ComparisonResult {
    let shared = rank_shared(a, b);
    let total_shared = shared.len();

    if union_size(a, b) == 0 {
        warn!("Both vocabularies are empty; overlap defaults to 0");
    }

    let result = ComparisonResult {
        document_a: key_a.to_string(),
        document_b: key_b.to_string(),
        total_shared_words: total_shared,
        unique_to_a: a.len() - total_shared,
        unique_to_b: b.len() - total_shared,
        overlap_percentage: overlap_percentage(a, b),
        top_shared_words: shared.into_iter().take(TOP_SHARED).collect(),
        top_unique_a: unique_sample(a, b, UNIQUE_SAMPLE),
        top_unique_b: unique_sample(b, a, UNIQUE_SAMPLE),
    };

    info!(
        shared = result.total_shared_words,
        unique_a = result.unique_to_a,
        unique_b = result.unique_to_b,
        overlap = result.overlap_percentage,
        "Compared vocabularies"
    );

    result
}
