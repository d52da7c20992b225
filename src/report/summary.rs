// Per-document summary record.

use serde::{Deserialize, Serialize};

use super::word_counts::WordCounts;
use crate::corpus::Document;
use crate::sentiment::traits::SentimentScore;
use crate::text::tokenize::TokenizedText;

/// Words listed with counts in `top_words`.
pub const TOP_WORDS: usize = 100;

/// Words kept in the flat `bag_of_words` mapping.
pub const BAG_OF_WORDS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopWord {
    pub word: String,
    pub count: u64,
}

/// Everything the report says about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub key: String,
    pub title: String,
    pub author: String,
    /// All tokens before filtering, punctuation included
    pub total_words: usize,
    pub unique_words: usize,
    pub lexical_diversity: f64,
    pub sentiment: SentimentScore,
    pub top_words: Vec<TopWord>,
    pub bag_of_words: WordCounts,
}

impl DocumentSummary {
    pub fn new(doc: &Document, tokens: &TokenizedText, sentiment: SentimentScore) -> Self {
        let table = &tokens.frequencies;
        Self {
            key: doc.key.clone(),
            title: doc.title.clone(),
            author: doc.author.clone(),
            total_words: tokens.total_tokens,
            unique_words: tokens.unique_words(),
            lexical_diversity: tokens.lexical_diversity(),
            sentiment,
            top_words: table
                .most_common(TOP_WORDS)
                .into_iter()
                .map(|(word, count)| TopWord { word, count })
                .collect(),
            bag_of_words: WordCounts(table.most_common(BAG_OF_WORDS)),
        }
    }
}
