// Sentiment scorer trait: the swap-ready abstraction.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Polarity breakdown for one document sample.
///
/// `positive`, `negative`, and `neutral` are proportions (0.0 to 1.0);
/// `compound` is the normalized overall polarity in [-1.0, 1.0].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// Trait for scoring the overall polarity of a text.
pub trait SentimentScorer {
    /// Short method name recorded in the report metadata.
    fn name(&self) -> &str;

    /// Score a text sample. Callers are responsible for truncation.
    fn score(&self, text: &str) -> Result<SentimentScore>;
}

/// Scorer that returns the same score for every text.
///
/// Used in tests and when sentiment is not wanted; reports a neutral
/// score by default.
pub struct FixedScorer(pub SentimentScore);

impl Default for FixedScorer {
    fn default() -> Self {
        Self(SentimentScore {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        })
    }
}

impl SentimentScorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score(&self, _text: &str) -> Result<SentimentScore> {
        Ok(self.0)
    }
}
