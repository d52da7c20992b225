// VADER sentiment scorer.
//
// Rule-based lexicon scorer tuned for English prose. The analyzer borrows
// its lexicon from static tables, so one is built per call and dropped with
// the call's scope.

use anyhow::Result;
use tracing::info;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::traits::{SentimentScore, SentimentScorer};

pub struct VaderScorer;

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &str {
        "VADER"
    }

    fn score(&self, text: &str) -> Result<SentimentScore> {
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        let score = SentimentScore {
            positive: get("pos"),
            negative: get("neg"),
            neutral: get("neu"),
            compound: get("compound"),
        };

        info!(compound = score.compound, "Scored sentiment");
        Ok(score)
    }
}
