// Report assembly: per-document summaries plus the comparison, as JSON.

pub mod summary;
pub mod word_counts;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::compare::overlap::ComparisonResult;
pub use summary::DocumentSummary;

pub const ANALYSIS_TYPE: &str = "distant_reading";

/// Static facts about how the run was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub analysis_type: String,
    pub sentiment_method: String,
    pub stopwords_removed: bool,
    /// Document key -> word cloud image path
    pub wordcloud_images: BTreeMap<String, String>,
    pub generated_at: DateTime<Utc>,
}

/// The complete output of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub texts: Vec<DocumentSummary>,
    pub comparison: ComparisonResult,
    pub metadata: ReportMetadata,
}

impl AnalysisReport {
    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "Saved analysis report");
        Ok(())
    }

    /// Read a report previously written with `write_json`.
    pub fn read_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid report JSON: {}", path.display()))
    }
}
