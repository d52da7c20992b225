// Distant reading pipeline: two texts in, report and word clouds out.
//
// Runs strictly in sequence:
// 1. Load, strip, tokenize, and score each document
// 2. Render one word cloud per document
// 3. Compare the two vocabularies
// 4. Write analysis.json
//
// Every document is analyzed before anything is written, so a failure on
// the second text leaves no partial output behind.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::compare::overlap::compare;
use crate::config::{Config, DocumentSpec};
use crate::corpus::Document;
use crate::render::palette::Palette;
use crate::render::CloudRenderer;
use crate::report::{AnalysisReport, DocumentSummary, ReportMetadata, ANALYSIS_TYPE};
use crate::sentiment::traits::{SentimentScore, SentimentScorer};
use crate::sentiment::{sample_text, SAMPLE_CHAR_BUDGET};
use crate::text::resources::stopwords_with_extras;
use crate::text::tokenize::{TokenizedText, Tokenizer};

/// A document with everything computed from it.
#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub document: Document,
    pub tokens: TokenizedText,
    pub sentiment: SentimentScore,
}

/// Load and analyze a single document.
pub fn analyze_document(
    spec: &DocumentSpec,
    stopwords: &HashSet<String>,
    scorer: &dyn SentimentScorer,
) -> Result<AnalyzedDocument> {
    info!(key = %spec.key, title = %spec.title, "Processing document");

    let document = Document::load(spec)?;
    let tokens = Tokenizer::new(stopwords).analyze(&document.clean_text);
    let sentiment = scorer
        .score(sample_text(&document.clean_text, SAMPLE_CHAR_BUDGET))
        .with_context(|| format!("Sentiment scoring failed for '{}'", spec.title))?;

    Ok(AnalyzedDocument {
        document,
        tokens,
        sentiment,
    })
}

/// Run the full analysis described by `config`.
///
/// Returns the report that was written to `config.report_path()`.
pub fn run(
    config: &Config,
    scorer: &dyn SentimentScorer,
    renderer: &dyn CloudRenderer,
) -> Result<AnalysisReport> {
    config.validate()?;

    // One-time resource setup before any tokenizer runs
    let stopwords = stopwords_with_extras(&config.extra_stopwords);

    let pb = ProgressBar::new((config.corpus.len() * 2 + 2) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Analysis [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut analyzed = Vec::with_capacity(config.corpus.len());
    for spec in &config.corpus {
        pb.set_message(format!("analyzing {}", spec.key));
        analyzed.push(analyze_document(spec, &stopwords, scorer)?);
        pb.inc(1);
    }

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let mut images = BTreeMap::new();
    for doc in &analyzed {
        pb.set_message(format!("rendering {}", doc.document.key));
        let palette = Palette::by_name(&doc.document.palette)
            .with_context(|| format!("Unknown palette '{}'", doc.document.palette))?;
        let path = config.image_path(&doc.document.key);
        renderer.render(&doc.tokens.frequencies, &palette, &path)?;
        images.insert(doc.document.key.clone(), path.display().to_string());
        pb.inc(1);
    }

    pb.set_message("comparing");
    let (a, b) = (&analyzed[0], &analyzed[1]);
    let comparison = compare(
        &a.document.key,
        &a.tokens.frequencies,
        &b.document.key,
        &b.tokens.frequencies,
    );
    pb.inc(1);

    let report = AnalysisReport {
        texts: analyzed
            .iter()
            .map(|d| DocumentSummary::new(&d.document, &d.tokens, d.sentiment))
            .collect(),
        comparison,
        metadata: ReportMetadata {
            analysis_type: ANALYSIS_TYPE.to_string(),
            sentiment_method: scorer.name().to_string(),
            stopwords_removed: true,
            wordcloud_images: images,
            generated_at: Utc::now(),
        },
    };

    pb.set_message("writing report");
    report.write_json(&config.report_path())?;
    pb.inc(1);
    pb.finish_and_clear();

    Ok(report)
}
