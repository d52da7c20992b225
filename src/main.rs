use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use distant_reading::config::{self, Config};
use distant_reading::render::wordcloud::{BitmapCloudRenderer, CloudOptions};
use distant_reading::sentiment::vader::VaderScorer;

/// Distant reading: compare the vocabulary and tone of two historical texts.
///
/// Strips archival boilerplate, counts filtered vocabulary, scores sentiment,
/// renders a word cloud per text, and writes everything to analysis.json.
#[derive(Parser)]
#[command(name = "distant-reading", version, about)]
struct Cli {
    /// Corpus manifest (JSON list of documents); overrides DISTANT_READING_CORPUS
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Directory for analysis.json and word clouds; overrides DISTANT_READING_OUTPUT_DIR
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis (the default)
    Analyze,

    /// Show the active stopword list
    Stopwords,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("distant_reading=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = &cli.corpus {
        config.corpus = config::load_manifest(path)?;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    match cli.command.unwrap_or(Commands::Analyze) {
        Commands::Analyze => {
            println!("{}", "=".repeat(60));
            println!("{}", "Distant Reading Analysis".bold());
            println!("{}", "=".repeat(60));

            config.validate()?;
            for doc in &config.corpus {
                println!("  {}: {} ({})", doc.key.bold(), doc.title, doc.path.display());
            }
            println!();

            let renderer =
                BitmapCloudRenderer::new(CloudOptions::default().with_background(&config.background)?);
            let report =
                distant_reading::pipeline::analysis::run(&config, &VaderScorer, &renderer)?;

            let report_path = config.report_path();
            distant_reading::output::terminal::display_report(
                &report,
                &report_path.display().to_string(),
            );

            info!("Analysis complete");
            println!("\n{}", "Analysis complete.".bold());
        }

        Commands::Stopwords => {
            let stopwords =
                distant_reading::text::resources::stopwords_with_extras(&config.extra_stopwords);
            let mut sample: Vec<&String> = stopwords.iter().collect();
            sample.sort();

            println!("{} stopwords active", stopwords.len().to_string().bold());
            if !config.extra_stopwords.is_empty() {
                println!("  Extra: {}", config.extra_stopwords.join(", "));
            }
            let preview: Vec<&str> = sample.iter().take(40).map(|s| s.as_str()).collect();
            println!("  {}", preview.join(", ").dimmed());
        }
    }

    Ok(())
}
