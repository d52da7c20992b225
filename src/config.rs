use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::palette::Palette;
use crate::render::wordcloud::DEFAULT_BACKGROUND;

/// One text in the corpus: where it lives and how to present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSpec {
    /// Short identifier, used in output file names (`wordcloud_<key>.png`)
    pub key: String,
    pub path: PathBuf,
    pub title: String,
    pub author: String,
    /// Word cloud palette identifier (e.g. "YlGn")
    pub palette: String,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so a bare invocation analyzes the built-in corpus
/// in the current directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Exactly two documents, compared as A and B
    pub corpus: Vec<DocumentSpec>,
    /// Where analysis.json and the word cloud images are written
    pub output_dir: PathBuf,
    /// Added to the built-in English stopword list
    pub extra_stopwords: Vec<String>,
    /// Word cloud background as #RRGGBB
    pub background: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let corpus = match lookup("DISTANT_READING_CORPUS") {
            Some(path) => load_manifest(Path::new(&path))?,
            None => match default_manifest_path().filter(|p| p.exists()) {
                Some(path) => load_manifest(&path)?,
                None => default_corpus(),
            },
        };

        let extra_stopwords = lookup("DISTANT_READING_EXTRA_STOPWORDS")
            .map(|s| {
                s.split(',')
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            corpus,
            output_dir: lookup("DISTANT_READING_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            extra_stopwords,
            background: lookup("DISTANT_READING_BACKGROUND")
                .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
        })
    }

    /// Check the corpus is something the pipeline can run on.
    /// Call this before loading any text.
    pub fn validate(&self) -> Result<()> {
        if self.corpus.len() != 2 {
            anyhow::bail!(
                "The corpus must list exactly two documents, found {}.\n\
                 Check DISTANT_READING_CORPUS or your corpus.json.",
                self.corpus.len()
            );
        }

        let mut keys = HashSet::new();
        for doc in &self.corpus {
            if doc.key.trim().is_empty() {
                anyhow::bail!("Document '{}' has an empty key", doc.title);
            }
            if !keys.insert(doc.key.as_str()) {
                anyhow::bail!("Duplicate document key '{}' in corpus", doc.key);
            }
            if Palette::by_name(&doc.palette).is_none() {
                let known: Vec<&str> = Palette::names().collect();
                anyhow::bail!(
                    "Unknown palette '{}' for '{}'. Known palettes: {}",
                    doc.palette,
                    doc.key,
                    known.join(", ")
                );
            }
        }
        Ok(())
    }

    /// Path of the JSON report.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("analysis.json")
    }

    /// Path of a document's word cloud image.
    pub fn image_path(&self, key: &str) -> PathBuf {
        self.output_dir.join(format!("wordcloud_{key}.png"))
    }
}

/// The fallback manifest location: ~/.config/distant-reading/corpus.json on Linux.
pub fn default_manifest_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("distant-reading").join("corpus.json"))
}

/// Read a corpus manifest: a JSON array of document specs.
pub fn load_manifest(path: &Path) -> Result<Vec<DocumentSpec>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus manifest: {}", path.display()))?;
    let docs: Vec<DocumentSpec> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid corpus manifest: {}", path.display()))?;
    Ok(docs)
}

/// The two plant-lore texts this tool was built around.
pub fn default_corpus() -> Vec<DocumentSpec> {
    vec![
        DocumentSpec {
            key: "folkard".to_string(),
            path: PathBuf::from("Plant Lore Legends and Lyrics Text File.txt"),
            title: "Plant Lore, Legends, and Lyrics".to_string(),
            author: "Richard Folkard, Jun.".to_string(),
            palette: "YlGn".to_string(),
        },
        DocumentSpec {
            key: "shakespeare".to_string(),
            path: PathBuf::from("Plant Lore and Garden Craft of Shakespeare.txt"),
            title: "The Plant-Lore & Garden-Craft of Shakespeare".to_string(),
            author: "Henry Nicholson Ellacombe".to_string(),
            palette: "RdPu".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_corpus_is_valid() {
        let config = Config {
            corpus: default_corpus(),
            output_dir: PathBuf::from("."),
            extra_stopwords: vec![],
            background: DEFAULT_BACKGROUND.to_string(),
        };
        config.validate().unwrap();
        assert_eq!(config.image_path("folkard"), PathBuf::from("./wordcloud_folkard.png"));
    }

    #[test]
    fn test_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("corpus.json");
        std::fs::write(
            &manifest,
            r#"[
                {"key": "a", "path": "a.txt", "title": "A", "author": "X", "palette": "Greens"},
                {"key": "b", "path": "b.txt", "title": "B", "author": "Y", "palette": "OrRd"}
            ]"#,
        )
        .unwrap();

        let config = Config::from_lookup(lookup_from(&[
            ("DISTANT_READING_CORPUS", manifest.to_str().unwrap()),
            ("DISTANT_READING_OUTPUT_DIR", "/tmp/out"),
            ("DISTANT_READING_EXTRA_STOPWORDS", "thee, thou,,hath"),
        ]))
        .unwrap();

        assert_eq!(config.corpus.len(), 2);
        assert_eq!(config.corpus[1].palette, "OrRd");
        assert_eq!(config.report_path(), PathBuf::from("/tmp/out/analysis.json"));
        assert_eq!(config.extra_stopwords, vec!["thee", "thou", "hath"]);
        config.validate().unwrap();
    }

    #[test]
    fn test_background_override() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.background, DEFAULT_BACKGROUND);

        let config =
            Config::from_lookup(lookup_from(&[("DISTANT_READING_BACKGROUND", "#FFFFFF")])).unwrap();
        assert_eq!(config.background, "#FFFFFF");
    }

    #[test]
    fn test_validate_rejects_bad_corpus() {
        let mut config = Config {
            corpus: default_corpus(),
            output_dir: PathBuf::from("."),
            extra_stopwords: vec![],
            background: DEFAULT_BACKGROUND.to_string(),
        };

        config.corpus[1].key = "folkard".to_string();
        assert!(config.validate().is_err());

        config.corpus = default_corpus();
        config.corpus[0].palette = "viridis".to_string();
        assert!(config.validate().is_err());

        config.corpus.truncate(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[(
            "DISTANT_READING_CORPUS",
            "/nonexistent/corpus.json",
        )]));
        assert!(result.is_err());
    }
}
