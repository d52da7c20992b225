// Corpus handling: loading source files and stripping archival boilerplate.

pub mod loader;
pub mod strip;

use std::path::PathBuf;

use crate::config::DocumentSpec;

/// A loaded text with its display identity.
///
/// `raw_text` is the file content as read (minus any byte-order mark);
/// `clean_text` is derived from it once by the boilerplate stripper.
#[derive(Debug, Clone)]
pub struct Document {
    /// Short identifier used for output file names and report keys
    pub key: String,
    pub path: PathBuf,
    pub title: String,
    pub author: String,
    /// Palette identifier for this document's word cloud
    pub palette: String,
    pub raw_text: String,
    pub clean_text: String,
}

impl Document {
    /// Load a document from disk and strip its boilerplate in one step.
    pub fn load(spec: &DocumentSpec) -> Result<Self, loader::LoadError> {
        let raw_text = loader::load_text(&spec.path)?;
        Ok(Self::from_raw(spec, raw_text))
    }

    /// Build a document from text that has already been read.
    pub fn from_raw(spec: &DocumentSpec, raw_text: String) -> Self {
        let clean_text = strip::strip_boilerplate(&raw_text).to_string();
        Self {
            key: spec.key.clone(),
            path: spec.path.clone(),
            title: spec.title.clone(),
            author: spec.author.clone(),
            palette: spec.palette.clone(),
            raw_text,
            clean_text,
        }
    }
}
