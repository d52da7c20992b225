// Linguistic resources shared by every tokenizer run.
//
// Stopwords come from the NLTK English list, which covers function words
// only. The list is built once per process on first use and then
// handed out by reference. Nothing happens at import time; callers invoke
// `english_stopwords()` explicitly before tokenizing.

use std::collections::HashSet;
use std::sync::OnceLock;

use stop_words::{get, LANGUAGE};
use tracing::debug;

static ENGLISH: OnceLock<HashSet<String>> = OnceLock::new();

/// The built-in English stopword set, lowercased.
pub fn english_stopwords() -> &'static HashSet<String> {
    ENGLISH.get_or_init(|| {
        let words: Vec<String> = get(LANGUAGE::English);
        let set: HashSet<String> = words.into_iter().map(|w| w.to_lowercase()).collect();
        debug!(count = set.len(), "Loaded English stopwords");
        set
    })
}

/// The built-in set extended with caller-supplied words.
///
/// Returns an owned set because the extras vary per configuration; the
/// built-in part still comes from the one-time cache.
pub fn stopwords_with_extras(extras: &[String]) -> HashSet<String> {
    let mut set = english_stopwords().clone();
    for word in extras {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            set.insert(word);
        }
    }
    set
}
