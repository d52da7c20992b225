// Tokenization and vocabulary filtering.
//
// Pipeline, in this order:
// 1. lowercase
// 2. replace source markup characters (_ + = [ ] { }) with spaces
// 3. split on Unicode word boundaries, keeping punctuation tokens; then
//    rejoin hyphenated compounds and split clitics (rose's -> rose + 's)
// 4. keep alphabetic tokens longer than the minimum that aren't stopwords
//
// The unfiltered token count feeds lexical diversity; only the filtered
// tokens reach the frequency table.

use std::collections::HashSet;

use tracing::{info, warn};
use unicode_segmentation::UnicodeSegmentation;

use super::frequency::FrequencyTable;

/// Tokens must be strictly longer than this many characters.
pub const MIN_TOKEN_LEN: usize = 2;

/// Markup artifacts in archival texts (italics, footnote brackets, etc).
const FORMATTING_CHARS: [char; 7] = ['_', '+', '=', '[', ']', '{', '}'];

/// Contraction and possessive suffixes split off as their own tokens,
/// with both straight and typographic apostrophes.
const CLITICS: [&str; 14] = [
    "n't", "n\u{2019}t", "'s", "\u{2019}s", "'m", "\u{2019}m", "'d", "\u{2019}d", "'ll",
    "\u{2019}ll", "'re", "\u{2019}re", "'ve", "\u{2019}ve",
];

/// Result of tokenizing one document.
#[derive(Debug, Clone, Default)]
pub struct TokenizedText {
    /// Every non-whitespace token, before filtering
    pub total_tokens: usize,
    /// Tokens that survived the filter (sum of the table's counts)
    pub filtered_tokens: usize,
    pub frequencies: FrequencyTable,
}

impl TokenizedText {
    pub fn unique_words(&self) -> usize {
        self.frequencies.len()
    }

    /// Unique filtered words divided by total raw tokens; 0 for empty input.
    pub fn lexical_diversity(&self) -> f64 {
        if self.total_tokens == 0 {
            0.0
        } else {
            self.unique_words() as f64 / self.total_tokens as f64
        }
    }
}

/// Splits text into tokens and filters them against a stopword set.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    stopwords: &'a HashSet<String>,
    min_len: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stopwords: &'a HashSet<String>) -> Self {
        Self {
            stopwords,
            min_len: MIN_TOKEN_LEN,
        }
    }

    /// Lowercase and blank out formatting characters.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| if FORMATTING_CHARS.contains(&c) { ' ' } else { c })
            .collect()
    }

    /// The ordered token stream for `text`, punctuation included.
    pub fn token_stream(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        split_tokens(&normalized).into_iter().map(str::to_string).collect()
    }

    /// Whether a token belongs in the frequency table.
    pub fn keeps(&self, token: &str) -> bool {
        token.chars().all(char::is_alphabetic)
            && token.chars().count() > self.min_len
            && !self.stopwords.contains(token)
    }

    /// Tokenize, filter, and count.
    pub fn analyze(&self, text: &str) -> TokenizedText {
        let normalized = self.normalize(text);

        let mut result = TokenizedText::default();
        for token in split_tokens(&normalized) {
            result.total_tokens += 1;
            if self.keeps(token) {
                result.filtered_tokens += 1;
                result.frequencies.add(token);
            }
        }

        if result.total_tokens == 0 {
            warn!("Text produced no tokens");
        }

        info!(
            total = result.total_tokens,
            filtered = result.filtered_tokens,
            unique = result.unique_words(),
            "Tokenized text"
        );

        result
    }
}

/// Tokens in source order, whitespace dropped.
///
/// Word-boundary segments joined by a single hyphen with no surrounding
/// space become one token (`garden-craft`). A trailing clitic is then split
/// off its word (`rose's` gives `rose` and `'s`).
fn split_tokens(text: &str) -> Vec<&str> {
    let segments: Vec<(usize, &str)> = text
        .split_word_bound_indices()
        .filter(|(_, seg)| !seg.chars().all(char::is_whitespace))
        .collect();

    let mut tokens = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        let (start, seg) = segments[i];
        let mut end = start + seg.len();

        if is_wordlike(seg) {
            while let [(hyphen_at, "-"), (next_at, next), ..] = segments[i + 1..] {
                if hyphen_at != end || next_at != hyphen_at + 1 || !is_wordlike(next) {
                    break;
                }
                end = next_at + next.len();
                i += 2;
            }
        }

        push_with_clitic(&text[start..end], &mut tokens);
        i += 1;
    }
    tokens
}

fn is_wordlike(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}

fn push_with_clitic<'t>(token: &'t str, out: &mut Vec<&'t str>) {
    let split = CLITICS
        .iter()
        .find(|clitic| token.len() > clitic.len() && token.ends_with(*clitic))
        .map(|clitic| token.len() - clitic.len());

    match split {
        Some(at) => {
            out.push(&token[..at]);
            out.push(&token[at..]);
        }
        None => out.push(token),
    }
}
