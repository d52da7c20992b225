// Unit tests for boilerplate stripping, tokenization, and filtering.
//
// Exercises the text stages through the public API: marker handling edge
// cases, the filter predicate, and the lexical diversity formula.

use std::collections::HashSet;

use distant_reading::corpus::strip::strip_boilerplate;
use distant_reading::text::frequency::FrequencyTable;
use distant_reading::text::resources::english_stopwords;
use distant_reading::text::tokenize::{Tokenizer, MIN_TOKEN_LEN};

fn stops(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// strip_boilerplate
// ============================================================

#[test]
fn strip_keeps_only_interior() {
    let raw = "The Project Gutenberg eBook\n\
               *** START OF THE PROJECT GUTENBERG EBOOK 12345 ***\n\
               Of the Rose, and its many legends.\n\
               *** END OF THE PROJECT GUTENBERG EBOOK 12345 ***\n\
               Updated editions will replace the previous one.";
    let clean = strip_boilerplate(raw);
    assert_eq!(clean.trim(), "Of the Rose, and its many legends.");
    assert!(!clean.contains("Gutenberg"));
}

#[test]
fn strip_without_markers_is_identity() {
    let raw = "A plain text with no archival wrapper at all.";
    assert_eq!(strip_boilerplate(raw), raw);
    assert_eq!(strip_boilerplate(strip_boilerplate(raw)), raw);
}

#[test]
fn strip_requires_both_markers() {
    let only_start = "*** START OF X ***\nbody";
    let only_end = "body\n*** END OF X ***";
    assert_eq!(strip_boilerplate(only_start), only_start);
    assert_eq!(strip_boilerplate(only_end), only_end);
}

#[test]
fn strip_marker_must_have_title_text() {
    // "[^*]+" needs at least one non-star character between the phrase and
    // the closing stars
    let raw = "*** START OF***body*** END OF***";
    assert_eq!(strip_boilerplate(raw), raw);
}

#[test]
fn strip_empty_interior() {
    let raw = "*** START OF X ****** END OF X ***";
    assert_eq!(strip_boilerplate(raw), "");
}

// ============================================================
// Tokenizer filter predicate
// ============================================================

#[test]
fn every_table_key_passes_filter() {
    let stopwords = stops(&["the", "and", "with"]);
    let tokenizer = Tokenizer::new(&stopwords);
    let text = "The oak, the ash and the thorn: 3 trees with 10,000 leaves; \
                e.g. _Quercus_ [robur] and {Fraxinus} + yew = ok!";
    let result = tokenizer.analyze(text);

    assert!(!result.frequencies.is_empty());
    for (word, count) in result.frequencies.iter() {
        assert!(count > 0);
        assert!(word.chars().all(char::is_alphabetic), "{word} not alphabetic");
        assert!(word.chars().count() > MIN_TOKEN_LEN, "{word} too short");
        assert!(!stopwords.contains(word), "{word} is a stopword");
    }
}

#[test]
fn each_filter_condition_excludes_on_its_own() {
    let stopwords = stops(&["rowan"]);
    let tokenizer = Tokenizer::new(&stopwords);
    let result = tokenizer.analyze("rowan ox holly2 hazel");

    // stopword, too short, non-alphabetic all dropped; only hazel kept
    let words: Vec<&str> = result.frequencies.words().collect();
    assert_eq!(words, vec!["hazel"]);
    assert_eq!(result.total_tokens, 4);
    assert_eq!(result.filtered_tokens, 1);
}

#[test]
fn rose_and_oak_scenario() {
    let stopwords = stops(&["the", "and"]);
    let result = Tokenizer::new(&stopwords).analyze("The Rose And The Oak");

    let expected: FrequencyTable = [("rose", 1), ("oak", 1)].into_iter().collect();
    assert_eq!(result.frequencies, expected);
}

#[test]
fn builtin_stopwords_filter_function_words() {
    let result = Tokenizer::new(english_stopwords()).analyze("The Rose And The Oak");
    assert_eq!(result.frequencies.get("rose"), 1);
    assert_eq!(result.frequencies.get("oak"), 1);
    assert!(!result.frequencies.contains("the"));
    assert!(!result.frequencies.contains("and"));
}

#[test]
fn counts_are_case_insensitive() {
    let stopwords = stops(&[]);
    let result = Tokenizer::new(&stopwords).analyze("Rose ROSE rose RoSe");
    assert_eq!(result.frequencies.get("rose"), 4);
    assert_eq!(result.unique_words(), 1);
}

// ============================================================
// Lexical diversity
// ============================================================

#[test]
fn lexical_diversity_matches_formula() {
    let stopwords = stops(&["the"]);
    let result = Tokenizer::new(&stopwords).analyze("the lily, the lily and the rose.");

    let expected = result.unique_words() as f64 / result.total_tokens as f64;
    assert!((result.lexical_diversity() - expected).abs() < 1e-12);
    // lily, rose, and
    assert_eq!(result.unique_words(), 3);
    // the lily , the lily and the rose .
    assert_eq!(result.total_tokens, 9);
}

#[test]
fn lexical_diversity_zero_without_tokens() {
    let stopwords = stops(&[]);
    let result = Tokenizer::new(&stopwords).analyze("");
    assert_eq!(result.total_tokens, 0);
    assert_eq!(result.lexical_diversity(), 0.0);
}

#[test]
fn punctuation_only_text_has_tokens_but_no_vocabulary() {
    let stopwords = stops(&[]);
    let result = Tokenizer::new(&stopwords).analyze("... !!! ; -- 1850");
    assert!(result.total_tokens > 0);
    assert!(result.frequencies.is_empty());
    assert_eq!(result.lexical_diversity(), 0.0);
}
