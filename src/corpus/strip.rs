// Boilerplate stripping for archival e-texts.
//
// Project Gutenberg style files wrap the actual work in a licence header and
// footer delimited by `*** START OF ... ***` and `*** END OF ... ***`. When
// both markers are present we keep only what lies between them (nothing, if
// the end marker comes first); otherwise the whole text is used as-is.

use std::sync::OnceLock;

use regex_lite::Regex;
use tracing::{info, warn};

fn start_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*\* START OF [^*]+\*\*\*").expect("valid start marker regex"))
}

fn end_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*\* END OF [^*]+\*\*\*").expect("valid end marker regex"))
}

/// Return the interior of the text between the first start marker and the
/// first end marker, or the full text when either marker is missing.
///
/// An end marker that begins before the start marker finishes leaves an
/// empty interior.
pub fn strip_boilerplate(raw: &str) -> &str {
    let start = start_marker().find(raw);
    let end = end_marker().find(raw);

    match (start, end) {
        (Some(s), Some(e)) if s.end() <= e.start() => {
            let interior = &raw[s.end()..e.start()];
            info!(chars = interior.chars().count(), "Stripped boilerplate");
            interior
        }
        (Some(_), Some(_)) => {
            warn!("End marker precedes start marker; no text between them");
            ""
        }
        _ => {
            info!("Boilerplate markers not found; using full text");
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = "Licence preamble\n\
        *** START OF THE PROJECT GUTENBERG EBOOK PLANT LORE ***\n\
        The rose and the oak.\n\
        *** END OF THE PROJECT GUTENBERG EBOOK PLANT LORE ***\n\
        Licence footer";

    #[test]
    fn test_slices_between_markers() {
        assert_eq!(strip_boilerplate(WRAPPED), "\nThe rose and the oak.\n");
    }

    #[test]
    fn test_missing_end_marker_falls_back() {
        let text = "*** START OF THIS BOOK ***\nbody without footer";
        assert_eq!(strip_boilerplate(text), text);
    }

    #[test]
    fn test_missing_start_marker_falls_back() {
        let text = "body\n*** END OF THIS BOOK ***";
        assert_eq!(strip_boilerplate(text), text);
    }

    #[test]
    fn test_first_markers_win() {
        let text = "*** START OF A ***one*** END OF A ***two*** START OF B ***three*** END OF B ***";
        assert_eq!(strip_boilerplate(text), "one");
    }

    #[test]
    fn test_idempotent_without_markers() {
        let once = strip_boilerplate(WRAPPED);
        assert_eq!(strip_boilerplate(once), once);
    }

    #[test]
    fn test_reversed_markers_leave_nothing() {
        let text = "*** END OF X ***middle*** START OF X ***";
        assert_eq!(strip_boilerplate(text), "");
    }

    #[test]
    fn test_end_marker_overlapping_start_marker() {
        // the start marker's closing stars open the end marker
        assert_eq!(strip_boilerplate("*** START OF X *** END OF Y *** body"), "");
    }
}
