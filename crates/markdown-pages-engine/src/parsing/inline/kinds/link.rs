use std::sync::OnceLock;

use regex::Regex;

use super::BracketMatch;
use crate::parsing::inline::types::TextSpan;

/// `[text](url)` not preceded by `!`.
///
/// The regex crate has no lookbehind, so a candidate directly after `!` is
/// rejected by hand and the scan resumes one byte past its `[`.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";
    pub const IMAGE_MARKER: char = '!';

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Finds the leftmost link in `text`.
    pub fn find(text: &str) -> Option<BracketMatch> {
        Self::find_at(text, 0)
    }

    fn find_at(text: &str, mut start: usize) -> Option<BracketMatch> {
        while let Some(caps) = Self::regex().captures_at(text, start) {
            let whole = caps.get(0)?;
            if text[..whole.start()].ends_with(Self::IMAGE_MARKER) {
                // `[` is one byte, so this stays on a char boundary.
                start = whole.start() + 1;
                continue;
            }
            return Some(BracketMatch {
                range: whole.range(),
                span: TextSpan::Link {
                    text: caps[1].to_string(),
                    url: caps[2].to_string(),
                },
            });
        }
        None
    }
}
