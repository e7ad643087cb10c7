use std::sync::OnceLock;

use regex::Regex;

use super::BracketMatch;
use crate::parsing::inline::types::TextSpan;

/// `![alt](url)`. Both captures are non-greedy and may be empty.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    /// Finds the leftmost image in `text`.
    pub fn find(text: &str) -> Option<BracketMatch> {
        let caps = Self::regex().captures(text)?;
        let whole = caps.get(0)?;
        Some(BracketMatch {
            range: whole.range(),
            span: TextSpan::Image {
                alt: caps[1].to_string(),
                url: caps[2].to_string(),
            },
        })
    }
}
