use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("no <h1> title found")]
    TitleNotFound,
}

/// Returns the inner text of the first `<h1>` element in serialized HTML.
///
/// The element must open and close on the same line and contain at least one
/// character.
pub fn extract_title(html: &str) -> Result<String, TitleError> {
    static H1_REGEX: OnceLock<Regex> = OnceLock::new();
    let h1_regex = H1_REGEX.get_or_init(|| Regex::new(r"<h1>(.+?)</h1>").expect("Invalid h1 regex"));

    h1_regex
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(TitleError::TitleNotFound)
}
