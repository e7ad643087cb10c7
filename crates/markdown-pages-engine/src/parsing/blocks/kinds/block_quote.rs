/// Blockquote block type with owned delimiter constants.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// Prefix with its separating space.
    pub const PREFIX_SPACED: &'static str = "> ";

    /// Whether every line of `block` is quoted.
    pub fn is_quote(block: &str) -> bool {
        block
            .lines()
            .all(|line| line.starts_with(Self::PREFIX_SPACED) || line == ">")
    }

    /// Strips the quote prefix from one line, then any leading whitespace.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX_SPACED)
            .or_else(|| line.strip_prefix(Self::PREFIX))
            .unwrap_or(line)
            .trim_start()
    }

    /// The quoted text with prefixes removed and lines joined by one space.
    ///
    /// Bare `>` lines carry no text and are skipped.
    pub fn text(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
