/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Line breaks inside a paragraph are folded into spaces before
/// inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn text(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(Self::LINE_JOIN)
    }
}
