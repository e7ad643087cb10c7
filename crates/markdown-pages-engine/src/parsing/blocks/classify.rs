use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies one trimmed, non-empty block.
///
/// Rules are tried in priority order and the first match wins; anything left
/// over is a paragraph, so classification never fails.
pub fn classify_block(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }
    if let Some(fence) = CodeFence::enclosing(block) {
        return BlockKind::Code {
            fence,
            info: CodeFence::info(block, fence).to_string(),
        };
    }
    if BlockQuote::is_quote(block) {
        return BlockKind::Quote;
    }
    if UnorderedList::matches(block) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::matches(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
