use crate::html::Node;
use crate::parsing::inline::{InlineError, text_to_children};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Builds the subtree for one classified block.
///
/// Code blocks are raw zones; every other kind runs its text through the
/// inline parser, whose errors are returned unchanged.
pub fn build_block(block: &str, kind: &BlockKind) -> Result<Node, InlineError> {
    let tag = kind.tag();
    let node = match kind {
        BlockKind::Paragraph => Node::parent(&tag, text_to_children(&Paragraph::text(block))?),
        BlockKind::Heading { level } => {
            Node::parent(&tag, text_to_children(Heading::text(block, *level))?)
        }
        BlockKind::Code { fence, info } => {
            let mut code = Node::parent("code", vec![Node::text(CodeFence::body(block, *fence))]);
            if !info.is_empty() {
                code = code.with_attr("class", format!("language-{info}"));
            }
            Node::parent(&tag, vec![code])
        }
        BlockKind::Quote => Node::parent(&tag, text_to_children(&BlockQuote::text(block))?),
        BlockKind::UnorderedList => Node::parent(&tag, list_items(UnorderedList::items(block))?),
        BlockKind::OrderedList => Node::parent(&tag, list_items(OrderedList::items(block))?),
    };
    Ok(node)
}

fn list_items(items: Vec<&str>) -> Result<Vec<Node>, InlineError> {
    items
        .into_iter()
        .map(|item| Ok(Node::parent("li", text_to_children(item)?)))
        .collect()
}
