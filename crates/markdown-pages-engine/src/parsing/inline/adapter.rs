use crate::html::Node;

use super::{parser::InlineError, parse_inline, types::TextSpan};

/// Maps one inline span to the leaf node that renders it.
pub fn span_to_node(span: TextSpan) -> Node {
    match span {
        TextSpan::Plain(text) => Node::text(text),
        TextSpan::Bold(text) => Node::leaf(Some("b"), text),
        TextSpan::Italic(text) => Node::leaf(Some("i"), text),
        TextSpan::Code(text) => Node::leaf(Some("code"), text),
        TextSpan::Link { text, url } => Node::leaf(Some("a"), text).with_attr("href", url),
        TextSpan::Image { alt, url } => Node::leaf(Some("img"), "")
            .with_attr("src", url)
            .with_attr("alt", alt),
    }
}

/// Inline-parses `text` and maps every span to a leaf node, in order.
pub fn text_to_children(text: &str) -> Result<Vec<Node>, InlineError> {
    Ok(parse_inline(text)?.into_iter().map(span_to_node).collect())
}
