pub mod error;
pub mod html;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{Attributes, LeafNode, Node, ParentNode, RenderError, TitleError};
pub use html::{extract_title, serialize};
pub use parsing::inline::{InlineError, TextSpan};
pub use parsing::{convert, split_blocks};

/// Converts a Markdown document straight to its serialized HTML.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    let root = convert(markdown)?;
    Ok(serialize(&root)?)
}
