//! # HTML Node Model
//!
//! A small owned tree of printable nodes and its serialization to text.
//!
//! ## Modules
//!
//! - **`node`**: `Node` (leaf or parent), `Attributes`, `RenderError`
//! - **`title`**: `extract_title()` over already serialized HTML
//!
//! ## Key Invariants
//!
//! - Parents own their children exclusively; the tree has no back references
//! - Attributes serialize in insertion order
//! - Nothing is escaped: the dialect assumes trusted input

pub mod node;
pub mod title;

pub use node::{Attributes, LeafNode, Node, ParentNode, RenderError};
pub use title::{TitleError, extract_title};

/// Serializes a node tree to HTML text.
pub fn serialize(node: &Node) -> Result<String, RenderError> {
    node.to_html()
}
