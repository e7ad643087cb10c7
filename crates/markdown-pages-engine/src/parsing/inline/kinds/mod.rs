//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `UNDERSCORE = "_"`, `STAR = "*"`
//! - **`CodeSpan`**: `TICK = "`"`
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, rejected after `!`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

use std::ops::Range;

use super::types::TextSpan;

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;

/// A bracket construct found in a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch {
    /// Byte range of the whole construct in the scanned text.
    pub range: Range<usize>,
    pub span: TextSpan,
}
