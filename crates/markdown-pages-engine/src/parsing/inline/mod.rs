//! # Inline Parsing
//!
//! Turns one text run into typed spans, then spans into leaf nodes.
//!
//! ## Architecture
//!
//! Inline parsing is a fixed pipeline of passes. Every pass rewrites only the
//! `Plain` spans left by the previous pass; anything already typed is a raw
//! zone and is never scanned again. That is what keeps `**` inside a code span
//! from becoming bold when the bold pass runs first.
//!
//! 1. `**` -> Bold
//! 2. `_` -> Italic
//! 3. `*` -> Italic
//! 4. `` ` `` -> Code
//! 5. `![alt](url)` -> Image
//! 6. `[text](url)` -> Link (never when preceded by `!`)
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` enum
//! - **`kinds`**: delimiter constants and bracket patterns
//! - **`parser`**: `parse_inline()` and the individual `split_spans_*` passes
//! - **`adapter`**: `span_to_node()` mapping a span to one leaf node

pub mod adapter;
pub mod kinds;
pub mod parser;
pub mod types;

pub use adapter::{span_to_node, text_to_children};
pub use parser::{InlineError, parse_inline};
pub use types::TextSpan;
