//! # Block Parsing
//!
//! Each blank-line delimited block is classified once, then built into a node
//! subtree.
//!
//! ## Parsing Phases
//!
//! 1. **Classification** (`classify`): `classify_block` picks exactly one
//!    `BlockKind` using ordered rules (heading, code, quote, unordered list,
//!    ordered list, paragraph)
//!
//! 2. **Construction** (`builder`): `build_block` turns the block into a
//!    subtree, running inline parsing on everything except code
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, lists, Paragraph)
//! - **`classify`**: `classify_block`
//! - **`builder`**: `build_block`
//!
//! ## Key Invariants
//!
//! - Classification never fails; paragraph is the fallback
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Markers are stripped by their detected length, never a fixed literal

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::build_block;
pub use classify::classify_block;
pub use types::BlockKind;
