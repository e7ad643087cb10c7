pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::html::Node;

use blocks::{build_block, classify_block};
use inline::InlineError;

/// Splits a document into blocks.
///
/// One or more blank (whitespace-only) lines separate blocks. Each block is
/// trimmed and empty blocks are dropped; order is preserved.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    // Helper to flush accumulated lines as one block
    fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
        let block = current.join("\n");
        current.clear();
        let block = block.trim();
        if !block.is_empty() {
            blocks.push(block.to_string());
        }
    }

    for line in markdown.lines() {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);
    blocks
}

/// Converts a whole document into a root `div` holding one subtree per block.
pub fn convert(markdown: &str) -> Result<Node, InlineError> {
    let children = split_blocks(markdown)
        .iter()
        .map(|block| {
            let kind = classify_block(block);
            log::debug!("classified block as {kind:?}");
            build_block(block, &kind)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::parent("div", children))
}
