use log::debug;

use crate::block::{self, Block};
use crate::error::Result;

/// Split a document into blocks on blank lines, trimmed, empties dropped.
pub fn split_into_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Parse markdown text into a list of classified blocks, in document order
pub fn parse(markdown: &str) -> Result<Vec<Block>> {
    let blocks = split_into_blocks(markdown)
        .into_iter()
        .map(|text| {
            let kind = block::classify(text)?;
            Ok(Block {
                kind,
                text: text.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed {} blocks", blocks.len());
    Ok(blocks)
}
