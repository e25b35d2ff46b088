//! Markdown to HTML element tree.
//!
//! A document is split into blank-line separated blocks, each block is
//! classified, its text is parsed into inline fragments, and everything is
//! lowered to an [`ElementNode`] tree that serializes to HTML.
//!
//! ```
//! let html = mdhtml::markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```
//!
//! Inline styles do not nest: bold, italic and code are split in that order
//! and each pass only sees text the previous passes left plain.

mod block;
mod config;
mod error;
mod extract;
mod fragment;
mod html;
mod inline;
mod node;
mod parser;

pub use block::{Block, BlockKind, classify};
pub use config::{Config, DocumentConfig, RenderConfig};
pub use error::{MdError, Result};
pub use extract::{InlineMatch, extract_images, extract_links, find_images, find_links};
pub use fragment::{FragmentKind, TextFragment};
pub use html::{block_to_node, blocks_to_node};
pub use inline::{split_delimiter, split_images, split_links, text_to_fragments};
pub use node::{Attributes, ElementNode, fragment_to_node, serialize, serialize_escaped};
pub use parser::split_into_blocks;

/// Parse markdown text into a list of classified blocks.
pub fn parse(markdown: &str) -> Result<Vec<Block>> {
    parser::parse(markdown)
}

/// Build the element tree for a whole document.
pub fn markdown_to_node(markdown: &str, config: &Config) -> Result<ElementNode> {
    let blocks = parse(markdown)?;
    html::blocks_to_node(&blocks, config)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String> {
    let root = markdown_to_node(markdown, config)?;
    if config.render.escape_text {
        serialize_escaped(&root)
    } else {
        serialize(&root)
    }
}
