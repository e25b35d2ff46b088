use std::fmt;

use crate::error::{MdError, Result};

pub const CODE_FENCE: &str = "```";

/// Structural type of a block of Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    /// Level 1 to 6
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Paragraph => f.write_str("paragraph"),
            BlockKind::Heading(level) => write!(f, "heading {level}"),
            BlockKind::Code => f.write_str("code"),
            BlockKind::Quote => f.write_str("quote"),
            BlockKind::UnorderedList => f.write_str("unordered list"),
            BlockKind::OrderedList => f.write_str("ordered list"),
        }
    }
}

/// A block of Markdown source paired with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// Classify one block.
///
/// Rules are tried in order against the trimmed block and the first match
/// wins; a multi-line block only gets a line-based kind when every line
/// passes. Empty input is an error, whitespace-only input is a paragraph.
pub fn classify(block: &str) -> Result<BlockKind> {
    if block.is_empty() {
        return Err(MdError::InvalidBlockInput("block is empty".to_string()));
    }

    let block = block.trim();

    if let Some(level) = heading_level(block) {
        return Ok(BlockKind::Heading(level));
    }
    if is_code(block) {
        return Ok(BlockKind::Code);
    }
    if block.lines().all(|line| line.starts_with("> ")) && !block.is_empty() {
        return Ok(BlockKind::Quote);
    }
    if block.lines().all(|line| line.starts_with("- ")) && !block.is_empty() {
        return Ok(BlockKind::UnorderedList);
    }
    if is_ordered_list(block) {
        return Ok(BlockKind::OrderedList);
    }

    Ok(BlockKind::Paragraph)
}

/// Level of an ATX heading: one to six `#` followed by a space.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

fn is_code(block: &str) -> bool {
    match (block.lines().next(), block.lines().next_back()) {
        (Some(first), Some(last)) => first.starts_with(CODE_FENCE) && last.starts_with(CODE_FENCE),
        _ => false,
    }
}

fn is_ordered_list(block: &str) -> bool {
    !block.is_empty()
        && block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&ordered_marker(i + 1)))
}

/// Marker expected at the start of the `n`th (1-based) ordered list line.
pub(crate) fn ordered_marker(n: usize) -> String {
    format!("{n}. ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", BlockKind::Heading(1))]
    #[case("### Third", BlockKind::Heading(3))]
    #[case("###### Six", BlockKind::Heading(6))]
    #[case("####### Seven", BlockKind::Paragraph)]
    #[case("#Heading", BlockKind::Paragraph)]
    #[case("```\ncode\n```", BlockKind::Code)]
    #[case("```rust\nlet x = 1;\n```", BlockKind::Code)]
    #[case("```one line```", BlockKind::Code)]
    #[case("```\ncode\n``", BlockKind::Paragraph)]
    #[case("> Test a quote", BlockKind::Quote)]
    #[case("> one\n> two\n> three", BlockKind::Quote)]
    #[case("   > This is a quote", BlockKind::Quote)]
    #[case("> This is a quote\nThis is not", BlockKind::Paragraph)]
    #[case(">no space", BlockKind::Paragraph)]
    #[case("- a\n- b", BlockKind::UnorderedList)]
    #[case("- a\nb", BlockKind::Paragraph)]
    #[case("- Item 1\nItem 2", BlockKind::Paragraph)]
    #[case("1. a\n2. b", BlockKind::OrderedList)]
    #[case("1. a\n3. b", BlockKind::Paragraph)]
    #[case("1. Item 1\n2 Item 2", BlockKind::Paragraph)]
    #[case("2. starts at two", BlockKind::Paragraph)]
    #[case("just some text", BlockKind::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block).unwrap(), expected);
    }

    #[test]
    fn ten_item_ordered_list() {
        let block = (1..=10)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block).unwrap(), BlockKind::OrderedList);
    }

    #[test]
    fn heading_wins_over_later_rules() {
        assert_eq!(classify("# - not a list").unwrap(), BlockKind::Heading(1));
    }

    #[test]
    fn empty_block_is_an_error() {
        assert!(matches!(classify(""), Err(MdError::InvalidBlockInput(_))));
    }

    #[test]
    fn whitespace_only_block_is_a_paragraph() {
        assert_eq!(classify("   ").unwrap(), BlockKind::Paragraph);
    }
}
