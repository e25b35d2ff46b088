use log::{debug, warn};

use crate::block::{self, Block, BlockKind, CODE_FENCE};
use crate::config::{Config, RenderConfig};
use crate::error::Result;
use crate::inline::text_to_fragments;
use crate::node::{Attributes, ElementNode, fragment_to_node};

/// Build the element tree for a list of blocks, wrapped in the root element.
pub fn blocks_to_node(blocks: &[Block], config: &Config) -> Result<ElementNode> {
    let mut children = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block_to_node(block, &config.render) {
            Ok(node) => children.push(node),
            Err(e) if config.render.skip_invalid_blocks => {
                warn!("skipping {} block: {e}", block.kind);
            }
            Err(e) => return Err(e),
        }
    }

    let mut attrs = Attributes::new();
    if !config.document.root_class.is_empty() {
        attrs.insert("class", config.document.root_class.as_str());
    }

    debug!("document has {} top-level elements", children.len());
    let root = if children.is_empty() {
        ElementNode::leaf(config.document.root_tag.as_str(), None, attrs)
    } else {
        ElementNode::parent(config.document.root_tag.as_str(), children).with_attributes(attrs)
    };
    Ok(root)
}

/// Build the element for one classified block.
pub fn block_to_node(block: &Block, config: &RenderConfig) -> Result<ElementNode> {
    let text = block.text.as_str();

    match block.kind {
        BlockKind::Heading(level) => {
            let content = text.trim_start_matches('#').trim_start();
            inline_element(&format!("h{level}"), &join_lines(content.lines()))
        }
        BlockKind::Paragraph => inline_element("p", &join_lines(text.lines())),
        BlockKind::Quote => {
            let lines = text
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start());
            inline_element("blockquote", &join_lines(lines))
        }
        BlockKind::UnorderedList => {
            let items = text
                .lines()
                .map(|line| inline_element("li", line.strip_prefix("- ").unwrap_or(line)))
                .collect::<Result<Vec<_>>>()?;
            Ok(ElementNode::parent("ul", items))
        }
        BlockKind::OrderedList => {
            let items = text
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    let marker = block::ordered_marker(i + 1);
                    inline_element("li", line.strip_prefix(marker.as_str()).unwrap_or(line))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ElementNode::parent("ol", items))
        }
        BlockKind::Code => Ok(code_element(text, config)),
    }
}

/// An element whose children are the inline fragments of `text`.
fn inline_element(tag: &str, text: &str) -> Result<ElementNode> {
    let children: Vec<ElementNode> = text_to_fragments(text)?
        .iter()
        .map(fragment_to_node)
        .collect();

    if children.is_empty() {
        return Ok(ElementNode::leaf(tag, None, Attributes::new()));
    }
    Ok(ElementNode::parent(tag, children))
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.map(str::trim).collect::<Vec<_>>().join(" ")
}

/// `<pre><code>` for a fenced block. The body is not parsed for inline syntax.
fn code_element(text: &str, config: &RenderConfig) -> ElementNode {
    let lines: Vec<&str> = text.lines().collect();

    let (language, body) = match lines.as_slice() {
        [single] => {
            let inner = single.strip_prefix(CODE_FENCE).unwrap_or(single);
            let inner = inner.strip_suffix(CODE_FENCE).unwrap_or(inner);
            (None, inner.to_string())
        }
        [open, inner @ .., _close] => {
            let info = open.trim_start_matches('`').trim();
            let language = info.split_whitespace().next().map(str::to_string);
            let mut body = inner.join("\n");
            if !body.is_empty() {
                body.push('\n');
            }
            (language, body)
        }
        [] => (None, String::new()),
    };

    let mut attrs = Attributes::new();
    if config.code_language_class {
        if let Some(lang) = language {
            attrs.insert("class", format!("language-{lang}"));
        }
    }

    ElementNode::parent("pre", vec![ElementNode::leaf("code", Some(body), attrs)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::serialize;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        let blocks = parse(markdown).unwrap();
        let node = blocks_to_node(&blocks, &Config::default()).unwrap();
        serialize(&node).unwrap()
    }

    #[test]
    fn heading() {
        assert_eq!(render("# Hello"), "<div><h1>Hello</h1></div>");
        assert_eq!(render("### **Big** deal"), "<div><h3><b>Big</b> deal</h3></div>");
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(
            render("This is _one_\nparagraph"),
            "<div><p>This is <i>one</i> paragraph</p></div>"
        );
    }

    #[test]
    fn quote() {
        assert_eq!(
            render("> first line\n> second `line`"),
            "<div><blockquote>first line second <code>line</code></blockquote></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            render("- one\n- [two](2.html)"),
            r#"<div><ul><li>one</li><li><a href="2.html">two</a></li></ul></div>"#
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render("1. one\n2. two"),
            "<div><ol><li>one</li><li>two</li></ol></div>"
        );
    }

    #[test]
    fn empty_list_item_is_an_empty_element() {
        assert_eq!(
            render("- a\n- \n- b"),
            "<div><ul><li>a</li><li></li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn code_block_keeps_markup_literal() {
        assert_eq!(
            render("```rust\nlet x = **y**;\n```"),
            "<div><pre><code class=\"language-rust\">let x = **y**;\n</code></pre></div>"
        );
    }

    #[test]
    fn code_block_without_language() {
        assert_eq!(
            render("```\na\nb\n```"),
            "<div><pre><code>a\nb\n</code></pre></div>"
        );
    }

    #[test]
    fn single_line_code_block() {
        assert_eq!(
            render("```inline```"),
            "<div><pre><code>inline</code></pre></div>"
        );
    }

    #[test]
    fn language_class_can_be_disabled() {
        let config = RenderConfig {
            code_language_class: false,
            ..RenderConfig::default()
        };
        let block = Block {
            kind: BlockKind::Code,
            text: "```sh\nls\n```".to_string(),
        };
        let node = block_to_node(&block, &config).unwrap();
        assert_eq!(serialize(&node).unwrap(), "<pre><code>ls\n</code></pre>");
    }

    #[test]
    fn empty_document_is_an_empty_root() {
        assert_eq!(render(""), "<div></div>");
    }

    #[test]
    fn root_tag_and_class_come_from_config() {
        let mut config = Config::default();
        config.document.root_tag = "article".to_string();
        config.document.root_class = "markdown".to_string();
        let blocks = parse("hi").unwrap();
        let node = blocks_to_node(&blocks, &config).unwrap();
        assert_eq!(
            serialize(&node).unwrap(),
            r#"<article class="markdown"><p>hi</p></article>"#
        );
    }

    #[test]
    fn invalid_block_fails_the_document() {
        let blocks = parse("fine\n\nbroken `code").unwrap();
        assert!(blocks_to_node(&blocks, &Config::default()).is_err());
    }

    #[test]
    fn invalid_block_can_be_skipped() {
        let mut config = Config::default();
        config.render.skip_invalid_blocks = true;
        let blocks = parse("fine\n\nbroken `code").unwrap();
        let node = blocks_to_node(&blocks, &config).unwrap();
        assert_eq!(serialize(&node).unwrap(), "<div><p>fine</p></div>");
    }
}
