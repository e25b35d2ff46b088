//! Locating `![alt](src)` images and `[label](href)` links in a run of text.
//!
//! Labels may not contain square brackets and destinations may not contain
//! parentheses, so nested bracket syntax never matches. Anything malformed is
//! left alone and stays plain text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("invalid image pattern")
});

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("invalid link pattern"));

/// One image or link occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch<'a> {
    /// Byte range of the whole syntax, brackets and parens included.
    pub span: Range<usize>,
    pub label: &'a str,
    pub destination: &'a str,
}

/// All image occurrences, leftmost first and non-overlapping.
pub fn find_images(text: &str) -> Vec<InlineMatch<'_>> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            Some(InlineMatch {
                span: caps.get(0)?.range(),
                label: caps.get(1)?.as_str(),
                destination: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// All link occurrences, leftmost first and non-overlapping.
///
/// A candidate directly preceded by `!` is an image and is rejected; scanning
/// then resumes one byte past the rejected start, so a link that begins
/// inside the rejected text can still be found.
pub fn find_links(text: &str) -> Vec<InlineMatch<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = LINK_PATTERN.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(label), Some(dest)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };

        if text[..whole.start()].ends_with('!') {
            // `[` is ASCII, so the next byte is a char boundary
            pos = whole.start() + 1;
            continue;
        }

        found.push(InlineMatch {
            span: whole.range(),
            label: label.as_str(),
            destination: dest.as_str(),
        });
        pos = whole.end();
    }

    found
}

/// `(alt, src)` pairs of every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.label, m.destination))
        .collect()
}

/// `(label, href)` pairs of every link in `text`, images excluded.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.label, m.destination))
        .collect()
}
