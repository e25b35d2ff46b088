//! Turning one block's text into an ordered list of typed fragments.
//!
//! Passes run in a fixed order: bold, italic, code, images, links. Each pass
//! only looks at plain fragments, so styles never nest: `**a _b_**` yields a
//! bold fragment with the underscores kept as literal text.

use log::trace;

use crate::error::{MdError, Result};
use crate::extract::{self, InlineMatch};
use crate::fragment::{FragmentKind, TextFragment};

pub const BOLD_DELIMITER: &str = "**";
pub const ITALIC_DELIMITER: &str = "_";
pub const CODE_DELIMITER: &str = "`";

/// Split every plain fragment on `delimiter`, turning the odd-numbered runs
/// into `kind`.
///
/// Non-plain fragments pass through untouched and empty runs are dropped.
/// An odd delimiter count in any plain fragment fails the whole call.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &str,
    kind: FragmentKind,
) -> Result<Vec<TextFragment>> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }

        let text = fragment.text();
        if text.matches(delimiter).count() % 2 != 0 {
            return Err(MdError::unbalanced(delimiter, text));
        }

        for (i, run) in text.split(delimiter).enumerate() {
            if run.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextFragment::plain(run));
            } else {
                out.push(TextFragment::new(run, kind));
            }
        }
    }

    Ok(out)
}

/// Replace image syntax in plain fragments with image fragments.
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_matches(fragments, extract::find_images, |m| {
        TextFragment::image(m.label, m.destination)
    })
}

/// Replace link syntax in plain fragments with link fragments.
///
/// Expects [`split_images`] to have run first; image syntax still present
/// in the text is never taken for a link.
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_matches(fragments, extract::find_links, |m| {
        TextFragment::link(m.label, m.destination)
    })
}

fn split_matches<F, B>(fragments: Vec<TextFragment>, find: F, build: B) -> Vec<TextFragment>
where
    F: Fn(&str) -> Vec<InlineMatch<'_>>,
    B: Fn(&InlineMatch<'_>) -> TextFragment,
{
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }

        let text = fragment.text();
        let matches = find(text);
        let mut last = 0;
        for m in &matches {
            push_plain(&mut out, &text[last..m.span.start]);
            out.push(build(m));
            last = m.span.end;
        }
        push_plain(&mut out, &text[last..]);
    }

    out
}

fn push_plain(out: &mut Vec<TextFragment>, text: &str) {
    if !text.is_empty() {
        out.push(TextFragment::plain(text));
    }
}

/// Parse the inline syntax of `text` into fragments.
///
/// Empty input gives an empty list. An unbalanced delimiter fails the whole
/// call with no partial result.
pub fn text_to_fragments(text: &str) -> Result<Vec<TextFragment>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let fragments = vec![TextFragment::plain(text)];
    let fragments = split_delimiter(fragments, BOLD_DELIMITER, FragmentKind::Bold)?;
    let fragments = split_delimiter(fragments, ITALIC_DELIMITER, FragmentKind::Italic)?;
    let fragments = split_delimiter(fragments, CODE_DELIMITER, FragmentKind::Code)?;
    let fragments = split_images(fragments);
    let fragments = split_links(fragments);

    trace!("{} inline fragments from {} bytes", fragments.len(), text.len());
    Ok(fragments)
}
