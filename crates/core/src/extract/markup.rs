// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tagged-PDF markup flattening.
//!
//! The Ordo arrives as the XML export of a tagged PDF. Block-level tags
//! (paragraphs, table cells, headings, list items) delimit segments; every
//! other tag is dropped. Input without block tags is treated as plain text
//! with one segment per line.

use crate::patterns::compile;
use regex::Regex;
use std::sync::LazyLock;

static PROCESSING_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| compile(r"<\?[^?]+\?>"));

static XMP_METADATA: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)<x:xmpmeta.*?</x:xmpmeta>"));

static BOOKMARK_TREE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)<bookmark-tree.*?</bookmark-tree>"));

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"</?(?:P|TD|TH|TR|Table|Part|Sect|H[1-6]|L|LI|Lbl|LBody)(?:\s[^>]*)?/?>")
});

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]+>"));

static NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| compile(r"&#(x[0-9A-Fa-f]+|\d+);"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

const SEPARATOR: char = '\u{1e}';

/// Splits a raw Ordo document into trimmed, non-empty text segments in
/// document order.
#[must_use]
pub fn segments(raw: &str) -> Vec<String> {
    if !BLOCK_TAG.is_match(raw) {
        return raw
            .lines()
            .map(|line| collapse(&decode_entities(line)))
            .filter(|line| !line.is_empty())
            .collect();
    }

    let mut text: String = PROCESSING_INSTRUCTION.replace_all(raw, "").into_owned();
    text = XMP_METADATA.replace_all(&text, "").into_owned();
    text = BOOKMARK_TREE.replace_all(&text, "").into_owned();
    text = BLOCK_TAG
        .replace_all(&text, SEPARATOR.to_string().as_str())
        .into_owned();
    text = ANY_TAG.replace_all(&text, "").into_owned();

    text.split(SEPARATOR)
        .map(|segment| collapse(&decode_entities(segment)))
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Decodes the XML entities a PDF export emits.
fn decode_entities(text: &str) -> String {
    let numeric: String = NUMERIC_ENTITY
        .replace_all(text, |captures: &regex::Captures| {
            let body: &str = &captures[1];
            let code: Option<u32> = body.strip_prefix('x').map_or_else(
                || body.parse().ok(),
                |hex| u32::from_str_radix(hex, 16).ok(),
            );
            code.and_then(char::from_u32)
                .map_or_else(|| captures[0].to_string(), String::from)
        })
        .into_owned();

    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tags_split_segments() {
        let raw: &str = "<?xml version=\"1.0\"?><TaggedPDF-doc><Part><P>1 MONDAY</P>\
                         <P>St Justin, <Span>martyr</Span></P><TD>Mt 8:5-11: Faith</TD></Part></TaggedPDF-doc>";
        assert_eq!(
            segments(raw),
            vec!["1 MONDAY", "St Justin, martyr", "Mt 8:5-11: Faith"]
        );
    }

    #[test]
    fn test_metadata_is_dropped() {
        let raw: &str = "<x:xmpmeta>\n<rdf>title 1 SUNDAY</rdf>\n</x:xmpmeta><P>2 Monday</P>\
                         <bookmark-tree><bookmark title=\"3 Tuesday\"/></bookmark-tree>";
        assert_eq!(segments(raw), vec!["2 Monday"]);
    }

    #[test]
    fn test_link_tags_are_not_block_tags() {
        let raw: &str = "<P>See <Link>page 4</Link> here</P>";
        assert_eq!(segments(raw), vec!["See page 4 here"]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let raw: &str = "<P>Is 2:1&#8211;5 &amp; Ps 122</P>";
        assert_eq!(segments(raw), vec!["Is 2:1\u{2013}5 & Ps 122"]);
    }

    #[test]
    fn test_plain_text_splits_on_lines() {
        let raw: &str = "1 MONDAY\n\n  Weekday  \n2 Tuesday";
        assert_eq!(segments(raw), vec!["1 MONDAY", "Weekday", "2 Tuesday"]);
    }
}
