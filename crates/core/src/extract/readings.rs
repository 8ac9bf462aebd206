// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::extract::books::{BookTable, alternation};
use crate::patterns::compile;
use lectio_domain::{Readings, ScriptureReference};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PSALM: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\bPs\s+(\d+)(?:\s*[:.]\s*(\d[\d,\-–]*(?:\s*[,\-–]\s*\d[\d,\-–]*)*))?")
});

static DASH: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*[–—-]\s*"));
static COMMA: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*,\s*"));
static COLON: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*:\s*"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Citation patterns for each reading slot.
///
/// A first reading, second reading or gospel is only recognized when it is
/// followed by a title, as in "Mt 8:5-11: The centurion's faith". Bare
/// cross-references such as "(cf. Lk 3:4, 6)" never qualify.
#[derive(Debug, Clone)]
pub struct ReadingPatterns {
    first_reading: Regex,
    second_reading: Regex,
    gospel: Regex,
}

impl ReadingPatterns {
    /// Builds the patterns from a book table.
    ///
    /// # Errors
    ///
    /// Returns an error if an abbreviation produces an invalid pattern.
    pub fn new(books: &BookTable) -> Result<Self, CoreError> {
        Ok(Self {
            first_reading: titled_citation(&alternation(books.first_reading()))?,
            second_reading: titled_citation(&alternation(books.second_reading()))?,
            gospel: titled_citation(&alternation(books.gospels()))?,
        })
    }

    /// Extracts the first citation of each slot from a day's text window.
    #[must_use]
    pub fn extract(&self, window: &str) -> Readings {
        Readings {
            first_reading: first_titled(&self.first_reading, window, false),
            psalm: psalm(window),
            second_reading: first_titled(&self.second_reading, window, false),
            gospel: first_titled(&self.gospel, window, true),
        }
    }
}

fn titled_citation(books: &str) -> Result<Regex, CoreError> {
    let pattern: String = format!(r"\b({books})\s+(\d+)\s*:\s*([0-9,:–\-\s]+?)\s*:\s+[A-Z]");
    Regex::new(&pattern).map_err(|e| CoreError::InvalidPattern(e.to_string()))
}

fn first_titled(pattern: &Regex, window: &str, reject_numbered: bool) -> Option<ScriptureReference> {
    pattern
        .captures_iter(window)
        .filter(|captures| {
            // "1 Jn 4:7" is an epistle, not the gospel of John.
            !reject_numbered
                || captures
                    .get(1)
                    .is_none_or(|book| !preceded_by_book_number(window, book.start()))
        })
        .find_map(|captures| reference_from(&captures))
}

fn reference_from(captures: &Captures<'_>) -> Option<ScriptureReference> {
    let book: String = WHITESPACE.replace_all(captures.get(1)?.as_str(), " ").into_owned();
    let chapter: u16 = captures.get(2)?.as_str().parse().ok()?;
    let verses: String = normalize_verses(captures.get(3)?.as_str());
    Some(ScriptureReference::new(book, chapter, verses))
}

fn preceded_by_book_number(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    matches!(
        (before.next(), before.next()),
        (Some(space), Some('1' | '2' | '3')) if space.is_whitespace()
    )
}

fn psalm(window: &str) -> Option<ScriptureReference> {
    let captures: Captures<'_> = PSALM.captures(window)?;
    let chapter: u16 = captures.get(1)?.as_str().parse().ok()?;
    let verses: String = captures.get(2).map_or_else(String::new, |m| {
        m.as_str()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '–' { '-' } else { c })
            .collect::<String>()
            .trim_end_matches([',', '-'])
            .to_string()
    });
    Some(ScriptureReference::new("Ps", chapter, verses))
}

/// Normalizes the separators in a verse list: dashes become "-",
/// and the spaces around "-", "," and ":" are removed.
#[must_use]
pub fn normalize_verses(verses: &str) -> String {
    let mut text: String = DASH.replace_all(verses.trim(), "-").into_owned();
    text = COMMA.replace_all(&text, ",").into_owned();
    text = COLON.replace_all(&text, ":").into_owned();
    WHITESPACE.replace_all(&text, " ").into_owned()
}
