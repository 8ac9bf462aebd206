// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripture book abbreviations recognized in the Ordo.
//!
//! The table is data: the reading patterns are assembled from it, so a
//! regional Ordo with different abbreviations only needs a different table.

/// A book abbreviation and its canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    /// The abbreviation as printed in the Ordo.
    pub abbreviation: &'static str,
    /// The full book name.
    pub name: &'static str,
}

const fn book(abbreviation: &'static str, name: &'static str) -> Book {
    Book { abbreviation, name }
}

const OLD_TESTAMENT: &[Book] = &[
    book("Gen", "Genesis"),
    book("Ex", "Exodus"),
    book("Lev", "Leviticus"),
    book("Num", "Numbers"),
    book("Deut", "Deuteronomy"),
    book("Josh", "Joshua"),
    book("Judges", "Judges"),
    book("Ruth", "Ruth"),
    book("1 Sam", "1 Samuel"),
    book("2 Sam", "2 Samuel"),
    book("1 Kings", "1 Kings"),
    book("2 Kings", "2 Kings"),
    book("1 Chr", "1 Chronicles"),
    book("2 Chr", "2 Chronicles"),
    book("Ezra", "Ezra"),
    book("Neh", "Nehemiah"),
    book("Tob", "Tobit"),
    book("Jud", "Judith"),
    book("Esth", "Esther"),
    book("1 Macc", "1 Maccabees"),
    book("2 Macc", "2 Maccabees"),
    book("Job", "Job"),
    book("Prov", "Proverbs"),
    book("Eccles", "Ecclesiastes"),
    book("Song", "Song of Songs"),
    book("Wis", "Wisdom"),
    book("Sirach", "Sirach"),
    book("Is", "Isaiah"),
    book("Jer", "Jeremiah"),
    book("Lam", "Lamentations"),
    book("Bar", "Baruch"),
    book("Ezek", "Ezekiel"),
    book("Dan", "Daniel"),
    book("Hos", "Hosea"),
    book("Joel", "Joel"),
    book("Amos", "Amos"),
    book("Obad", "Obadiah"),
    book("Jon", "Jonah"),
    book("Mic", "Micah"),
    book("Nah", "Nahum"),
    book("Hab", "Habakkuk"),
    book("Zeph", "Zephaniah"),
    book("Hag", "Haggai"),
    book("Zech", "Zechariah"),
    book("Mal", "Malachi"),
    // Eastertide first readings come from Acts.
    book("Acts", "Acts of the Apostles"),
];

const NEW_TESTAMENT: &[Book] = &[
    book("Rom", "Romans"),
    book("1 Cor", "1 Corinthians"),
    book("2 Cor", "2 Corinthians"),
    book("Gal", "Galatians"),
    book("Eph", "Ephesians"),
    book("Phil", "Philippians"),
    book("Col", "Colossians"),
    book("1 Thess", "1 Thessalonians"),
    book("2 Thess", "2 Thessalonians"),
    book("1 Tim", "1 Timothy"),
    book("2 Tim", "2 Timothy"),
    book("Titus", "Titus"),
    book("Philemon", "Philemon"),
    book("Heb", "Hebrews"),
    book("James", "James"),
    book("1 Pet", "1 Peter"),
    book("2 Pet", "2 Peter"),
    book("1 Jn", "1 John"),
    book("2 Jn", "2 John"),
    book("3 Jn", "3 John"),
    book("Jude", "Jude"),
    book("Rev", "Revelation"),
];

const GOSPELS: &[Book] = &[
    book("Mt", "Matthew"),
    book("Mk", "Mark"),
    book("Lk", "Luke"),
    book("Jn", "John"),
];

/// The abbreviation sets each reading slot is recognized from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTable {
    first_reading: Vec<Book>,
    second_reading: Vec<Book>,
    gospels: Vec<Book>,
}

impl BookTable {
    /// Creates a table from explicit book lists.
    #[must_use]
    pub const fn new(first_reading: Vec<Book>, second_reading: Vec<Book>, gospels: Vec<Book>) -> Self {
        Self {
            first_reading,
            second_reading,
            gospels,
        }
    }

    /// The abbreviations used by the Australian Ordo.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            OLD_TESTAMENT.to_vec(),
            NEW_TESTAMENT.to_vec(),
            GOSPELS.to_vec(),
        )
    }

    #[must_use]
    pub fn first_reading(&self) -> &[Book] {
        &self.first_reading
    }

    #[must_use]
    pub fn second_reading(&self) -> &[Book] {
        &self.second_reading
    }

    #[must_use]
    pub fn gospels(&self) -> &[Book] {
        &self.gospels
    }

    /// Looks up the full name for an abbreviation in any slot.
    #[must_use]
    pub fn canonical_name(&self, abbreviation: &str) -> Option<&'static str> {
        self.first_reading
            .iter()
            .chain(&self.second_reading)
            .chain(&self.gospels)
            .find(|book| book.abbreviation == abbreviation)
            .map(|book| book.name)
    }
}

impl Default for BookTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builds a regex alternation of the abbreviations, longest first.
#[must_use]
pub fn alternation(books: &[Book]) -> String {
    let mut abbreviations: Vec<&str> = books.iter().map(|book| book.abbreviation).collect();
    abbreviations.sort_by_key(|abbreviation| std::cmp::Reverse(abbreviation.len()));
    abbreviations
        .iter()
        .map(|abbreviation| regex::escape(abbreviation).replace(' ', r"\s"))
        .collect::<Vec<String>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        let table: BookTable = BookTable::standard();
        assert_eq!(table.canonical_name("Is"), Some("Isaiah"));
        assert_eq!(table.canonical_name("1 Jn"), Some("1 John"));
        assert_eq!(table.canonical_name("Lk"), Some("Luke"));
        assert_eq!(table.canonical_name("Ps"), None);
    }

    #[test]
    fn test_alternation_puts_longer_abbreviations_first() {
        let books: Vec<Book> = vec![book("Jud", "Judith"), book("Judges", "Judges")];
        assert_eq!(alternation(&books), r"Judges|Jud");
    }

    #[test]
    fn test_alternation_numbered_books_accept_any_space() {
        let books: Vec<Book> = vec![book("1 Cor", "1 Corinthians")];
        assert_eq!(alternation(&books), r"1\sCor");
    }
}
