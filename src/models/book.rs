//! Book (catalog record) model and related types

use serde::{Deserialize, Serialize};

use super::enums::BookStatus;

/// Largest identifier a catalog accepts.
pub const MAX_ID: u32 = u32::MAX - 1;

/// Source of book identifiers.
///
/// Hands out 1, 2, 3, ... and never goes backwards, so an identifier is
/// never reused after the book holding it is removed. Once past [`MAX_ID`]
/// the generator is exhausted and keeps returning `u32::MAX`, which no
/// catalog accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next identifier
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Identifier the next call to `next_id` will return
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Make sure every identifier handed out from now on is greater than `id`.
    ///
    /// Returns false, leaving the generator untouched, when `id` is above [`MAX_ID`].
    pub fn advance_past(&mut self, id: u32) -> bool {
        if id > MAX_ID {
            return false;
        }
        match id.checked_add(1) {
            Some(next) => {
                if self.next < next {
                    self.next = next;
                }
                true
            }
            None => false,
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Book record. Field order is the order fields are written to catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

/// A book as read back from a catalog file.
///
/// The stored id is kept loose (absent, negative or too large are all
/// accepted here) and only checked when the catalog keeps stored ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredBook {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub status: BookStatus,
}

impl StoredBook {
    /// Stored id, if it is a valid catalog identifier
    pub fn valid_id(&self) -> Option<u32> {
        self.id
            .and_then(|id| u32::try_from(id).ok())
            .filter(|id| (1..=MAX_ID).contains(id))
    }

    /// Rebuild the book with a fresh identifier from `ids`
    pub fn into_book(self, ids: &mut IdGenerator) -> Book {
        Book::with_status(ids, self.title, self.author, self.year, self.status)
    }

    /// Rebuild the book keeping its stored identifier
    pub fn into_book_with_id(self, id: u32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            status: self.status,
        }
    }
}

impl Book {
    /// Create an available book, taking its identifier from `ids`
    pub fn new(
        ids: &mut IdGenerator,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self::with_status(ids, title, author, year, BookStatus::default())
    }

    pub fn with_status(
        ids: &mut IdGenerator,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: BookStatus,
    ) -> Self {
        Self {
            id: ids.next_id(),
            title: title.into(),
            author: author.into(),
            year,
            status,
        }
    }

    /// True when both books describe the same edition (title, author, year)
    pub fn same_edition(&self, other: &Book) -> bool {
        self.title == other.title && self.author == other.author && self.year == other.year
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Author: {} | Year: {} | Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Search filters. Unset fields match every book; set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the author
    pub author: Option<String>,
    /// Exact publication year
    pub year: Option<i32>,
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn matches(&self, book: &Book) -> bool {
        contains_ignore_case(&book.title, self.title.as_deref())
            && contains_ignore_case(&book.author, self.author.as_deref())
            && self.year.map_or(true, |year| year == book.year)
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut ids = IdGenerator::new();
        let first = Book::new(&mut ids, "1984", "Orwell", 1949);
        let second = Book::new(&mut ids, "Dune", "Herbert", 1965);
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, BookStatus::Available);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_advance_past() {
        let mut ids = IdGenerator::new();
        assert!(ids.advance_past(7));
        assert_eq!(ids.next_id(), 8);
        // Never moves backwards
        assert!(ids.advance_past(3));
        assert_eq!(ids.next_id(), 9);
    }

    #[test]
    fn test_generator_exhaustion() {
        let mut ids = IdGenerator::new();
        assert!(!ids.advance_past(u32::MAX));
        assert_eq!(ids.peek(), 1);

        assert!(ids.advance_past(MAX_ID));
        assert_eq!(ids.next_id(), u32::MAX);
        assert_eq!(ids.next_id(), u32::MAX);
    }

    #[test]
    fn test_stored_id_validation() {
        let stored = |id: Option<i64>| StoredBook {
            id,
            title: "1984".to_string(),
            author: "Orwell".to_string(),
            year: 1949,
            status: BookStatus::Available,
        };
        assert_eq!(stored(Some(5)).valid_id(), Some(5));
        assert_eq!(stored(Some(MAX_ID as i64)).valid_id(), Some(MAX_ID));
        assert_eq!(stored(None).valid_id(), None);
        assert_eq!(stored(Some(0)).valid_id(), None);
        assert_eq!(stored(Some(-1)).valid_id(), None);
        assert_eq!(stored(Some(u32::MAX as i64)).valid_id(), None);
    }

    #[test]
    fn test_display() {
        let mut ids = IdGenerator::new();
        let book = Book::with_status(&mut ids, "1984", "Orwell", 1949, BookStatus::CheckedOut);
        assert_eq!(
            book.to_string(),
            "ID: 1 | Title: 1984 | Author: Orwell | Year: 1949 | Status: checked out"
        );
    }

    #[test]
    fn test_query_matches() {
        let mut ids = IdGenerator::new();
        let book = Book::new(&mut ids, "War and Peace", "Tolstoy", 1869);

        assert!(BookQuery::new().matches(&book));
        assert!(BookQuery::new().title("war").matches(&book));
        assert!(BookQuery::new().title("PEACE").author("tol").matches(&book));
        assert!(BookQuery::new().year(1869).matches(&book));
        assert!(!BookQuery::new().title("war").year(1870).matches(&book));
        assert!(!BookQuery::new().author("Dostoevsky").matches(&book));
    }
}
