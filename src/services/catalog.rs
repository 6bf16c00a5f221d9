//! Catalog management service

use std::io::{self, Write};
use std::path::Path;

use serde::Deserialize;

use crate::{
    error::CatalogResult,
    models::{Book, BookQuery, BookStatus, IdGenerator, MAX_ID},
    repository::{CatalogFile, FileContents},
};

/// How identifiers stored in a catalog file are treated on load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Give every loaded book a fresh identifier from the catalog's generator
    #[default]
    Reassign,
    /// Keep stored identifiers and move the generator past the largest one
    Preserve,
}

/// Result of [`Catalog::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog now holds this many books from the file
    Loaded(usize),
    /// The file does not exist; the catalog is now empty
    Missing,
    /// The file could not be parsed; the catalog is unchanged
    Malformed,
}

/// Ordered, in-memory collection of books.
///
/// No two books share an identifier or the same (title, author, year).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    ids: IdGenerator,
    id_policy: IdPolicy,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Self::default()
        }
    }

    /// Create an available book with the next identifier. The book is not added.
    pub fn new_book(&mut self, title: impl Into<String>, author: impl Into<String>, year: i32) -> Book {
        Book::new(&mut self.ids, title, author, year)
    }

    /// Identifier the next new book will receive
    pub fn next_id(&self) -> u32 {
        self.ids.peek()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book unless it duplicates an existing one
    pub fn add(&mut self, book: Book) -> bool {
        if let Err(reason) = check_insert(&self.books, &book) {
            tracing::warn!("Book not added: {}", reason);
            return false;
        }

        tracing::info!("Added book id={}: {}", book.id, book.title);
        self.ids.advance_past(book.id);
        self.books.push(book);
        true
    }

    /// Remove the book with this identifier
    pub fn remove(&mut self, id: u32) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(index) => {
                self.books.remove(index);
                tracing::info!("Book with id {} removed", id);
                true
            }
            None => {
                tracing::warn!("Book with id {} not found", id);
                false
            }
        }
    }

    /// Books matching every filter set in `query`, in catalog order
    pub fn find(&self, query: &BookQuery) -> Vec<&Book> {
        let found: Vec<&Book> = self.books.iter().filter(|b| query.matches(b)).collect();
        if found.is_empty() {
            tracing::warn!("No books match {:?}", query);
        }
        found
    }

    /// Print the listing to standard output
    pub fn display(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_listing(&mut out) {
            tracing::warn!("Could not print the catalog: {}", e);
        }
    }

    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.books.is_empty() {
            return writeln!(out, "The catalog has no books yet.");
        }

        writeln!(out, "Books:")?;
        writeln!(out, "{}", "-".repeat(40))?;
        for book in &self.books {
            writeln!(out, "{}", book)?;
        }
        Ok(())
    }

    /// Change a book's status from its label ("available" or "checked out")
    pub fn change_status(&mut self, id: u32, new_status: &str) -> bool {
        match new_status.parse::<BookStatus>() {
            Ok(status) => self.set_status(id, status),
            Err(e) => {
                tracing::warn!("Status of book {} not changed: {}", id, e);
                false
            }
        }
    }

    pub fn set_status(&mut self, id: u32, status: BookStatus) -> bool {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.status = status;
                tracing::info!("Status of book with id {} changed to \"{}\"", id, status);
                true
            }
            None => {
                tracing::warn!("Book with id {} not found", id);
                false
            }
        }
    }

    /// Write every book to `path`, replacing the file
    pub fn save(&self, path: impl AsRef<Path>) -> CatalogResult<()> {
        let file = CatalogFile::new(path.as_ref());
        file.write(&self.books)?;
        tracing::info!("Saved {} books to {}", self.books.len(), file.path().display());
        Ok(())
    }

    /// Replace the catalog's contents with the books stored at `path`.
    ///
    /// A missing file empties the catalog and a malformed one leaves it as
    /// it was; neither is an error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> CatalogResult<LoadOutcome> {
        let file = CatalogFile::new(path.as_ref());
        let stored = match file.read()? {
            FileContents::Books(books) => books,
            FileContents::Missing => {
                tracing::warn!("Catalog file {} not found, catalog will be empty", file.path().display());
                self.books.clear();
                return Ok(LoadOutcome::Missing);
            }
            FileContents::Malformed(e) => {
                tracing::warn!("Could not read catalog file {}: {}", file.path().display(), e);
                return Ok(LoadOutcome::Malformed);
            }
        };

        let mut books = Vec::with_capacity(stored.len());
        let mut max_id = None;
        for entry in stored {
            let book = match self.id_policy {
                IdPolicy::Reassign => entry.into_book(&mut self.ids),
                IdPolicy::Preserve => match entry.valid_id() {
                    Some(id) => entry.into_book_with_id(id),
                    None => {
                        tracing::warn!(
                            "Skipping stored book {:?}: id {:?} is not between 1 and {}",
                            entry.title, entry.id, MAX_ID
                        );
                        continue;
                    }
                },
            };
            if let Err(reason) = check_insert(&books, &book) {
                tracing::warn!("Skipping stored book id={}: {}", book.id, reason);
                continue;
            }
            max_id = max_id.max(Some(book.id));
            books.push(book);
        }

        if self.id_policy == IdPolicy::Preserve {
            if let Some(max) = max_id {
                self.ids.advance_past(max);
            }
        }

        tracing::info!("Loaded {} books from {}", books.len(), file.path().display());
        self.books = books;
        Ok(LoadOutcome::Loaded(self.books.len()))
    }
}

fn check_insert(books: &[Book], book: &Book) -> Result<(), String> {
    if book.id == 0 || book.id > MAX_ID {
        return Err(format!("id {} is not between 1 and {}", book.id, MAX_ID));
    }
    if books.iter().any(|b| b.same_edition(book)) {
        return Err(format!(
            "a book with title {:?}, author {:?} and year {} already exists",
            book.title, book.author, book.year
        ));
    }
    if books.iter().any(|b| b.id == book.id) {
        return Err(format!("a book with id {} already exists", book.id));
    }
    Ok(())
}
