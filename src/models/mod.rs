//! Data models for the book catalog

pub mod book;
pub mod enums;

// Re-export commonly used types
pub use book::{Book, BookQuery, IdGenerator, StoredBook, MAX_ID};
pub use enums::{BookStatus, InvalidStatus};
