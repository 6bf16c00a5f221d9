//! Book catalog
//!
//! An in-memory catalog of book records with search, status tracking and
//! JSON file persistence.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use error::{CatalogError, CatalogResult};
pub use models::{Book, BookQuery, BookStatus, IdGenerator};
pub use repository::CatalogFile;
pub use services::{Catalog, IdPolicy, LoadOutcome};
