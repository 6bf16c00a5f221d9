//! Persistence layer: the JSON catalog file

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    error::{CatalogError, CatalogResult},
    models::{Book, StoredBook},
};

/// What was found when reading a catalog file
#[derive(Debug)]
pub enum FileContents {
    /// No file at the path
    Missing,
    /// The file exists but is not a JSON array of books
    Malformed(serde_json::Error),
    Books(Vec<StoredBook>),
}

/// A catalog file: a pretty-printed UTF-8 JSON array of book objects.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every book stored in the file.
    ///
    /// A missing file and malformed content are reported through
    /// [`FileContents`]; any other I/O failure is an error.
    pub fn read(&self) -> CatalogResult<FileContents> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FileContents::Missing),
            Err(e) => return Err(CatalogError::io(&self.path, e)),
        };

        match serde_json::from_slice::<Vec<StoredBook>>(&bytes) {
            Ok(books) => Ok(FileContents::Books(books)),
            Err(e) => Ok(FileContents::Malformed(e)),
        }
    }

    /// Overwrite the file with `books`, in order, indented by four spaces
    pub fn write(&self, books: &[Book]) -> CatalogResult<()> {
        let file = File::create(&self.path).map_err(|e| CatalogError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        books.serialize(&mut serializer).map_err(|e| {
            if e.is_io() {
                CatalogError::io(&self.path, e.into())
            } else {
                CatalogError::Serialization(e)
            }
        })?;

        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| CatalogError::io(&self.path, e))
    }
}
