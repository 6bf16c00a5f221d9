//! Catalog integration tests

use book_catalog::{
    Book, BookQuery, BookStatus, Catalog, CatalogError, IdGenerator, IdPolicy, LoadOutcome,
};
use serde_json::{json, Value};

fn tuples(catalog: &Catalog) -> Vec<(String, String, i32, BookStatus)> {
    catalog
        .books()
        .iter()
        .map(|b| (b.title.clone(), b.author.clone(), b.year, b.status))
        .collect()
}

fn shelf() -> Catalog {
    let mut catalog = Catalog::new();
    for (title, author, year) in [
        ("War and Peace", "Leo Tolstoy", 1869),
        ("Мастер и Маргарита", "Михаил Булгаков", 1967),
        ("1984", "George Orwell", 1949),
    ] {
        let book = catalog.new_book(title, author, year);
        assert!(catalog.add(book));
    }
    catalog
}

#[test]
fn test_example_session() {
    let mut catalog = Catalog::new();

    let book = catalog.new_book("1984", "Orwell", 1949);
    assert_eq!(book.id, 1);
    assert!(catalog.add(book));

    let duplicate = catalog.new_book("1984", "Orwell", 1949);
    assert!(!catalog.add(duplicate));
    assert_eq!(catalog.len(), 1);

    assert!(catalog.change_status(1, "checked out"));
    assert_eq!(catalog.get(1).unwrap().status, BookStatus::CheckedOut);

    let found = catalog.find(&BookQuery::new().year(1949));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_books_built_outside_catalog() {
    let mut ids = IdGenerator::new();
    let mut catalog = Catalog::new();
    assert!(catalog.add(Book::new(&mut ids, "Dune", "Frank Herbert", 1965)));
    assert!(catalog.add(Book::new(&mut ids, "Emma", "Jane Austen", 1815)));
    assert_eq!(catalog.books()[1].id, 2);

    // The catalog's own ids continue after the ones it was given
    let book = catalog.new_book("Ulysses", "James Joyce", 1922);
    assert_eq!(book.id, 3);
    assert!(catalog.add(book));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_find_is_case_insensitive_for_cyrillic() {
    let catalog = shelf();
    let found = catalog.find(&BookQuery::new().title("мастер"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].author, "Михаил Булгаков");
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    let mut original = shelf();
    assert!(original.change_status(2, "checked out"));
    original.save(&path).unwrap();

    let mut reloaded = Catalog::new();
    assert_eq!(reloaded.load(&path).unwrap(), LoadOutcome::Loaded(3));
    assert_eq!(tuples(&reloaded), tuples(&original));

    let mut preserved = Catalog::with_policy(IdPolicy::Preserve);
    preserved.load(&path).unwrap();
    assert_eq!(preserved.books(), original.books());
}

#[test]
fn test_saved_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    shelf().save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Мастер и Маргарита"));
    assert!(text.contains("\n    {\n        \"id\": 1,"));

    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value[0],
        json!({
            "id": 1,
            "title": "War and Peace",
            "author": "Leo Tolstoy",
            "year": 1869,
            "status": "available"
        })
    );
}

#[test]
fn test_load_missing_file_empties_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = shelf();
    let outcome = catalog.load(dir.path().join("nowhere.json")).unwrap();
    assert_eq!(outcome, LoadOutcome::Missing);
    assert!(catalog.is_empty());
}

#[test]
fn test_load_malformed_file_keeps_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, "[{\"title\": \"truncated\"").unwrap();

    let mut catalog = shelf();
    let before = tuples(&catalog);
    assert_eq!(catalog.load(&path).unwrap(), LoadOutcome::Malformed);
    assert_eq!(tuples(&catalog), before);
}

#[test]
fn test_load_legacy_status_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let legacy = json!([
        {"id": 1, "title": "Война и мир", "author": "Толстой", "year": 1869, "status": "в наличии"},
        {"id": 2, "title": "Идиот", "author": "Достоевский", "year": 1869, "status": "выдана"}
    ]);
    std::fs::write(&path, serde_json::to_string_pretty(&legacy).unwrap()).unwrap();

    let mut catalog = Catalog::new();
    assert_eq!(catalog.load(&path).unwrap(), LoadOutcome::Loaded(2));
    assert_eq!(catalog.books()[0].status, BookStatus::Available);
    assert_eq!(catalog.books()[1].status, BookStatus::CheckedOut);

    // Written back with the canonical labels
    catalog.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"checked out\""));
    assert!(!text.contains("выдана"));
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("library.json");
    let err = shelf().save(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}
