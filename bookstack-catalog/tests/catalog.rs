use bookstack_catalog::{Catalog, CatalogError, Mode, Scope, ShelfError};

fn catalog_with(entries: &[(i64, f64)]) -> Catalog {
    let mut catalog = Catalog::new();
    for (i, (isbn, rating)) in entries.iter().enumerate() {
        catalog
            .add_book(&format!("Title {i}"), &format!("Author {i}"), *isbn, *rating)
            .unwrap();
    }
    catalog
}

fn isbns(catalog: &Catalog, scope: Scope) -> Vec<i64> {
    catalog
        .books(scope)
        .unwrap()
        .iter()
        .map(|b| b.isbn)
        .collect()
}

#[test]
fn new_catalog_is_unified_and_empty() {
    let catalog = Catalog::new();
    assert_eq!(catalog.mode(), Mode::Unified);
    assert_eq!(catalog.count(Scope::Main).unwrap(), 0);
}

#[test]
fn unified_scope_resolution_ignores_the_tag() {
    let catalog = catalog_with(&[(1, 4.0), (2, 2.0)]);
    // Every scope names the single shelf while unified.
    assert_eq!(isbns(&catalog, Scope::Main), vec![1, 2]);
    assert_eq!(isbns(&catalog, Scope::High), vec![1, 2]);
    assert_eq!(isbns(&catalog, Scope::Low), vec![1, 2]);
}

#[test]
fn add_is_refused_while_split() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    catalog.split().unwrap();

    let err = catalog.add_book("New", "Author", 2, 2.0).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::WrongMode {
            required: Mode::Unified
        }
    ));
}

#[test]
fn add_duplicate_surfaces_the_shelf_error() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    let err = catalog.add_book("New", "Author", 1, 2.0).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Shelf(ShelfError::DuplicateIsbn { isbn: 1 })
    ));
}

#[test]
fn split_partitions_by_threshold_preserving_order() {
    let mut catalog = catalog_with(&[(1, 4.2), (2, 2.1), (3, 3.5), (4, 1.0), (5, 5.0)]);
    catalog.split().unwrap();

    assert_eq!(catalog.mode(), Mode::Split);
    // 3.5 is inclusive on the high side.
    assert_eq!(isbns(&catalog, Scope::High), vec![1, 3, 5]);
    assert_eq!(isbns(&catalog, Scope::Low), vec![2, 4]);

    for book in catalog.books(Scope::High).unwrap() {
        assert!(book.rating >= 3.5);
    }
    for book in catalog.books(Scope::Low).unwrap() {
        assert!(book.rating < 3.5);
    }
}

#[test]
fn split_requires_books() {
    let mut catalog = Catalog::new();
    let err = catalog.split().unwrap_err();
    assert!(matches!(err, CatalogError::EmptySource));
    assert_eq!(catalog.mode(), Mode::Unified);
}

#[test]
fn split_twice_is_a_mode_error() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    catalog.split().unwrap();

    let err = catalog.split().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::WrongMode {
            required: Mode::Unified
        }
    ));
}

#[test]
fn main_scope_names_no_shelf_while_split() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    catalog.split().unwrap();

    let err = catalog.books(Scope::Main).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::WrongMode {
            required: Mode::Unified
        }
    ));
}

#[test]
fn merge_concatenates_high_then_low() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0), (3, 4.5)]);
    catalog.split().unwrap();
    catalog.merge().unwrap();

    assert_eq!(catalog.mode(), Mode::Unified);
    assert_eq!(isbns(&catalog, Scope::Main), vec![1, 3, 2]);
}

#[test]
fn split_then_merge_preserves_every_book() {
    let mut catalog = catalog_with(&[(1, 4.2), (2, 2.1), (3, 3.5), (4, 1.0)]);
    let mut before: Vec<_> = catalog
        .books(Scope::Main)
        .unwrap()
        .iter()
        .cloned()
        .collect();

    catalog.split().unwrap();
    catalog.merge().unwrap();

    let mut after: Vec<_> = catalog
        .books(Scope::Main)
        .unwrap()
        .iter()
        .cloned()
        .collect();

    // The round trip reorders (high shelf first) but keeps the same set of
    // (title, author, isbn, rating) tuples.
    before.sort_by_key(|b| b.isbn);
    after.sort_by_key(|b| b.isbn);
    assert_eq!(before, after);
}

#[test]
fn single_high_rated_book_round_trip() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    catalog.split().unwrap();
    assert_eq!(isbns(&catalog, Scope::High), vec![1]);
    assert_eq!(catalog.count(Scope::Low).unwrap(), 0);

    catalog.merge().unwrap();
    assert_eq!(isbns(&catalog, Scope::Main), vec![1]);
}

#[test]
fn merge_is_refused_while_unified() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    let err = catalog.merge().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::WrongMode {
            required: Mode::Split
        }
    ));
}

#[test]
fn merge_of_two_empty_partitions_leaves_state_unchanged() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0)]);
    catalog.split().unwrap();

    // Deleting by ISBN can empty both partitions without reverting the mode.
    catalog.delete_by_isbn(Scope::High, 1).unwrap();
    catalog.delete_by_isbn(Scope::Low, 2).unwrap();
    assert_eq!(catalog.mode(), Mode::Split);

    let err = catalog.merge().unwrap_err();
    assert!(matches!(err, CatalogError::EmptySource));
    assert_eq!(catalog.mode(), Mode::Split);
}

#[test]
fn delete_last_added_is_refused_while_split() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    catalog.split().unwrap();

    let err = catalog.delete_last_added().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::WrongMode {
            required: Mode::Unified
        }
    ));
}

#[test]
fn delete_last_added_consumes_the_tracker() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0)]);

    let removed = catalog.delete_last_added().unwrap();
    assert_eq!(removed.isbn, 2);

    let err = catalog.delete_last_added().unwrap_err();
    assert!(matches!(err, CatalogError::Shelf(ShelfError::NotTracked)));
}

#[test]
fn tracker_is_forgotten_by_a_reshape() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0)]);
    catalog.split().unwrap();
    catalog.merge().unwrap();

    let err = catalog.delete_last_added().unwrap_err();
    assert!(matches!(err, CatalogError::Shelf(ShelfError::NotTracked)));
}

#[test]
fn sort_is_refused_while_split() {
    let mut catalog = catalog_with(&[(1, 4.0)]);
    catalog.split().unwrap();

    let err = catalog.sort_by_rating().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::WrongMode {
            required: Mode::Unified
        }
    ));
}

#[test]
fn sort_reorders_the_main_shelf() {
    let mut catalog = catalog_with(&[(111, 4.2), (222, 2.1), (333, 4.2)]);
    assert!(catalog.sort_by_rating().unwrap());
    assert_eq!(isbns(&catalog, Scope::Main), vec![222, 111, 333]);
}

#[test]
fn delete_by_isbn_targets_the_selected_partition() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0), (3, 4.5)]);
    catalog.split().unwrap();

    let removed = catalog.delete_by_isbn(Scope::High, 3).unwrap();
    assert_eq!(removed.isbn, 3);
    assert_eq!(isbns(&catalog, Scope::High), vec![1]);

    // The book is not on the low shelf at all.
    let err = catalog.delete_by_isbn(Scope::Low, 1).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Shelf(ShelfError::NotFound { isbn: 1 })
    ));
}

#[test]
fn find_reports_misses_without_failing() {
    let catalog = catalog_with(&[(1, 4.0)]);
    assert!(catalog.find(Scope::Main, 1).unwrap().is_some());
    assert!(catalog.find(Scope::Main, 9).unwrap().is_none());
}

#[test]
fn average_is_per_shelf_while_split() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0), (3, 5.0)]);
    catalog.split().unwrap();

    assert!((catalog.average_rating(Scope::High).unwrap() - 4.5).abs() < 1e-9);
    assert!((catalog.average_rating(Scope::Low).unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn clear_empties_the_selected_shelf() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0)]);
    assert_eq!(catalog.clear(Scope::Main).unwrap(), 2);
    assert_eq!(catalog.count(Scope::Main).unwrap(), 0);

    let err = catalog.clear(Scope::Main).unwrap_err();
    assert!(matches!(err, CatalogError::EmptySource));
}

#[test]
fn clearing_both_partitions_reverts_to_unified() {
    let mut catalog = catalog_with(&[(1, 4.0), (2, 2.0)]);
    catalog.split().unwrap();

    catalog.clear(Scope::High).unwrap();
    assert_eq!(catalog.mode(), Mode::Split);

    catalog.clear(Scope::Low).unwrap();
    assert_eq!(catalog.mode(), Mode::Unified);

    // Adding works again once unified.
    catalog.add_book("Fresh", "Start", 9, 3.0).unwrap();
    assert_eq!(catalog.count(Scope::Main).unwrap(), 1);
}
