//! The interactive catalog session: menu loop and command handlers.
//!
//! Each menu selection runs exactly one catalog operation to completion
//! before control returns to the menu. Domain failures are rendered and
//! the loop continues; only terminal I/O problems end the session.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookstack_catalog::{Catalog, CatalogError, Scope};

use crate::error::CliError;
use crate::prompt::{self, ReshapeChoice};
use crate::render;

pub(crate) fn run(catalog: &mut Catalog) -> Result<(), CliError> {
    render::success("Book catalog ready.");

    loop {
        print_menu();
        match prompt::integer("Enter your choice: ")? {
            1 => add_books(catalog)?,
            2 => list_books(catalog)?,
            3 => find_book(catalog)?,
            4 => delete_last_added(catalog),
            5 => delete_by_isbn(catalog)?,
            6 => reshape(catalog)?,
            7 => count_books(catalog)?,
            8 => sort_books(catalog),
            9 => average_rating(catalog)?,
            10 => clear_shelf(catalog)?,
            11 => {
                render::warn("Goodbye.");
                return Ok(());
            }
            _ => render::failure("Invalid choice. Try again."),
        }
    }
}

fn print_menu() {
    let rule = "==================================";
    println!();
    println!("{}", rule.if_supports_color(Stdout, |t| t.bold()));
    println!(
        "{}",
        "          BOOK CATALOG            ".if_supports_color(Stdout, |t| t.bold()),
    );
    println!("{}", rule.if_supports_color(Stdout, |t| t.bold()));
    println!(" 1. Add books");
    println!(" 2. List books");
    println!(" 3. Find book by ISBN");
    println!(" 4. Delete last added book");
    println!(" 5. Delete book by ISBN");
    println!(" 6. Split or merge the catalog");
    println!(" 7. Count books");
    println!(" 8. Sort books by rating");
    println!(" 9. Average rating");
    println!("10. Clear a shelf");
    println!("11. Exit");
    println!("{}", rule.if_supports_color(Stdout, |t| t.bold()));
}

/// The scope the current mode implies, asking for a/b while split.
fn select_scope(catalog: &Catalog) -> Result<Scope, CliError> {
    if catalog.is_split() {
        prompt::scope_choice()
    } else {
        Ok(Scope::Main)
    }
}

fn shelf_title(scope: Scope) -> &'static str {
    match scope {
        Scope::Main => "All Books",
        Scope::High => "High-Rated Books",
        Scope::Low => "Low-Rated Books",
    }
}

fn add_books(catalog: &mut Catalog) -> Result<(), CliError> {
    if catalog.is_split() {
        render::failure("Cannot add books while the catalog is split. Merge first.");
        return Ok(());
    }

    let total = prompt::positive_integer("Number of books to add: ")?;
    let mut added = 0;
    while added < total {
        println!();
        println!(
            "{}",
            format!("--- Book {} of {total} ---", added + 1)
                .if_supports_color(Stdout, |t| t.bold()),
        );
        let title = prompt::text("Title: ")?;
        let author = prompt::text("Author: ")?;
        let isbn = prompt::integer("ISBN: ")?;
        let rating = prompt::rating("Rating (0.0-5.0): ")?;

        match catalog.add_book(&title, &author, isbn, rating) {
            Ok(book) => {
                log::debug!("added ISBN {}", book.isbn);
                render::success("Book added.");
                added += 1;
            }
            Err(err) => {
                render::failure(&err.to_string());
                render::warn("Retrying this book...");
            }
        }
    }
    Ok(())
}

fn list_books(catalog: &Catalog) -> Result<(), CliError> {
    let scope = select_scope(catalog)?;
    match catalog.books(scope) {
        Ok([]) => render::failure(&format!("No books on the {scope} shelf.")),
        Ok(books) => {
            render::heading(shelf_title(scope));
            for (i, book) in books.iter().enumerate() {
                render::book_line(i + 1, book);
            }
        }
        Err(err) => render::failure(&err.to_string()),
    }
    Ok(())
}

fn find_book(catalog: &Catalog) -> Result<(), CliError> {
    let scope = select_scope(catalog)?;
    let isbn = prompt::integer("Enter ISBN to search: ")?;
    match catalog.find(scope, isbn) {
        Ok(Some(book)) => {
            render::success("Book found.");
            render::book_details(book);
        }
        Ok(None) => render::failure(&format!("Book with ISBN {isbn} not found.")),
        Err(err) => render::failure(&err.to_string()),
    }
    Ok(())
}

fn delete_last_added(catalog: &mut Catalog) {
    match catalog.delete_last_added() {
        Ok(book) => render::success(&format!(
            "Deleted last added book: '{}' by {}",
            book.title, book.author,
        )),
        Err(CatalogError::WrongMode { .. }) => render::failure(
            "Cannot delete the last added book while the catalog is split. Delete by ISBN instead.",
        ),
        Err(err) => render::failure(&err.to_string()),
    }
}

fn delete_by_isbn(catalog: &mut Catalog) -> Result<(), CliError> {
    let isbn = prompt::integer("Enter ISBN to delete: ")?;
    let scope = select_scope(catalog)?;
    match catalog.delete_by_isbn(scope, isbn) {
        Ok(book) => {
            log::debug!("deleted ISBN {} from the {} shelf", book.isbn, scope);
            render::success(&format!("Deleted '{}' (ISBN {}).", book.title, book.isbn));
        }
        Err(err) => render::failure(&err.to_string()),
    }
    Ok(())
}

fn reshape(catalog: &mut Catalog) -> Result<(), CliError> {
    match prompt::reshape_choice()? {
        ReshapeChoice::Split => match catalog.split() {
            Ok(()) => render::success(
                "Catalog split into high-rated (3.5 and up) and low-rated shelves.",
            ),
            Err(CatalogError::WrongMode { .. }) => {
                render::warn("Catalog is already split. Merge first.")
            }
            Err(CatalogError::EmptySource) => {
                render::failure("Cannot split: the catalog is empty.")
            }
            Err(err) => render::failure(&err.to_string()),
        },
        ReshapeChoice::Merge => match catalog.merge() {
            Ok(()) => render::success("Catalog merged back into one shelf."),
            Err(CatalogError::WrongMode { .. }) => render::failure("Catalog is not split."),
            Err(CatalogError::EmptySource) => {
                render::failure("Both split shelves are empty; nothing to merge.")
            }
            Err(err) => render::failure(&err.to_string()),
        },
    }
    Ok(())
}

fn count_books(catalog: &Catalog) -> Result<(), CliError> {
    let scope = select_scope(catalog)?;
    match catalog.count(scope) {
        Ok(count) => {
            let label = match scope {
                Scope::Main => "total",
                _ => scope.as_str(),
            };
            println!(
                "{}",
                format!("Number of {label} books: {count}")
                    .if_supports_color(Stdout, |t| t.bold()),
            );
        }
        Err(err) => render::failure(&err.to_string()),
    }
    Ok(())
}

fn sort_books(catalog: &mut Catalog) {
    match catalog.sort_by_rating() {
        Ok(true) => render::success("Books sorted by rating."),
        Ok(false) => render::warn("Fewer than two books; nothing to sort."),
        Err(CatalogError::WrongMode { .. }) => {
            render::warn("Split shelves are already organized by rating.")
        }
        Err(err) => render::failure(&err.to_string()),
    }
}

fn average_rating(catalog: &Catalog) -> Result<(), CliError> {
    let scope = select_scope(catalog)?;
    let shelf = match catalog.shelf(scope) {
        Ok(shelf) => shelf,
        Err(err) => {
            render::failure(&err.to_string());
            return Ok(());
        }
    };

    // An empty shelf is reported as such, never as an average of 0.00.
    if shelf.is_empty() {
        render::failure("No books on the selected shelf.");
        return Ok(());
    }

    let average = shelf.average_rating();
    println!(
        "{}",
        format!("Average rating: {average:.2}").if_supports_color(Stdout, |t| t.bold()),
    );
    if average >= 4.0 {
        render::success("Excellent collection!");
    } else if average >= 3.0 {
        render::warn("Good collection.");
    } else {
        println!(
            "{}",
            "Collection needs improvement.".if_supports_color(Stdout, |t| t.bold()),
        );
    }
    Ok(())
}

fn clear_shelf(catalog: &mut Catalog) -> Result<(), CliError> {
    let scope = select_scope(catalog)?;
    match catalog.clear(scope) {
        Ok(dropped) => {
            render::success(&format!("Cleared {dropped} book(s) from the {scope} shelf."));
            if scope != Scope::Main && !catalog.is_split() {
                render::warn("Both shelves are now empty; the catalog is unified again.");
            }
        }
        Err(CatalogError::EmptySource) => render::failure("Selected shelf is already empty."),
        Err(err) => render::failure(&err.to_string()),
    }
    Ok(())
}
