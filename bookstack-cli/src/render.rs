//! Colored terminal output helpers.
//!
//! Outcomes arrive as structured results from the catalog crate; this is
//! the only place that turns them into colored text.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookstack_catalog::Book;

pub(crate) fn success(message: &str) {
    println!("{}", message.if_supports_color(Stdout, |t| t.green()));
}

pub(crate) fn failure(message: &str) {
    println!("{}", message.if_supports_color(Stdout, |t| t.red()));
}

pub(crate) fn warn(message: &str) {
    println!("{}", message.if_supports_color(Stdout, |t| t.yellow()));
}

pub(crate) fn heading(title: &str) {
    println!();
    println!(
        "{}",
        format!("=== {title} ===").if_supports_color(Stdout, |t| t.blue()),
    );
}

/// One numbered entry in a shelf listing.
pub(crate) fn book_line(position: usize, book: &Book) {
    println!(
        "{} {}",
        format!("{position}.").if_supports_color(Stdout, |t| t.bold()),
        book.title.if_supports_color(Stdout, |t| t.bold()),
    );
    println!(
        "   Author: {} | ISBN: {} | Rating: {:.1}",
        book.author, book.isbn, book.rating,
    );
}

/// Full details of a single book, one field per line.
pub(crate) fn book_details(book: &Book) {
    println!("Title: {}", book.title);
    println!("Author: {}", book.author);
    println!("ISBN: {}", book.isbn);
    println!("Rating: {:.1}", book.rating);
}
