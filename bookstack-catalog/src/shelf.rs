//! The ordered book store: append, lookup, deletion, and the rating sort.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::{Book, MAX_TEXT_LEN};

/// Errors reported by [`Shelf`] operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A book with this ISBN is already on the shelf.
    #[error("a book with ISBN {isbn} already exists")]
    DuplicateIsbn { isbn: i64 },

    /// No book with this ISBN.
    #[error("no book with ISBN {isbn}")]
    NotFound { isbn: i64 },

    /// The shelf holds no books at all.
    #[error("the shelf is empty")]
    Empty,

    /// Nothing is recorded as the most recent addition.
    #[error("no record of the last added book")]
    NotTracked,

    /// The tracked book is gone from this shelf.
    #[error("the last added book is no longer on this shelf")]
    TrackedBookMissing,

    /// The underlying storage could not grow.
    #[error("memory allocation failed")]
    Allocation(#[from] TryReserveError),
}

/// An ordered shelf of books.
///
/// Books keep their insertion order until [`sort_by_rating`](Self::sort_by_rating)
/// reorders them. The shelf also remembers the ISBN of the most recently
/// added book so it can be removed again without retyping it; the tracker
/// is forgotten whenever that book leaves the shelf.
#[derive(Debug, Default)]
pub struct Shelf {
    books: Vec<Book>,
    /// ISBN of the most recent addition still on this shelf.
    last_added: Option<i64>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book at the end of the shelf.
    ///
    /// Fails with [`ShelfError::DuplicateIsbn`] if the ISBN is already
    /// present; the shelf is left unchanged in that case. Title and author
    /// are truncated to [`MAX_TEXT_LEN`] characters.
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        isbn: i64,
        rating: f64,
    ) -> Result<&Book, ShelfError> {
        if self.books.iter().any(|b| b.isbn == isbn) {
            return Err(ShelfError::DuplicateIsbn { isbn });
        }
        self.books.try_reserve(1)?;
        self.books.push(Book {
            title: clamp_text(title),
            author: clamp_text(author),
            isbn,
            rating,
        });
        self.last_added = Some(isbn);
        Ok(&self.books[self.books.len() - 1])
    }

    /// First book with the given ISBN, if any.
    pub fn find(&self, isbn: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Remove the first book with the given ISBN.
    ///
    /// Forgets the last-added tracker when it names the removed book, so
    /// the tracker can never point at a book that is gone.
    pub fn remove_by_isbn(&mut self, isbn: i64) -> Result<Book, ShelfError> {
        let pos = self
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .ok_or(ShelfError::NotFound { isbn })?;
        if self.last_added == Some(isbn) {
            self.last_added = None;
        }
        Ok(self.books.remove(pos))
    }

    /// Remove the most recently added book.
    ///
    /// The tracker is single-slot: once it has been consumed (or forgotten
    /// by a reshape) the next call reports [`ShelfError::NotTracked`].
    pub fn remove_last_added(&mut self) -> Result<Book, ShelfError> {
        if self.books.is_empty() {
            return Err(ShelfError::Empty);
        }
        let isbn = self.last_added.ok_or(ShelfError::NotTracked)?;
        self.last_added = None;
        match self.books.iter().position(|b| b.isbn == isbn) {
            Some(pos) => Ok(self.books.remove(pos)),
            None => Err(ShelfError::TrackedBookMissing),
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Mean rating across the shelf; exactly 0.0 when empty.
    pub fn average_rating(&self) -> f64 {
        if self.books.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.books.iter().map(|b| b.rating).sum();
        sum / self.books.len() as f64
    }

    /// Sort the shelf ascending by rating with a stable merge sort.
    ///
    /// Books with equal ratings keep their relative order. Returns `false`
    /// when the shelf has fewer than two books and there is nothing to do.
    /// The last-added tracker survives sorting, since it names a book
    /// rather than a position.
    pub fn sort_by_rating(&mut self) -> bool {
        if self.books.len() < 2 {
            return false;
        }
        let books = std::mem::take(&mut self.books);
        self.books = merge_sort(books);
        true
    }

    /// Books in shelf order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// The most recently added book, when still tracked.
    pub fn last_added(&self) -> Option<&Book> {
        self.last_added.and_then(|isbn| self.find(isbn))
    }

    /// Drop every book and forget the tracker.
    pub fn clear(&mut self) {
        self.books.clear();
        self.last_added = None;
    }

    /// Move every book out of the shelf, oldest first.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Book> {
        self.last_added = None;
        self.books.drain(..)
    }

    /// Take ownership of a book already known to be unique on this shelf.
    pub(crate) fn adopt(&mut self, book: Book) {
        self.books.push(book);
    }
}

fn clamp_text(text: &str) -> String {
    text.chars().take(MAX_TEXT_LEN).collect()
}

// ── Sorting ─────────────────────────────────────────────────────────────────

/// Stable merge sort, ascending by rating.
fn merge_sort(mut books: Vec<Book>) -> Vec<Book> {
    if books.len() < 2 {
        return books;
    }
    let second = books.split_off(books.len() / 2);
    merge_by_rating(merge_sort(books), merge_sort(second))
}

/// Merge two sorted runs; ties go to `first`, which keeps the sort stable.
fn merge_by_rating(first: Vec<Book>, second: Vec<Book>) -> Vec<Book> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut first = first.into_iter().peekable();
    let mut second = second.into_iter().peekable();
    while let (Some(a), Some(b)) = (first.peek(), second.peek()) {
        if a.rating <= b.rating {
            merged.extend(first.next());
        } else {
            merged.extend(second.next());
        }
    }
    merged.extend(first);
    merged.extend(second);
    merged
}
