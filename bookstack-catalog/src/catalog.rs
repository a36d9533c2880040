//! Mode-aware owner of the shelves: one unified shelf, or a high/low pair.

use thiserror::Error;

use crate::shelf::{Shelf, ShelfError};
use crate::types::{Book, Mode, Scope};

/// Ratings at or above this go to the high shelf when the catalog splits.
pub const HIGH_RATING_THRESHOLD: f64 = 3.5;

/// Errors reported by [`Catalog`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The operation is not valid in the catalog's current mode.
    #[error("this operation requires a {required} catalog")]
    WrongMode { required: Mode },

    /// A structural operation found nothing to work on.
    #[error("the selected shelf has no books")]
    EmptySource,

    #[error(transparent)]
    Shelf(#[from] ShelfError),
}

/// The two storage layouts a catalog can be in.
///
/// Keeping this as an enum with data means a unified shelf and a split
/// pair can never coexist.
#[derive(Debug)]
enum Shelves {
    Unified(Shelf),
    Split { high: Shelf, low: Shelf },
}

/// Owns the book shelves and guards every operation by mode.
///
/// A catalog starts unified. [`split`](Self::split) reshapes it into a
/// high-rated/low-rated pair and [`merge`](Self::merge) recombines them;
/// adding books is only possible while unified.
#[derive(Debug)]
pub struct Catalog {
    shelves: Shelves,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// An empty, unified catalog.
    pub fn new() -> Self {
        Self {
            shelves: Shelves::Unified(Shelf::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.shelves {
            Shelves::Unified(_) => Mode::Unified,
            Shelves::Split { .. } => Mode::Split,
        }
    }

    pub fn is_split(&self) -> bool {
        self.mode() == Mode::Split
    }

    /// The shelf the given scope resolves to in the current mode.
    ///
    /// A unified catalog resolves every scope to its single shelf. A split
    /// catalog resolves `High` and `Low` to the partitions; `Main` names no
    /// shelf while split and is a mode error.
    pub fn shelf(&self, scope: Scope) -> Result<&Shelf, CatalogError> {
        match (&self.shelves, scope) {
            (Shelves::Unified(shelf), _) => Ok(shelf),
            (Shelves::Split { high, .. }, Scope::High) => Ok(high),
            (Shelves::Split { low, .. }, Scope::Low) => Ok(low),
            (Shelves::Split { .. }, Scope::Main) => Err(CatalogError::WrongMode {
                required: Mode::Unified,
            }),
        }
    }

    fn shelf_mut(&mut self, scope: Scope) -> Result<&mut Shelf, CatalogError> {
        match (&mut self.shelves, scope) {
            (Shelves::Unified(shelf), _) => Ok(shelf),
            (Shelves::Split { high, .. }, Scope::High) => Ok(high),
            (Shelves::Split { low, .. }, Scope::Low) => Ok(low),
            (Shelves::Split { .. }, Scope::Main) => Err(CatalogError::WrongMode {
                required: Mode::Unified,
            }),
        }
    }

    /// Add a book to the main shelf. Only valid while unified.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        isbn: i64,
        rating: f64,
    ) -> Result<&Book, CatalogError> {
        match &mut self.shelves {
            Shelves::Split { .. } => Err(CatalogError::WrongMode {
                required: Mode::Unified,
            }),
            Shelves::Unified(shelf) => Ok(shelf.add(title, author, isbn, rating)?),
        }
    }

    /// Look up a book by ISBN on the selected shelf.
    pub fn find(&self, scope: Scope, isbn: i64) -> Result<Option<&Book>, CatalogError> {
        Ok(self.shelf(scope)?.find(isbn))
    }

    /// Books on the selected shelf, in shelf order.
    pub fn books(&self, scope: Scope) -> Result<&[Book], CatalogError> {
        Ok(self.shelf(scope)?.books())
    }

    pub fn count(&self, scope: Scope) -> Result<usize, CatalogError> {
        Ok(self.shelf(scope)?.len())
    }

    pub fn average_rating(&self, scope: Scope) -> Result<f64, CatalogError> {
        Ok(self.shelf(scope)?.average_rating())
    }

    /// Remove a book by ISBN from the selected shelf.
    pub fn delete_by_isbn(&mut self, scope: Scope, isbn: i64) -> Result<Book, CatalogError> {
        Ok(self.shelf_mut(scope)?.remove_by_isbn(isbn)?)
    }

    /// Remove the most recently added book. Only valid while unified.
    pub fn delete_last_added(&mut self) -> Result<Book, CatalogError> {
        match &mut self.shelves {
            Shelves::Split { .. } => Err(CatalogError::WrongMode {
                required: Mode::Unified,
            }),
            Shelves::Unified(shelf) => Ok(shelf.remove_last_added()?),
        }
    }

    /// Sort the main shelf ascending by rating. Only valid while unified.
    ///
    /// Returns `false` when there were fewer than two books to sort.
    pub fn sort_by_rating(&mut self) -> Result<bool, CatalogError> {
        match &mut self.shelves {
            Shelves::Split { .. } => Err(CatalogError::WrongMode {
                required: Mode::Unified,
            }),
            Shelves::Unified(shelf) => Ok(shelf.sort_by_rating()),
        }
    }

    /// Reshape the unified shelf into high-rated and low-rated partitions.
    ///
    /// Books rated at or above [`HIGH_RATING_THRESHOLD`] go high, the rest
    /// low, each partition keeping the original relative order. The
    /// last-added tracker does not survive the reshape.
    pub fn split(&mut self) -> Result<(), CatalogError> {
        let shelves = match &mut self.shelves {
            Shelves::Split { .. } => {
                return Err(CatalogError::WrongMode {
                    required: Mode::Unified,
                });
            }
            Shelves::Unified(shelf) => {
                if shelf.is_empty() {
                    return Err(CatalogError::EmptySource);
                }
                let mut high = Shelf::new();
                let mut low = Shelf::new();
                for book in shelf.drain() {
                    if book.rating >= HIGH_RATING_THRESHOLD {
                        high.adopt(book);
                    } else {
                        low.adopt(book);
                    }
                }
                Shelves::Split { high, low }
            }
        };
        self.shelves = shelves;
        Ok(())
    }

    /// Recombine the partitions into one shelf, high-rated books first.
    ///
    /// Fails with [`CatalogError::EmptySource`] when both partitions are
    /// empty, and the catalog stays split in that case: a failing
    /// operation never changes state.
    pub fn merge(&mut self) -> Result<(), CatalogError> {
        let shelves = match &mut self.shelves {
            Shelves::Unified(_) => {
                return Err(CatalogError::WrongMode {
                    required: Mode::Split,
                });
            }
            Shelves::Split { high, low } => {
                if high.is_empty() && low.is_empty() {
                    return Err(CatalogError::EmptySource);
                }
                let mut merged = Shelf::new();
                for book in high.drain().chain(low.drain()) {
                    merged.adopt(book);
                }
                Shelves::Unified(merged)
            }
        };
        self.shelves = shelves;
        Ok(())
    }

    /// Empty the selected shelf, reporting how many books were dropped.
    ///
    /// Clearing the second of two split partitions leaves nothing split, so
    /// the catalog reverts to unified in that case.
    pub fn clear(&mut self, scope: Scope) -> Result<usize, CatalogError> {
        let shelf = self.shelf_mut(scope)?;
        if shelf.is_empty() {
            return Err(CatalogError::EmptySource);
        }
        let dropped = shelf.len();
        shelf.clear();
        let both_empty = matches!(
            &self.shelves,
            Shelves::Split { high, low } if high.is_empty() && low.is_empty()
        );
        if both_empty {
            self.shelves = Shelves::Unified(Shelf::new());
        }
        Ok(dropped)
    }
}
