//! Data model types for the book catalog.

use serde::{Deserialize, Serialize};

/// Longest title or author the catalog keeps; longer input is truncated.
pub const MAX_TEXT_LEN: usize = 100;

// ── Book ────────────────────────────────────────────────────────────────────

/// A single catalogued book.
///
/// Books are created through [`Shelf::add`](crate::Shelf::add) and never
/// mutated in place afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Unique within any one shelf.
    pub isbn: i64,
    /// 0.0-5.0, validated at the input boundary.
    pub rating: f64,
}

// ── Catalog mode ────────────────────────────────────────────────────────────

/// Whether the catalog currently holds one shelf or a high/low pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Unified,
    Split,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unified => "unified",
            Self::Split => "split",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Shelf scope ─────────────────────────────────────────────────────────────

/// Selects which shelf an operation targets.
///
/// While the catalog is unified every scope resolves to the single main
/// shelf; while it is split, `High` and `Low` name the two partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Main,
    High,
    Low,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::High => "high-rated",
            Self::Low => "low-rated",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
