//! Error types for the masthead core library.

use thiserror::Error;

use crate::types::{ArticleId, AuthorId, MagazineId};

/// A field or reference failed validation.
///
/// Raised synchronously by constructors and setters. The offending operation
/// is aborted before any relationship list is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty, or a magazine name is outside its length bounds.
    #[error("Invalid name: must be {expected} (got {len} characters)")]
    InvalidName {
        /// Length of the rejected value, in characters.
        len: usize,
        /// Human-readable form of the accepted range.
        expected: &'static str,
    },

    /// Magazine category is empty.
    #[error("Invalid category: must be a non-empty string")]
    InvalidCategory,

    /// Article title is outside its length bounds.
    #[error("Invalid title: must be between 5 and 50 characters (got {len})")]
    InvalidTitle {
        /// Length of the rejected title, in characters.
        len: usize,
    },

    /// The id does not name an author held by this catalog.
    #[error("Invalid author: {0} is not registered in this catalog")]
    InvalidAuthor(AuthorId),

    /// The id does not name a magazine held by this catalog.
    #[error("Invalid magazine: {0} is not registered in this catalog")]
    InvalidMagazine(MagazineId),
}

/// Top-level error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A constructor or setter rejected its input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An article with the given ID was not found.
    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CatalogError>;
