//! Core type definitions for the catalog.
//!
//! Entities reference each other through these identifiers rather than
//! through pointers, so a relationship can be re-pointed without touching
//! ownership.

use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    /// Create a new random author ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a magazine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagazineId(pub Uuid);

impl MagazineId {
    /// Create a new random magazine ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    /// Create a new random article ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Entity counts for a single catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Authors registered.
    pub authors: usize,
    /// Magazines in the magazine registry.
    pub magazines: usize,
    /// Articles in the all-articles registry.
    pub articles: usize,
}
