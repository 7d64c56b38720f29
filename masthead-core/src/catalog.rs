//! The catalog: host-owned store for authors, magazines and articles.
//!
//! A `Catalog` replaces process-wide registries. It holds every entity, the
//! magazine registry (registration order, used by [`Catalog::top_publisher`])
//! and the all-articles registry. Construct one per process or per test;
//! nothing is ever removed from it.
//!
//! All validation for a constructor runs before any list is mutated, so a
//! rejected call leaves the catalog exactly as it was.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::{AuthorAppendPolicy, CatalogConfig};
use crate::error::{CatalogError, Result, ValidationError};
use crate::fields::{AuthorName, Category, MagazineName, Title};
use crate::metrics::{CatalogCounters, CounterSnapshot, bump};
use crate::model::{Article, ArticleMut, Author, AuthorMut, AuthorRef, Magazine, MagazineMut, MagazineRef};
use crate::types::{ArticleId, AuthorId, CatalogStats, MagazineId};

/// In-memory store of the whole author/magazine/article graph.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) config: CatalogConfig,
    pub(crate) authors: HashMap<AuthorId, Author>,
    author_order: Vec<AuthorId>,
    pub(crate) magazines: HashMap<MagazineId, Magazine>,
    magazine_registry: Vec<MagazineId>,
    pub(crate) articles: HashMap<ArticleId, Article>,
    article_registry: Vec<ArticleId>,
    pub(crate) counters: CatalogCounters,
}

impl Catalog {
    /// Create an empty catalog with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given configuration.
    #[must_use]
    pub fn with_config(config: CatalogConfig) -> Self {
        if config.relationships.author_append == AuthorAppendPolicy::Duplicate {
            warn!("Duplicate author append enabled: articles added via AuthorMut::add_article are listed twice on their author");
        }
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this catalog was built with.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Register a new author.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidName`] if `name` is empty.
    pub fn add_author(&mut self, name: impl Into<String>) -> std::result::Result<AuthorId, ValidationError> {
        let name = AuthorName::parse(name).inspect_err(|e| self.counters.record_rejection(e))?;
        let id = AuthorId::new();
        debug!(author = %id, name = %name, "Author created");
        self.authors.insert(id, Author::new(id, name));
        self.author_order.push(id);
        bump(&self.counters.authors_created);
        Ok(id)
    }

    /// Register a new magazine and append it to the magazine registry.
    ///
    /// The name is checked before the category.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidName`] if `name` is not 2 to 16
    /// characters, or [`ValidationError::InvalidCategory`] if `category` is
    /// empty.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> std::result::Result<MagazineId, ValidationError> {
        let (name, category) = MagazineName::parse(name)
            .and_then(|name| Ok((name, Category::parse(category)?)))
            .inspect_err(|e| self.counters.record_rejection(e))?;
        let id = MagazineId::new();
        debug!(magazine = %id, name = %name, category = %category, "Magazine created");
        self.magazines.insert(id, Magazine::new(id, name, category));
        self.magazine_registry.push(id);
        bump(&self.counters.magazines_created);
        Ok(id)
    }

    /// Publish a new article by `author` in `magazine`.
    ///
    /// On success the article is appended, in this order, to the author's
    /// list, the magazine's list, and the all-articles registry.
    ///
    /// # Errors
    /// Checked in order: [`ValidationError::InvalidAuthor`],
    /// [`ValidationError::InvalidMagazine`], [`ValidationError::InvalidTitle`].
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> std::result::Result<ArticleId, ValidationError> {
        let title = self
            .check_article(author, magazine, title)
            .inspect_err(|e| self.counters.record_rejection(e))?;

        let id = ArticleId::new();
        if let Some(entry) = self.authors.get_mut(&author) {
            entry.articles.push(id);
        }
        if let Some(entry) = self.magazines.get_mut(&magazine) {
            entry.articles.push(id);
        }
        debug!(article = %id, author = %author, magazine = %magazine, title = %title, "Article created");
        self.articles.insert(id, Article::new(id, author, magazine, title));
        self.article_registry.push(id);
        bump(&self.counters.articles_created);
        Ok(id)
    }

    fn check_article(
        &self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> std::result::Result<Title, ValidationError> {
        if !self.authors.contains_key(&author) {
            return Err(ValidationError::InvalidAuthor(author));
        }
        if !self.magazines.contains_key(&magazine) {
            return Err(ValidationError::InvalidMagazine(magazine));
        }
        Title::parse(title)
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Read view of an author, if it belongs to this catalog.
    #[must_use]
    pub fn author(&self, id: AuthorId) -> Option<AuthorRef<'_>> {
        self.authors.get(&id).map(|author| AuthorRef::new(self, author))
    }

    /// Read view of a magazine, if it belongs to this catalog.
    #[must_use]
    pub fn magazine(&self, id: MagazineId) -> Option<MagazineRef<'_>> {
        self.magazines.get(&id).map(|magazine| MagazineRef::new(self, magazine))
    }

    /// An article, if it belongs to this catalog.
    #[must_use]
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    /// Mutable handle on an author.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidAuthor`] if `id` is unknown.
    pub fn author_mut(&mut self, id: AuthorId) -> std::result::Result<AuthorMut<'_>, ValidationError> {
        if !self.authors.contains_key(&id) {
            let err = ValidationError::InvalidAuthor(id);
            self.counters.record_rejection(&err);
            return Err(err);
        }
        Ok(AuthorMut::new(self, id))
    }

    /// Mutable handle on a magazine.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidMagazine`] if `id` is unknown.
    pub fn magazine_mut(&mut self, id: MagazineId) -> std::result::Result<MagazineMut<'_>, ValidationError> {
        let Some(magazine) = self.magazines.get_mut(&id) else {
            let err = ValidationError::InvalidMagazine(id);
            self.counters.record_rejection(&err);
            return Err(err);
        };
        Ok(MagazineMut::new(magazine, &self.counters))
    }

    /// Mutable handle on an article.
    ///
    /// # Errors
    /// Returns [`CatalogError::ArticleNotFound`] if `id` is unknown.
    pub fn article_mut(&mut self, id: ArticleId) -> Result<ArticleMut<'_>> {
        let article = self
            .articles
            .get_mut(&id)
            .ok_or(CatalogError::ArticleNotFound(id))?;
        Ok(ArticleMut::new(
            article,
            &mut self.authors,
            &mut self.magazines,
            self.config.relationships.reassign,
            &self.counters,
        ))
    }

    // ------------------------------------------------------------------
    // Registries
    // ------------------------------------------------------------------

    /// All authors, in creation order.
    pub fn authors(&self) -> impl Iterator<Item = AuthorRef<'_>> {
        self.author_order
            .iter()
            .filter_map(|id| self.authors.get(id))
            .map(|author| AuthorRef::new(self, author))
    }

    /// The magazine registry, in registration order.
    pub fn magazines(&self) -> impl Iterator<Item = MagazineRef<'_>> {
        self.magazine_registry
            .iter()
            .filter_map(|id| self.magazines.get(id))
            .map(|magazine| MagazineRef::new(self, magazine))
    }

    /// The all-articles registry, in construction order.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.article_registry.iter().filter_map(|id| self.articles.get(id))
    }

    /// The magazine with the most articles.
    ///
    /// Ties go to the magazine registered first. `None` only when no
    /// magazine has ever been registered.
    #[must_use]
    pub fn top_publisher(&self) -> Option<MagazineRef<'_>> {
        bump(&self.counters.query_scans);
        trace!(magazines = self.magazine_registry.len(), "Scanning for top publisher");
        self.magazine_registry
            .iter()
            .filter_map(|id| self.magazines.get(id))
            .reduce(|best, candidate| {
                if candidate.articles.len() > best.articles.len() {
                    candidate
                } else {
                    best
                }
            })
            .map(|magazine| MagazineRef::new(self, magazine))
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Entity counts.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            authors: self.author_order.len(),
            magazines: self.magazine_registry.len(),
            articles: self.article_registry.len(),
        }
    }

    /// Current counter values.
    #[must_use]
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }
}
