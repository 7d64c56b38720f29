//! Author: writes articles, derives magazines and topic areas from them.

use std::collections::HashSet;
use std::ops::Deref;

use tracing::trace;

use crate::catalog::Catalog;
use crate::config::AuthorAppendPolicy;
use crate::error::ValidationError;
use crate::fields::{AuthorName, Category};
use crate::metrics::bump;
use crate::model::article::Article;
use crate::types::{ArticleId, AuthorId, MagazineId};

/// A writer of articles.
///
/// The name is fixed at construction. The article list only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub(crate) id: AuthorId,
    pub(crate) name: AuthorName,
    pub(crate) articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: AuthorName) -> Self {
        Self {
            id,
            name,
            articles: Vec::new(),
        }
    }

    /// This author's identifier.
    #[must_use]
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// The author's name.
    #[must_use]
    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    /// Authored articles, in the order they were recorded.
    #[must_use]
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }
}

/// Read view of an author that can follow its relationships.
#[derive(Debug, Clone, Copy)]
pub struct AuthorRef<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorRef<'a> {
    pub(crate) fn new(catalog: &'a Catalog, author: &'a Author) -> Self {
        Self { catalog, author }
    }

    /// The underlying record, borrowed for the catalog's lifetime.
    #[must_use]
    pub fn author(self) -> &'a Author {
        self.author
    }

    /// This author's identifier.
    #[must_use]
    pub fn id(self) -> AuthorId {
        self.author.id
    }

    /// The author's name, borrowed from the catalog.
    #[must_use]
    pub fn name(self) -> &'a AuthorName {
        &self.author.name
    }

    /// Authored article ids, in the order they were recorded.
    #[must_use]
    pub fn articles(self) -> &'a [ArticleId] {
        &self.author.articles
    }

    /// Authored articles resolved against the catalog.
    pub fn iter_articles(self) -> impl Iterator<Item = &'a Article> {
        let catalog = self.catalog;
        self.author
            .articles
            .iter()
            .filter_map(move |id| catalog.articles.get(id))
    }

    /// Distinct magazines this author has written for. Empty when the author
    /// has no articles.
    #[must_use]
    pub fn magazines(self) -> HashSet<MagazineId> {
        bump(&self.catalog.counters.query_scans);
        trace!(author = %self.author.id, articles = self.author.articles.len(), "Scanning magazines");
        self.iter_articles().map(Article::magazine).collect()
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// `None` when the author has no articles.
    #[must_use]
    pub fn topic_areas(self) -> Option<HashSet<&'a Category>> {
        bump(&self.catalog.counters.query_scans);
        trace!(author = %self.author.id, articles = self.author.articles.len(), "Scanning topic areas");
        if self.author.articles.is_empty() {
            return None;
        }
        let catalog = self.catalog;
        Some(
            self.iter_articles()
                .filter_map(|article| catalog.magazines.get(&article.magazine()))
                .map(|magazine| magazine.category())
                .collect(),
        )
    }
}

impl Deref for AuthorRef<'_> {
    type Target = Author;

    fn deref(&self) -> &Author {
        self.author
    }
}

/// Mutable handle on an author held by a catalog.
#[derive(Debug)]
pub struct AuthorMut<'a> {
    catalog: &'a mut Catalog,
    id: AuthorId,
}

impl<'a> AuthorMut<'a> {
    pub(crate) fn new(catalog: &'a mut Catalog, id: AuthorId) -> Self {
        Self { catalog, id }
    }

    /// The author this handle edits.
    #[must_use]
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Write a new article for `magazine`.
    ///
    /// Runs the same validation and registration as
    /// [`Catalog::add_article`]. Under [`AuthorAppendPolicy::Duplicate`] the
    /// article is appended to this author's list a second time.
    ///
    /// # Errors
    /// Propagates [`ValidationError::InvalidMagazine`] and
    /// [`ValidationError::InvalidTitle`] from article construction.
    pub fn add_article(
        &mut self,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError> {
        let article = self.catalog.add_article(self.id, magazine, title)?;
        if self.catalog.config.relationships.author_append == AuthorAppendPolicy::Duplicate {
            if let Some(author) = self.catalog.authors.get_mut(&self.id) {
                author.articles.push(article);
            }
        }
        Ok(article)
    }
}
