//! Magazine: publishes articles, derives contributors and titles from them.

use std::collections::{HashMap, HashSet};
use std::ops::Deref;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::fields::{Category, MagazineName, Title};
use crate::metrics::{CatalogCounters, bump};
use crate::model::article::Article;
use crate::types::{ArticleId, AuthorId, MagazineId};

/// An author needs strictly more articles than this in one magazine to count
/// as a contributing author.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// A publication with a renamable name and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    pub(crate) id: MagazineId,
    pub(crate) name: MagazineName,
    pub(crate) category: Category,
    pub(crate) articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(id: MagazineId, name: MagazineName, category: Category) -> Self {
        Self {
            id,
            name,
            category,
            articles: Vec::new(),
        }
    }

    /// This magazine's identifier.
    #[must_use]
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &MagazineName {
        &self.name
    }

    /// Current category.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Published articles, in publication order.
    #[must_use]
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }
}

/// Read view of a magazine that can follow its relationships.
#[derive(Debug, Clone, Copy)]
pub struct MagazineRef<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineRef<'a> {
    pub(crate) fn new(catalog: &'a Catalog, magazine: &'a Magazine) -> Self {
        Self { catalog, magazine }
    }

    /// The underlying record, borrowed for the catalog's lifetime.
    #[must_use]
    pub fn magazine(self) -> &'a Magazine {
        self.magazine
    }

    /// This magazine's identifier.
    #[must_use]
    pub fn id(self) -> MagazineId {
        self.magazine.id
    }

    /// Current name, borrowed from the catalog.
    #[must_use]
    pub fn name(self) -> &'a MagazineName {
        &self.magazine.name
    }

    /// Current category, borrowed from the catalog.
    #[must_use]
    pub fn category(self) -> &'a Category {
        &self.magazine.category
    }

    /// Published article ids, in publication order.
    #[must_use]
    pub fn articles(self) -> &'a [ArticleId] {
        &self.magazine.articles
    }

    /// Published articles resolved against the catalog.
    pub fn iter_articles(self) -> impl Iterator<Item = &'a Article> {
        let catalog = self.catalog;
        self.magazine
            .articles
            .iter()
            .filter_map(move |id| catalog.articles.get(id))
    }

    /// Distinct authors with at least one article here.
    #[must_use]
    pub fn contributors(self) -> HashSet<AuthorId> {
        bump(&self.catalog.counters.query_scans);
        trace!(magazine = %self.magazine.id, articles = self.magazine.articles.len(), "Scanning contributors");
        self.iter_articles().map(Article::author).collect()
    }

    /// Titles in publication order. `None` when nothing has been published.
    #[must_use]
    pub fn article_titles(self) -> Option<Vec<&'a Title>> {
        bump(&self.catalog.counters.query_scans);
        trace!(magazine = %self.magazine.id, articles = self.magazine.articles.len(), "Collecting titles");
        if self.magazine.articles.is_empty() {
            return None;
        }
        Some(self.iter_articles().map(Article::title).collect())
    }

    /// Authors with more than [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles here.
    ///
    /// `None` when no author clears the threshold.
    #[must_use]
    pub fn contributing_authors(self) -> Option<HashSet<AuthorId>> {
        bump(&self.catalog.counters.query_scans);
        trace!(magazine = %self.magazine.id, articles = self.magazine.articles.len(), "Counting articles per author");

        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.iter_articles() {
            *counts.entry(article.author()).or_insert(0) += 1;
        }

        let frequent: HashSet<AuthorId> = counts
            .into_iter()
            .filter(|&(_, count)| count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .map(|(author, _)| author)
            .collect();
        (!frequent.is_empty()).then_some(frequent)
    }
}

impl Deref for MagazineRef<'_> {
    type Target = Magazine;

    fn deref(&self) -> &Magazine {
        self.magazine
    }
}

/// Mutable handle on a magazine with validated setters.
#[derive(Debug)]
pub struct MagazineMut<'a> {
    magazine: &'a mut Magazine,
    counters: &'a CatalogCounters,
}

impl<'a> MagazineMut<'a> {
    pub(crate) fn new(magazine: &'a mut Magazine, counters: &'a CatalogCounters) -> Self {
        Self { magazine, counters }
    }

    /// Rename the magazine.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidName`] if the new name is not 2 to
    /// 16 characters long. The old name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = MagazineName::parse(name).inspect_err(|e| self.counters.record_rejection(e))?;
        debug!(magazine = %self.magazine.id, from = %self.magazine.name, to = %name, "Magazine renamed");
        self.magazine.name = name;
        Ok(())
    }

    /// Change the magazine's category.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidCategory`] if `category` is empty.
    /// The old category is kept.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = Category::parse(category).inspect_err(|e| self.counters.record_rejection(e))?;
        debug!(magazine = %self.magazine.id, category = %category, "Magazine recategorised");
        self.magazine.category = category;
        Ok(())
    }
}

impl Deref for MagazineMut<'_> {
    type Target = Magazine;

    fn deref(&self) -> &Magazine {
        self.magazine
    }
}
