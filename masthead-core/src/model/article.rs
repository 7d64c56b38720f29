//! Article: binds one author to one magazine under a title.

use std::collections::HashMap;
use std::ops::Deref;

use tracing::debug;

use crate::config::ReassignPolicy;
use crate::error::ValidationError;
use crate::fields::Title;
use crate::metrics::{CatalogCounters, bump};
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::types::{ArticleId, AuthorId, MagazineId};

/// The join record between an author and a magazine.
///
/// # Invariants
/// - `author` and `magazine` always name entities held by the same catalog.
/// - `title` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub(crate) id: ArticleId,
    pub(crate) author: AuthorId,
    pub(crate) magazine: MagazineId,
    pub(crate) title: Title,
}

impl Article {
    pub(crate) fn new(id: ArticleId, author: AuthorId, magazine: MagazineId, title: Title) -> Self {
        Self {
            id,
            author,
            magazine,
            title,
        }
    }

    /// This article's identifier.
    #[must_use]
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// Who wrote it.
    #[must_use]
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// Where it was published.
    #[must_use]
    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// The title.
    #[must_use]
    pub fn title(&self) -> &Title {
        &self.title
    }
}

/// Mutable handle on an article with validated, re-pointing setters.
///
/// Borrows the author and magazine tables alongside the article so that the
/// [`ReassignPolicy::Relink`] policy can move the article between endpoint
/// lists.
#[derive(Debug)]
pub struct ArticleMut<'a> {
    article: &'a mut Article,
    authors: &'a mut HashMap<AuthorId, Author>,
    magazines: &'a mut HashMap<MagazineId, Magazine>,
    policy: ReassignPolicy,
    counters: &'a CatalogCounters,
}

impl<'a> ArticleMut<'a> {
    pub(crate) fn new(
        article: &'a mut Article,
        authors: &'a mut HashMap<AuthorId, Author>,
        magazines: &'a mut HashMap<MagazineId, Magazine>,
        policy: ReassignPolicy,
        counters: &'a CatalogCounters,
    ) -> Self {
        Self {
            article,
            authors,
            magazines,
            policy,
            counters,
        }
    }

    /// Re-point the article at another author.
    ///
    /// Under [`ReassignPolicy::Relink`] the article leaves the old author's
    /// list and is appended once to the new author's list. Under
    /// [`ReassignPolicy::Preserve`] neither list changes. Re-pointing at the
    /// current author is a no-op.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidAuthor`] if `author` is not held by
    /// this catalog.
    pub fn set_author(&mut self, author: AuthorId) -> Result<(), ValidationError> {
        if !self.authors.contains_key(&author) {
            let err = ValidationError::InvalidAuthor(author);
            self.counters.record_rejection(&err);
            return Err(err);
        }
        let previous = self.article.author;
        if previous == author {
            return Ok(());
        }

        let article_id = self.article.id;
        self.article.author = author;
        if self.policy == ReassignPolicy::Relink {
            if let Some(old) = self.authors.get_mut(&previous) {
                old.articles.retain(|id| *id != article_id);
            }
            if let Some(new) = self.authors.get_mut(&author) {
                new.articles.push(article_id);
            }
        }

        bump(&self.counters.reassignments);
        debug!(article = %article_id, from = %previous, to = %author, policy = ?self.policy, "Article author reassigned");
        Ok(())
    }

    /// Re-point the article at another magazine.
    ///
    /// List maintenance follows the same policy as [`Self::set_author`].
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidMagazine`] if `magazine` is not held
    /// by this catalog.
    pub fn set_magazine(&mut self, magazine: MagazineId) -> Result<(), ValidationError> {
        if !self.magazines.contains_key(&magazine) {
            let err = ValidationError::InvalidMagazine(magazine);
            self.counters.record_rejection(&err);
            return Err(err);
        }
        let previous = self.article.magazine;
        if previous == magazine {
            return Ok(());
        }

        let article_id = self.article.id;
        self.article.magazine = magazine;
        if self.policy == ReassignPolicy::Relink {
            if let Some(old) = self.magazines.get_mut(&previous) {
                old.articles.retain(|id| *id != article_id);
            }
            if let Some(new) = self.magazines.get_mut(&magazine) {
                new.articles.push(article_id);
            }
        }

        bump(&self.counters.reassignments);
        debug!(article = %article_id, from = %previous, to = %magazine, policy = ?self.policy, "Article magazine reassigned");
        Ok(())
    }
}

impl Deref for ArticleMut<'_> {
    type Target = Article;

    fn deref(&self) -> &Article {
        self.article
    }
}
