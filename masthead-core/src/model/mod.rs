//! Entity definitions and their catalog-bound views.
//!
//! Each entity is a plain record owned by the [`Catalog`](crate::Catalog).
//! Read queries that need to follow relationships go through a `*Ref` view
//! (a shared borrow of the catalog plus the entity); validated mutation goes
//! through a `*Mut` handle.
//!
//! - [`author`]: who writes articles.
//! - [`magazine`]: who publishes them.
//! - [`article`]: the join between one author and one magazine.

pub mod article;
pub mod author;
pub mod magazine;

pub use article::{Article, ArticleMut};
pub use author::{Author, AuthorMut, AuthorRef};
pub use magazine::{CONTRIBUTING_AUTHOR_THRESHOLD, Magazine, MagazineMut, MagazineRef};
