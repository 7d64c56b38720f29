//! # masthead core library
//!
//! An in-memory model of authors, magazines, and the articles that connect
//! them. Authors and magazines are related many-to-many through articles.
//!
//! Everything lives in a host-owned [`Catalog`]:
//!
//! - **Author**: a name plus the articles they wrote. Derives the magazines
//!   written for and their topic areas.
//! - **Magazine**: a name and category plus the articles it published.
//!   Derives contributors, titles, and contributing authors.
//! - **Article**: binds one author to one magazine under a title, and is
//!   recorded on both at construction.
//!
//! Field rules are enforced by the validated types in [`fields`]; references
//! are checked against the catalog. Every rejected call returns a
//! [`ValidationError`] and leaves the catalog unchanged.
//!
//! ```
//! use masthead_core::Catalog;
//!
//! let mut catalog = Catalog::new();
//! let jane = catalog.add_author("Jane")?;
//! let vogue = catalog.add_magazine("Vogue", "Fashion")?;
//! catalog.author_mut(jane)?.add_article(vogue, "Spring Trends 2024")?;
//!
//! assert_eq!(catalog.top_publisher().map(|m| m.id()), Some(vogue));
//! # Ok::<(), masthead_core::ValidationError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod fields;
pub mod metrics;
pub mod model;
pub mod types;

pub use catalog::Catalog;
pub use config::{AuthorAppendPolicy, CatalogConfig, ReassignPolicy, RelationshipConfig};
pub use error::{CatalogError, ValidationError};
pub use fields::{AuthorName, Category, MagazineName, Title};
pub use model::{Article, ArticleMut, Author, AuthorMut, AuthorRef, Magazine, MagazineMut, MagazineRef};
pub use types::*;
