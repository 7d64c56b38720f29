//! Configuration for the catalog.
//!
//! Loadable from TOML; every field has a default, so an empty document is a
//! valid configuration.
//!
//! ```toml
//! [relationships]
//! author_append = "single"   # or "duplicate"
//! reassign = "relink"        # or "preserve"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level catalog configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// How relationship lists are maintained.
    #[serde(default)]
    pub relationships: RelationshipConfig,
}

impl CatalogConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CatalogError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CatalogError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Relationship-list maintenance settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipConfig {
    /// Append behavior of the author convenience path.
    #[serde(default)]
    pub author_append: AuthorAppendPolicy,
    /// List maintenance when an article's author or magazine is reassigned.
    #[serde(default)]
    pub reassign: ReassignPolicy,
}

/// How `AuthorMut::add_article` records the new article on its author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorAppendPolicy {
    /// The article appears once in the author's list, same as the direct path.
    #[default]
    Single,
    /// The convenience path appends a second time, so the article appears
    /// twice in the author's list. The magazine's list and the article
    /// registry still hold it once.
    Duplicate,
}

/// What happens to relationship lists when an article is re-pointed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReassignPolicy {
    /// Remove the article from the old endpoint's list and append it to the
    /// new endpoint's list.
    #[default]
    Relink,
    /// Only the article's own field changes; both endpoint lists keep their
    /// previous contents.
    Preserve,
}
