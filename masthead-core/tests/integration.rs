//! Integration Tests: end-to-end catalog flows
//!
//! These tests drive the public API only: construct authors and magazines,
//! publish through both article paths, then check every aggregate query.

use std::collections::HashSet;
use std::io::Write as _;

use masthead_core::{
    AuthorAppendPolicy, Catalog, CatalogConfig, CatalogError, ReassignPolicy, ValidationError,
};

fn categories(catalog: &Catalog, author: masthead_core::AuthorId) -> Option<HashSet<String>> {
    catalog
        .author(author)
        .and_then(|a| a.topic_areas())
        .map(|set| set.into_iter().map(ToString::to_string).collect())
}

// ---------------------------------------------------------------------------
// Jane writes for Vogue
// ---------------------------------------------------------------------------

#[test]
fn jane_writes_for_vogue() {
    let mut catalog = Catalog::new();
    let jane = catalog.add_author("Jane").expect("valid author");
    let vogue = catalog.add_magazine("Vogue", "Fashion").expect("valid magazine");

    let article = catalog
        .author_mut(jane)
        .expect("registered")
        .add_article(vogue, "Spring Trends 2024")
        .expect("valid article");

    let mag = catalog.magazine(vogue).expect("registered");
    assert_eq!(mag.articles().len(), 1);
    let titles: Vec<&str> = mag
        .article_titles()
        .expect("one article")
        .into_iter()
        .map(|t| t.as_str())
        .collect();
    assert_eq!(titles, ["Spring Trends 2024"]);
    assert_eq!(mag.contributors(), HashSet::from([jane]));

    let author = catalog.author(jane).expect("registered");
    assert_eq!(author.magazines(), HashSet::from([vogue]));
    assert_eq!(author.articles(), [article]);

    let stored = catalog.article(article).expect("registered");
    assert_eq!(stored.author(), jane);
    assert_eq!(stored.magazine(), vogue);
    assert_eq!(stored.title().as_str(), "Spring Trends 2024");
}

// ---------------------------------------------------------------------------
// Both construction paths register on both endpoints
// ---------------------------------------------------------------------------

#[test]
fn both_paths_register_bilaterally() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Ada").expect("valid");
    let mag = catalog.add_magazine("Wired", "Tech").expect("valid");

    let direct = catalog.add_article(author, mag, "Direct construction").expect("valid");
    let via_author = catalog
        .author_mut(author)
        .expect("registered")
        .add_article(mag, "Convenience path")
        .expect("valid");

    assert_eq!(catalog.author(author).expect("registered").articles(), [direct, via_author]);
    assert_eq!(catalog.magazine(mag).expect("registered").articles(), [direct, via_author]);
    assert_eq!(
        catalog.articles().map(|a| a.id()).collect::<Vec<_>>(),
        [direct, via_author]
    );
}

#[test]
fn convenience_path_propagates_article_errors() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Ada").expect("valid");
    let mag = catalog.add_magazine("Wired", "Tech").expect("valid");
    let unknown = masthead_core::MagazineId::new();

    let mut handle = catalog.author_mut(author).expect("registered");
    assert_eq!(
        handle.add_article(unknown, "Valid title"),
        Err(ValidationError::InvalidMagazine(unknown))
    );
    assert_eq!(
        handle.add_article(mag, "x".repeat(51)),
        Err(ValidationError::InvalidTitle { len: 51 })
    );
    assert_eq!(catalog.stats().articles, 0);
}

// ---------------------------------------------------------------------------
// Topic areas
// ---------------------------------------------------------------------------

#[test]
fn topic_areas_collapse_repeated_categories() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Kim").expect("valid");
    let mags = [
        catalog.add_magazine("Wired", "Tech").expect("valid"),
        catalog.add_magazine("Ars", "Tech").expect("valid"),
        catalog.add_magazine("Saveur", "Food").expect("valid"),
    ];
    assert_eq!(categories(&catalog, author), None);

    for mag in mags {
        catalog.add_article(author, mag, "Weekly column").expect("valid");
    }

    assert_eq!(
        categories(&catalog, author),
        Some(HashSet::from(["Tech".to_string(), "Food".to_string()]))
    );
    assert_eq!(
        catalog.author(author).expect("registered").magazines(),
        HashSet::from(mags)
    );
}

// ---------------------------------------------------------------------------
// Contributing authors
// ---------------------------------------------------------------------------

#[test]
fn contributing_authors_three_versus_one() {
    let mut catalog = Catalog::new();
    let a = catalog.add_author("Ada").expect("valid");
    let b = catalog.add_author("Bob").expect("valid");
    let mag = catalog.add_magazine("Wired", "Tech").expect("valid");

    for title in ["First column", "Second column", "Third column"] {
        catalog.add_article(a, mag, title).expect("valid");
    }
    catalog.add_article(b, mag, "Guest column").expect("valid");

    let view = catalog.magazine(mag).expect("registered");
    assert_eq!(view.contributing_authors(), Some(HashSet::from([a])));
    assert_eq!(view.contributors(), HashSet::from([a, b]));
}

#[test]
fn duplicate_append_does_not_change_magazine_counts() {
    let mut config = CatalogConfig::default();
    config.relationships.author_append = AuthorAppendPolicy::Duplicate;
    let mut catalog = Catalog::with_config(config);
    let a = catalog.add_author("Ada").expect("valid");
    let mag = catalog.add_magazine("Wired", "Tech").expect("valid");

    for title in ["First column", "Second column"] {
        catalog
            .author_mut(a)
            .expect("registered")
            .add_article(mag, title)
            .expect("valid");
    }

    assert_eq!(catalog.author(a).expect("registered").articles().len(), 4);
    assert_eq!(catalog.magazine(mag).expect("registered").articles().len(), 2);
    assert_eq!(catalog.magazine(mag).expect("registered").contributing_authors(), None);
    assert_eq!(catalog.author(a).expect("registered").magazines(), HashSet::from([mag]));
}

// ---------------------------------------------------------------------------
// Top publisher
// ---------------------------------------------------------------------------

#[test]
fn top_publisher_prefers_first_registered_on_tie() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Ada").expect("valid");
    let m1 = catalog.add_magazine("M1", "News").expect("valid");
    let m2 = catalog.add_magazine("M2", "News").expect("valid");
    let m3 = catalog.add_magazine("M3", "News").expect("valid");

    for (mag, count) in [(m1, 2), (m3, 5), (m2, 5)] {
        for i in 0..count {
            catalog
                .add_article(author, mag, format!("Story number {i}"))
                .expect("valid");
        }
    }

    assert_eq!(catalog.top_publisher().map(|m| m.id()), Some(m2));
}

#[test]
fn top_publisher_follows_relinked_articles() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Ada").expect("valid");
    let m1 = catalog.add_magazine("M1", "News").expect("valid");
    let m2 = catalog.add_magazine("M2", "News").expect("valid");
    let moved = catalog.add_article(author, m1, "Moving story").expect("valid");
    catalog.add_article(author, m2, "Staying put").expect("valid");
    catalog.add_article(author, m1, "Also staying").expect("valid");
    assert_eq!(catalog.top_publisher().map(|m| m.id()), Some(m1));

    catalog
        .article_mut(moved)
        .expect("exists")
        .set_magazine(m2)
        .expect("known magazine");
    assert_eq!(catalog.top_publisher().map(|m| m.id()), Some(m2));
}

#[test]
fn preserve_policy_keeps_stale_links() {
    let mut config = CatalogConfig::default();
    config.relationships.reassign = ReassignPolicy::Preserve;
    let mut catalog = Catalog::with_config(config);
    let ada = catalog.add_author("Ada").expect("valid");
    let bob = catalog.add_author("Bob").expect("valid");
    let mag = catalog.add_magazine("Wired", "Tech").expect("valid");
    let article = catalog.add_article(ada, mag, "Who wrote this").expect("valid");

    catalog
        .article_mut(article)
        .expect("exists")
        .set_author(bob)
        .expect("known author");

    // The magazine now sees Bob, Ada's list still holds the article.
    assert_eq!(
        catalog.magazine(mag).expect("registered").contributors(),
        HashSet::from([bob])
    );
    assert_eq!(catalog.author(ada).expect("registered").articles(), [article]);
    assert!(catalog.author(bob).expect("registered").articles().is_empty());
}

// ---------------------------------------------------------------------------
// Configuration from disk
// ---------------------------------------------------------------------------

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "[relationships]\nauthor_append = \"duplicate\"\nreassign = \"preserve\"")
        .expect("write config");

    let config = CatalogConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.relationships.author_append, AuthorAppendPolicy::Duplicate);
    assert_eq!(config.relationships.reassign, ReassignPolicy::Preserve);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = CatalogConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

#[test]
fn counters_track_creations_and_rejections() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Ada").expect("valid");
    let mag = catalog.add_magazine("Wired", "Tech").expect("valid");
    catalog.add_article(author, mag, "Counted once").expect("valid");
    let _ = catalog.add_author("");
    let _ = catalog.add_magazine("W", "Tech");
    let _ = catalog.top_publisher();

    let snap = catalog.counters();
    assert_eq!(snap.authors_created, 1);
    assert_eq!(snap.magazines_created, 1);
    assert_eq!(snap.articles_created, 1);
    assert_eq!(snap.validations_rejected, 2);
    assert_eq!(snap.query_scans, 1);
}
