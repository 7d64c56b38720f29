//! Fixtures shared by the masthead benchmarks.

use masthead_core::{AuthorId, Catalog, MagazineId};

/// A populated catalog plus the ids used to build it.
pub struct Fixture {
    /// The catalog under test.
    pub catalog: Catalog,
    /// Authors in creation order.
    pub authors: Vec<AuthorId>,
    /// Magazines in registration order.
    pub magazines: Vec<MagazineId>,
}

/// Build a catalog with `magazines` magazines, `authors` authors, and
/// `articles` articles spread round-robin across both.
///
/// # Panics
/// Panics if `authors` or `magazines` is zero, or if any generated field
/// fails validation.
#[must_use]
pub fn populate(authors: usize, magazines: usize, articles: usize) -> Fixture {
    assert!(authors > 0 && magazines > 0, "need at least one author and magazine");

    let mut catalog = Catalog::new();
    let author_ids: Vec<_> = (0..authors)
        .map(|i| catalog.add_author(format!("Author {i}")).expect("valid author"))
        .collect();
    let categories = ["Tech", "Food", "Fashion", "Science", "Travel"];
    let magazine_ids: Vec<_> = (0..magazines)
        .map(|i| {
            catalog
                .add_magazine(format!("Mag {i}"), categories[i % categories.len()])
                .expect("valid magazine")
        })
        .collect();

    for i in 0..articles {
        // Skew toward low-numbered magazines so the top publisher is stable.
        let mag = magazine_ids[(i * i) % magazines];
        catalog
            .add_article(author_ids[i % authors], mag, format!("Article number {i}"))
            .expect("valid article");
    }

    Fixture {
        catalog,
        authors: author_ids,
        magazines: magazine_ids,
    }
}
