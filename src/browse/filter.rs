//! Filter engine.
//!
//! Maps the full catalog and a set of criteria to the ordered sequence of
//! matching books. Catalog order is preserved; the engine only decides
//! inclusion.

use crate::domain::{Book, FilterCriteria, Selector};

/// Returns the books satisfying every constraint in `criteria`.
///
/// A book matches when:
/// - the genre selector is `Any` or one of its genres equals the selected id
/// - the author selector is `Any` or equals its author id
/// - the trimmed, lower-cased title query is empty or occurs in its lower-cased title
///
/// An empty result is a valid outcome.
///
/// # Example
///
/// ```rust
/// use bookconnect::browse::filter;
/// use bookconnect::domain::{Catalog, FilterCriteria};
///
/// let catalog = Catalog::demo()?;
/// let criteria = FilterCriteria { title: "the".to_string(), ..FilterCriteria::any() };
/// let matches = filter(catalog.books(), &criteria);
/// assert!(matches.iter().all(|b| b.title.to_lowercase().contains("the")));
/// # Ok::<(), bookconnect::BookConnectError>(())
/// ```
#[must_use]
pub fn filter(catalog: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let _span = tracing::debug_span!("filter",
        catalog_size = catalog.len(),
        title_len = criteria.title.len(),
        author = %criteria.author.as_form_value(),
        genre = %criteria.genre.as_form_value()
    )
    .entered();

    if criteria.is_unconstrained() {
        tracing::debug!(match_count = catalog.len(), "unconstrained search, whole catalog matches");
        return catalog.to_vec();
    }

    let needle = criteria.title_needle();

    let matches: Vec<Book> = catalog
        .iter()
        .filter(|book| matches(book, criteria, &needle))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter applied");
    matches
}

fn matches(book: &Book, criteria: &FilterCriteria, needle: &str) -> bool {
    let genre_match = match &criteria.genre {
        Selector::Any => true,
        Selector::Only(genre) => book.has_genre(genre),
    };
    let author_match = criteria.author.accepts(&book.author);
    let title_match = needle.is_empty() || book.title.to_lowercase().contains(needle);

    genre_match && author_match && title_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: String::new(),
            published: "1900-01-01T00:00:00Z".parse().unwrap(),
            description: String::new(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            book("1", "The Time Machine", "wells", &["scifi", "classic"]),
            book("2", "Dracula", "stoker", &["horror"]),
            book("3", "The Invisible Man", "wells", &["scifi", "horror"]),
            book("4", "Emma", "austen", &["romance"]),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn unconstrained_returns_whole_catalog_in_order() {
        let catalog = sample();
        assert_eq!(filter(&catalog, &FilterCriteria::any()), catalog);
    }

    #[test]
    fn title_is_case_insensitive_and_trimmed() {
        let criteria = FilterCriteria {
            title: "  THE ".to_string(),
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(&sample(), &criteria)), vec!["1", "3"]);
    }

    #[test]
    fn whitespace_title_is_no_constraint() {
        let criteria = FilterCriteria {
            title: "   ".to_string(),
            ..FilterCriteria::any()
        };
        assert_eq!(filter(&sample(), &criteria).len(), 4);
    }

    #[test]
    fn author_and_genre_combine() {
        let criteria = FilterCriteria {
            title: String::new(),
            author: Selector::Only("wells".to_string()),
            genre: Selector::Only("horror".to_string()),
        };
        assert_eq!(ids(&filter(&sample(), &criteria)), vec!["3"]);
    }

    #[test]
    fn any_of_several_genres_matches() {
        let criteria = FilterCriteria {
            genre: Selector::Only("classic".to_string()),
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(&sample(), &criteria)), vec!["1"]);

        let criteria = FilterCriteria {
            genre: Selector::Only("horror".to_string()),
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(&sample(), &criteria)), vec!["2", "3"]);
    }

    #[test]
    fn unknown_genre_yields_empty_result() {
        let criteria = FilterCriteria {
            genre: Selector::Only("g7".to_string()),
            ..FilterCriteria::any()
        };
        assert!(filter(&sample(), &criteria).is_empty());
    }

    fn arb_book() -> impl Strategy<Value = Book> {
        (
            "[a-d]{0,3}",
            prop::sample::select(vec!["a1", "a2", "a3"]),
            prop::collection::vec(prop::sample::select(vec!["g1", "g2", "g3"]), 1..3),
        )
            .prop_map(|(title, author, genres)| book("", &title, author, &genres))
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Book>> {
        prop::collection::vec(arb_book(), 0..20).prop_map(|mut books| {
            for (i, b) in books.iter_mut().enumerate() {
                b.id = format!("b{i}");
            }
            books
        })
    }

    fn arb_selector(ids: Vec<&'static str>) -> impl Strategy<Value = Selector> {
        prop_oneof![
            Just(Selector::Any),
            prop::sample::select(ids).prop_map(|id| Selector::Only(id.to_string())),
        ]
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            "[ A-Da-d]{0,3}",
            arb_selector(vec!["a1", "a2", "a3", "a9"]),
            arb_selector(vec!["g1", "g2", "g3", "g9"]),
        )
            .prop_map(|(title, author, genre)| FilterCriteria { title, author, genre })
    }

    proptest! {
        #[test]
        fn prop_membership_matches_independent_constraints(
            catalog in arb_catalog(),
            criteria in arb_criteria(),
        ) {
            let result = filter(&catalog, &criteria);
            let needle = criteria.title.trim().to_lowercase();

            let expected: Vec<&Book> = catalog
                .iter()
                .filter(|b| {
                    let title_ok = needle.is_empty() || b.title.to_lowercase().contains(&needle);
                    let author_ok = match &criteria.author {
                        Selector::Any => true,
                        Selector::Only(a) => &b.author == a,
                    };
                    let genre_ok = match &criteria.genre {
                        Selector::Any => true,
                        Selector::Only(g) => b.genres.contains(g),
                    };
                    title_ok && author_ok && genre_ok
                })
                .collect();

            prop_assert_eq!(result.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn prop_filter_is_deterministic(
            catalog in arb_catalog(),
            criteria in arb_criteria(),
        ) {
            prop_assert_eq!(filter(&catalog, &criteria), filter(&catalog, &criteria));
        }
    }
}
