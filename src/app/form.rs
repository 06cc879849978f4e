//! Search form state.
//!
//! The form mirrors a classic search dialog: a free-text title input and two
//! drop-downs whose first entry ("All Authors" / "All Genres") means no
//! constraint. Submitting the form produces raw field values which are parsed
//! permissively into [`FilterCriteria`].

use crate::domain::{Catalog, FilterCriteria, NameIndex, ANY};
use std::collections::BTreeMap;

/// One entry of a drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub value: String,
    pub label: String,
}

/// Builds drop-down options from a name mapping, led by an "any" entry.
#[must_use]
pub fn filter_options(names: &NameIndex, any_label: &str) -> Vec<FormOption> {
    std::iter::once(FormOption {
        value: ANY.to_string(),
        label: any_label.to_string(),
    })
    .chain(names.iter().map(|(id, name)| FormOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// Editable search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    authors: Vec<FormOption>,
    genres: Vec<FormOption>,
    author_index: usize,
    genre_index: usize,
}

impl SearchForm {
    /// Creates an empty form with options drawn from the catalog.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            authors: filter_options(catalog.authors(), "All Authors"),
            genres: filter_options(catalog.genres(), "All Genres"),
            author_index: 0,
            genre_index: 0,
        }
    }

    /// Moves the author selection by `step`, wrapping around.
    pub fn cycle_author(&mut self, step: isize) {
        self.author_index = Self::wrap(self.author_index, step, self.authors.len());
    }

    /// Moves the genre selection by `step`, wrapping around.
    pub fn cycle_genre(&mut self, step: isize) {
        self.genre_index = Self::wrap(self.genre_index, step, self.genres.len());
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn wrap(index: usize, step: isize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let len = len as isize;
        (index as isize + step).rem_euclid(len) as usize
    }

    #[must_use]
    pub fn author(&self) -> Option<&FormOption> {
        self.authors.get(self.author_index)
    }

    #[must_use]
    pub fn genre(&self) -> Option<&FormOption> {
        self.genres.get(self.genre_index)
    }

    /// Raw submitted field values, keyed like the form inputs.
    #[must_use]
    pub fn fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), self.title.clone());
        if let Some(author) = self.author() {
            fields.insert("author".to_string(), author.value.clone());
        }
        if let Some(genre) = self.genre() {
            fields.insert("genre".to_string(), genre.value.clone());
        }
        fields
    }

    /// Criteria for the current form contents.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(&self.fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Selector;

    #[test]
    fn options_start_with_any() {
        let catalog = Catalog::demo().unwrap();
        let options = filter_options(catalog.genres(), "All Genres");

        assert_eq!(options[0].value, "any");
        assert_eq!(options[0].label, "All Genres");
        assert_eq!(options.len(), catalog.genres().len() + 1);
        assert_eq!(options[1].label, "Romance");
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let catalog = Catalog::demo().unwrap();
        let mut form = SearchForm::new(&catalog);

        form.cycle_author(-1);
        assert_eq!(form.author().unwrap().label, "Lewis Carroll");
        form.cycle_author(1);
        assert_eq!(form.author().unwrap().value, "any");
    }

    #[test]
    fn default_form_is_unconstrained() {
        let catalog = Catalog::demo().unwrap();
        assert!(SearchForm::new(&catalog).criteria().is_unconstrained());
    }

    #[test]
    fn criteria_reflect_selection() {
        let catalog = Catalog::demo().unwrap();
        let mut form = SearchForm::new(&catalog);
        form.title = "the".to_string();
        form.cycle_genre(4);

        let criteria = form.criteria();
        assert_eq!(criteria.title, "the");
        assert_eq!(criteria.author, Selector::Any);
        assert_eq!(criteria.genre, Selector::Only("g-scifi".to_string()));
    }

    #[test]
    fn empty_catalog_form_still_works() {
        let mut form = SearchForm::new(&Catalog::empty(10));
        form.cycle_author(3);
        assert_eq!(form.author().unwrap().value, "any");
    }
}
