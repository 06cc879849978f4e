//! Search filter criteria.
//!
//! A [`FilterCriteria`] value is built from a single search submission,
//! consumed by the filter engine, and discarded. Construction is permissive:
//! missing or blank fields, and the literal `"any"`, impose no constraint.

use std::collections::BTreeMap;

/// Form value meaning "no constraint" for author and genre selectors.
pub const ANY: &str = "any";

/// Constraint on a single identifier-valued field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Matches every book.
    #[default]
    Any,
    /// Matches books whose field equals this identifier.
    Only(String),
}

impl Selector {
    /// Parses a form value. Blank values and `"any"` become [`Selector::Any`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bookconnect::domain::Selector;
    ///
    /// assert_eq!(Selector::from_form_value("any"), Selector::Any);
    /// assert_eq!(Selector::from_form_value("  "), Selector::Any);
    /// assert_eq!(Selector::from_form_value("g1"), Selector::Only("g1".to_string()));
    /// ```
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns `true` if `id` satisfies this selector.
    #[must_use]
    pub fn accepts(&self, id: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == id,
        }
    }

    /// Form value representing this selector.
    #[must_use]
    pub fn as_form_value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Only(id) => id,
        }
    }
}

/// Title, author and genre constraints for one search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text title query. Matched case-insensitively after trimming.
    pub title: String,
    pub author: Selector,
    pub genre: Selector,
}

impl FilterCriteria {
    /// Criteria that match every book.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Builds criteria from raw form fields (`title`, `author`, `genre`).
    ///
    /// Unknown keys are ignored and missing keys impose no constraint.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use bookconnect::domain::{FilterCriteria, Selector};
    ///
    /// let mut form = BTreeMap::new();
    /// form.insert("genre".to_string(), "g7".to_string());
    ///
    /// let criteria = FilterCriteria::from_form(&form);
    /// assert_eq!(criteria.title, "");
    /// assert_eq!(criteria.author, Selector::Any);
    /// assert_eq!(criteria.genre, Selector::Only("g7".to_string()));
    /// ```
    #[must_use]
    pub fn from_form(fields: &BTreeMap<String, String>) -> Self {
        let field = |key: &str| fields.get(key).map_or("", String::as_str);

        Self {
            title: field("title").to_string(),
            author: Selector::from_form_value(field("author")),
            genre: Selector::from_form_value(field("genre")),
        }
    }

    /// Lower-cased, trimmed title needle; empty means no title constraint.
    #[must_use]
    pub fn title_needle(&self) -> String {
        self.title.trim().to_lowercase()
    }

    /// Returns `true` if none of the fields constrain the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author == Selector::Any && self.genre == Selector::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_is_unconstrained() {
        let criteria = FilterCriteria::from_form(&BTreeMap::new());
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria, FilterCriteria::any());
    }

    #[test]
    fn title_needle_trims_and_folds() {
        let criteria = FilterCriteria {
            title: "  The TIME ".to_string(),
            ..FilterCriteria::any()
        };
        assert_eq!(criteria.title_needle(), "the time");
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn selector_round_trips_form_value() {
        assert_eq!(Selector::Any.as_form_value(), "any");
        assert_eq!(Selector::from_form_value("a1").as_form_value(), "a1");
        assert!(Selector::Any.accepts("whatever"));
        assert!(!Selector::Only("a1".to_string()).accepts("a2"));
    }
}
