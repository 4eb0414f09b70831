//! Category suggestions and the category filter
//!
//! Categories are free-form labels on each expense. The form offers a fixed
//! suggestion list but any non-blank label is accepted.

use std::fmt;

/// Suggestions offered by the form and the category filter
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Bills",
    "Shopping",
    "Entertainment",
    "Other",
];

/// Label of the filter entry that shows every record
pub const ALL_CATEGORIES: &str = "All";

/// Which records the category filter lets through
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Exact, case-sensitive category match
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a selector label; `"All"` means no filtering
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Filter options in display order: `All` followed by the suggestions
    pub fn options(categories: &[String]) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(categories.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_CATEGORIES),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Food"),
            CategoryFilter::Only("Food".to_string())
        );
        // Case-sensitive: only the exact sentinel means "everything"
        assert_eq!(
            CategoryFilter::from_label("all"),
            CategoryFilter::Only("all".to_string())
        );
    }

    #[test]
    fn test_options_start_with_all() {
        let categories: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
        let options = CategoryFilter::options(&categories);
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], "All");
        assert_eq!(options[1], "Food");
    }
}
