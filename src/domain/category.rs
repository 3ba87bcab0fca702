use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Display name of the "no filter" chip shown ahead of real categories.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// A browsable news section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    /// Presentation hint, opaque to the catalog.
    pub color: String,
    /// Icon key, resolved through [`crate::domain::presentation::CategoryIcon`].
    pub icon: String,
    /// Denormalized counter from the seed. Not kept in sync with membership.
    pub article_count: u32,
}

/// Category selection applied to a listing.
///
/// `All` is a distinct variant, so it never collides with a category that
/// happens to share its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(CategoryName),
}

impl CategoryFilter {
    /// Interpret a chip label. Blank input and [`ALL_CATEGORIES_LABEL`] both
    /// select every article.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES_LABEL {
            return Ok(Self::All);
        }
        CategoryName::new(value).map(Self::Named)
    }

    /// Label for the chip representing this filter.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Named(name) => name.as_str(),
        }
    }

    pub fn matches(&self, category: &CategoryName) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}
