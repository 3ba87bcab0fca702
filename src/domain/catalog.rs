use std::collections::HashSet;

use crate::domain::article::Article;
use crate::domain::category::{ALL_CATEGORIES_LABEL, Category};
use crate::domain::types::TypeConstraintError;

/// Immutable set of articles and categories held for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    articles: Vec<Article>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Validates identifier uniqueness and keeps the seed order.
    ///
    /// Category names must not equal the "All" sentinel label.
    pub fn new(
        articles: Vec<Article>,
        categories: Vec<Category>,
    ) -> Result<Self, TypeConstraintError> {
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(article.id.as_str()) {
                return Err(TypeConstraintError::DuplicateId(
                    "article",
                    article.id.to_string(),
                ));
            }
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(TypeConstraintError::DuplicateId(
                    "category",
                    category.id.to_string(),
                ));
            }
            if category.name == ALL_CATEGORIES_LABEL {
                return Err(TypeConstraintError::ReservedName(category.name.to_string()));
            }
        }

        Ok(Self {
            articles,
            categories,
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
