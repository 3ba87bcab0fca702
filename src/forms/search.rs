use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::search::SearchQuery;
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Longest accepted query text, in characters.
pub const MAX_QUERY_LENGTH: u64 = 200;

/// Query string of the search endpoint.
///
/// `categories` is a comma-separated list of category names.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(max = MAX_QUERY_LENGTH))]
    pub query: Option<String>,
    pub categories: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchFormPayload {
    pub query: SearchQuery,
}

#[derive(Debug, Error)]
pub enum SearchFormError {
    #[error("Search form validation failed: {0}")]
    Validation(String),
    #[error("Search form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SearchFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SearchFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SearchForm> for SearchFormPayload {
    type Error = SearchFormError;

    fn try_from(value: SearchForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let categories = value
            .categories
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(CategoryName::new)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            query: SearchQuery::new(value.query.unwrap_or_default(), categories),
        })
    }
}
