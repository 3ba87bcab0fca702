//! Loading of the static catalog the service runs on.
//!
//! The catalog is either the bundled default document or a JSON file with the
//! same shape supplied through configuration.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::article::Article;
use crate::domain::catalog::Catalog;
use crate::domain::category::Category;
use crate::domain::types::TypeConstraintError;
use crate::models::article::ArticleRecord;
use crate::models::category::CategoryRecord;

const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.json");

/// Errors raised while building a [`Catalog`] from seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid seed data: {0}")]
    Invalid(#[from] TypeConstraintError),
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    articles: Vec<ArticleRecord>,
    #[serde(default)]
    categories: Vec<CategoryRecord>,
}

/// Parse a seed document held in memory.
pub fn parse_catalog(document: &str) -> Result<Catalog, SeedError> {
    let document: SeedDocument = serde_json::from_str(document)?;

    let articles = document
        .articles
        .into_iter()
        .map(Article::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let categories = document
        .categories
        .into_iter()
        .map(Category::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(articles, categories)?)
}

/// Catalog shipped with the binary.
pub fn default_catalog() -> Result<Catalog, SeedError> {
    parse_catalog(DEFAULT_CATALOG)
}

/// Read a catalog from a JSON file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, SeedError> {
    let path = path.as_ref();
    let document = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&document)?;
    log::info!(
        "Loaded {} articles and {} categories from {}",
        catalog.articles().len(),
        catalog.categories().len(),
        path.display()
    );
    Ok(catalog)
}
