use std::sync::Arc;

use crate::domain::article::Article;
use crate::domain::catalog::Catalog;
use crate::domain::category::{Category, CategoryFilter};
use crate::domain::search::SearchQuery;
use crate::domain::types::{ArticleId, CategoryName};

pub mod article;
pub mod bookmark;
pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;

pub use bookmark::{BookmarkEvent, BookmarkStore, SubscriptionId};
pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by an immutable in-memory [`Catalog`].
///
/// The catalog sits behind an `Arc`, so the repository is cheap to clone and
/// can be handed to every request handler.
#[derive(Clone, Debug, Default)]
pub struct CatalogRepository {
    catalog: Arc<Catalog>, // Arc is cheap to clone
}

impl CatalogRepository {
    /// Create a new repository over an already validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Validate raw domain values and build a repository over them.
    pub fn try_new(articles: Vec<Article>, categories: Vec<Category>) -> RepositoryResult<Self> {
        Ok(Self::new(Catalog::new(articles, categories)?))
    }

    fn articles(&self) -> &[Article] {
        self.catalog.articles()
    }

    fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }
}

/// Read-only operations for article entities.
pub trait ArticleReader {
    /// List every article in catalog order.
    fn list_articles(&self) -> RepositoryResult<Vec<Article>>;
    /// Retrieve an article by its identifier.
    fn get_article_by_id(&self, id: &ArticleId) -> RepositoryResult<Option<Article>>;
    /// List articles accepted by the category filter, in catalog order.
    fn list_articles_by_category(&self, filter: &CategoryFilter)
    -> RepositoryResult<Vec<Article>>;
    /// Literal, case-insensitive search combined with a category set.
    fn search_articles(&self, query: &SearchQuery) -> RepositoryResult<Vec<Article>>;
    /// Up to `limit` other articles from the same category, in catalog order.
    fn related_articles(&self, article: &Article, limit: usize) -> RepositoryResult<Vec<Article>>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category in catalog order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its exact name.
    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>>;
}

/// Read-only access to the shared bookmark set.
pub trait BookmarkReader {
    /// Whether the article is currently bookmarked.
    fn is_bookmarked(&self, id: &ArticleId) -> RepositoryResult<bool>;
    /// Overwrite the `is_bookmarked` flag of each article with the stored state.
    fn apply_bookmarks(&self, articles: Vec<Article>) -> RepositoryResult<Vec<Article>>;
}

/// Mutations of the shared bookmark set.
pub trait BookmarkWriter {
    /// Flip the bookmark of `id` and return the new state.
    fn toggle_bookmark(&self, id: &ArticleId) -> RepositoryResult<bool>;
}
