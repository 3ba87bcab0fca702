use chrono::Utc;
use serde::Serialize;

use crate::domain::category::{ALL_CATEGORIES_LABEL, CategoryFilter};
use crate::dto::articles::ArticleCardDto;
use crate::repository::{ArticleReader, BookmarkReader, CategoryReader};

use super::{ServiceError, ServiceResult};

/// Home tab: category chips, a featured lead story and the remaining feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeFeed {
    /// "All" followed by every category name in catalog order.
    pub chips: Vec<String>,
    pub selected: String,
    pub featured: Option<ArticleCardDto>,
    pub articles: Vec<ArticleCardDto>,
}

/// Core business logic for the home feed.
///
/// `category` is the label of the selected chip; blank or "All" disables the
/// filter. An unknown category yields an empty feed rather than an error.
pub fn show_home_feed<R, B>(category: &str, repo: &R, bookmarks: &B) -> ServiceResult<HomeFeed>
where
    R: ArticleReader + CategoryReader,
    B: BookmarkReader,
{
    let filter = CategoryFilter::parse(category)?;

    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })?;

    let articles = repo.list_articles_by_category(&filter).map_err(|e| {
        log::error!("Failed to list articles: {e}");
        ServiceError::Internal
    })?;

    let articles = bookmarks.apply_bookmarks(articles).map_err(|e| {
        log::error!("Failed to read bookmarks: {e}");
        ServiceError::Internal
    })?;

    let chips = std::iter::once(ALL_CATEGORIES_LABEL.to_string())
        .chain(categories.into_iter().map(|c| c.name.into_inner()))
        .collect();

    let mut cards = ArticleCardDto::from_articles(articles, Utc::now()).into_iter();
    let featured = cards.next();

    Ok(HomeFeed {
        chips,
        selected: filter.label().to_string(),
        featured,
        articles: cards.collect(),
    })
}
