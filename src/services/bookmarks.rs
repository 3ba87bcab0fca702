use chrono::Utc;

use crate::domain::article::Article;
use crate::domain::types::ArticleId;
use crate::dto::articles::ArticleCardDto;
use crate::repository::{ArticleReader, BookmarkReader, BookmarkWriter};

use super::{ServiceError, ServiceResult};

/// Returns a copy of `articles` with the bookmark of `id` inverted.
///
/// Length and order are preserved and every other article is left untouched.
/// An id absent from the list yields an equal list. This is the per-screen
/// variant: the caller keeps the returned list as its own view of state.
pub fn toggle_bookmark(articles: &[Article], id: &ArticleId) -> Vec<Article> {
    articles
        .iter()
        .map(|a| {
            if &a.id == id {
                a.clone().with_bookmark(!a.is_bookmarked)
            } else {
                a.clone()
            }
        })
        .collect()
}

/// Bookmarked articles from the shared store, in catalog order.
pub fn show_bookmarks<R, B>(repo: &R, bookmarks: &B) -> ServiceResult<Vec<ArticleCardDto>>
where
    R: ArticleReader,
    B: BookmarkReader,
{
    let articles = match repo.list_articles() {
        Ok(articles) => articles,
        Err(e) => {
            log::error!("Failed to list articles: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match bookmarks.apply_bookmarks(articles) {
        Ok(articles) => Ok(ArticleCardDto::from_articles(
            articles.into_iter().filter(|a| a.is_bookmarked).collect(),
            Utc::now(),
        )),
        Err(e) => {
            log::error!("Failed to read bookmarks: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Flips the shared bookmark of an article and returns the new flag.
pub fn set_bookmark<R, B>(id: &str, repo: &R, bookmarks: &B) -> ServiceResult<bool>
where
    R: ArticleReader,
    B: BookmarkWriter,
{
    let id = ArticleId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_article_by_id(&id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get article: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match bookmarks.toggle_bookmark(&id) {
        Ok(bookmarked) => {
            log::info!("Article {id} bookmarked: {bookmarked}");
            Ok(bookmarked)
        }
        Err(e) => {
            log::error!("Failed to toggle bookmark: {e}");
            Err(ServiceError::Internal)
        }
    }
}
