use crate::domain::search::SearchOutcome;
use crate::forms::search::SearchFormPayload;
use crate::repository::{ArticleReader, BookmarkReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for the search tab.
///
/// An empty query without categories is reported as
/// [`SearchOutcome::Inactive`] and never touches the repository.
pub fn search_articles<R, B>(
    payload: SearchFormPayload,
    repo: &R,
    bookmarks: &B,
) -> ServiceResult<SearchOutcome>
where
    R: ArticleReader,
    B: BookmarkReader,
{
    if payload.query.is_inactive() {
        return Ok(SearchOutcome::Inactive);
    }

    let articles = match repo.search_articles(&payload.query) {
        Ok(articles) => articles,
        Err(e) => {
            log::error!("Failed to search articles: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match bookmarks.apply_bookmarks(articles) {
        Ok(articles) => Ok(SearchOutcome::Results(articles)),
        Err(e) => {
            log::error!("Failed to read bookmarks: {e}");
            Err(ServiceError::Internal)
        }
    }
}
