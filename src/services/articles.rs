use chrono::Utc;

use crate::domain::article::Article;
use crate::domain::share::{ShareRequest, ShareTarget};
use crate::domain::types::ArticleId;
use crate::dto::articles::{ArticleCardDto, ArticleDetailsDto};
use crate::repository::{ArticleReader, BookmarkReader};

use super::{ServiceError, ServiceResult};

fn find_article<R>(id: &str, repo: &R) -> ServiceResult<Article>
where
    R: ArticleReader,
{
    let id = ArticleId::new(id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_article_by_id(&id) {
        Ok(Some(article)) => Ok(article),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get article: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the article detail screen.
///
/// Resolves the article, its bookmark flag and up to `related_limit` related
/// articles from the same category. Unknown ids yield
/// [`ServiceError::NotFound`], which the caller renders as a "not found"
/// state with a single back action.
pub fn show_article<R, B>(
    id: &str,
    repo: &R,
    bookmarks: &B,
    related_limit: usize,
) -> ServiceResult<ArticleDetailsDto>
where
    R: ArticleReader,
    B: BookmarkReader,
{
    let article = find_article(id, repo)?;

    let related = match repo.related_articles(&article, related_limit) {
        Ok(related) => related,
        Err(e) => {
            log::error!("Failed to list related articles: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let mut flagged = bookmarks
        .apply_bookmarks(std::iter::once(article).chain(related).collect())
        .map_err(|e| {
            log::error!("Failed to read bookmarks: {e}");
            ServiceError::Internal
        })?
        .into_iter();

    let Some(article) = flagged.next() else {
        log::error!("Bookmark overlay dropped article {id}");
        return Err(ServiceError::Internal);
    };
    let related = ArticleCardDto::from_articles(flagged.collect(), Utc::now());

    Ok(ArticleDetailsDto::new(article, related))
}

/// Hands an article to the platform share mechanism.
///
/// Sharing is best-effort: a failing target is logged and reported as
/// `Ok(false)`, never as an error. Only an unknown id is an error.
pub fn share_article<R, S>(id: &str, repo: &R, target: &S) -> ServiceResult<bool>
where
    R: ArticleReader,
    S: ShareTarget + ?Sized,
{
    let article = find_article(id, repo)?;

    match target.share(&ShareRequest::from(&article)) {
        Ok(()) => Ok(true),
        Err(e) => {
            log::warn!("Failed to share article {}: {e}", article.id);
            Ok(false)
        }
    }
}
