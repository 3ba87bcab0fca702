use chrono::Utc;

use crate::domain::category::CategoryFilter;
use crate::domain::types::CategoryName;
use crate::dto::articles::ArticleCardDto;
use crate::dto::categories::CategoryDto;
use crate::repository::{ArticleReader, BookmarkReader, CategoryReader};

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Articles of a single category together with the category itself.
///
/// Returns [`ServiceError::NotFound`] when no category has that name.
pub fn show_category_articles<R, B>(
    name: &str,
    repo: &R,
    bookmarks: &B,
) -> ServiceResult<(CategoryDto, Vec<ArticleCardDto>)>
where
    R: ArticleReader + CategoryReader,
    B: BookmarkReader,
{
    let name = CategoryName::new(name).map_err(|_| ServiceError::NotFound)?;

    let category = match repo.get_category_by_name(&name) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let articles = match repo.list_articles_by_category(&CategoryFilter::Named(name)) {
        Ok(articles) => articles,
        Err(e) => {
            log::error!("Failed to list category articles: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let articles = bookmarks.apply_bookmarks(articles).map_err(|e| {
        log::error!("Failed to read bookmarks: {e}");
        ServiceError::Internal
    })?;

    Ok((
        CategoryDto::from(category),
        ArticleCardDto::from_articles(articles, Utc::now()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presentation::CategoryIcon;
    use crate::repository::BookmarkStore;
    use crate::repository::test::scenario_repository;

    #[test]
    fn lists_categories_with_icons() {
        let repo = scenario_repository();

        let categories = show_categories(&repo).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].icon, CategoryIcon::Smartphone);
        assert_eq!(categories[1].icon, CategoryIcon::Trophy);
    }

    #[test]
    fn lists_articles_of_category() {
        let repo = scenario_repository();

        let (category, articles) =
            show_category_articles("Tech", &repo, &BookmarkStore::new()).unwrap();

        assert_eq!(category.name, "Tech");
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unknown_category_is_not_found() {
        let repo = scenario_repository();

        let result = show_category_articles("Weather", &repo, &BookmarkStore::new());

        assert_eq!(result.unwrap_err(), ServiceError::NotFound);
    }
}
