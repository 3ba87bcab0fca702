use crate::domain::article::Article;
use crate::domain::category::CategoryFilter;
use crate::domain::search::SearchQuery;
use crate::domain::types::ArticleId;
use crate::repository::{ArticleReader, CatalogRepository, RepositoryResult};

impl ArticleReader for CatalogRepository {
    fn list_articles(&self) -> RepositoryResult<Vec<Article>> {
        Ok(self.articles().to_vec())
    }

    fn get_article_by_id(&self, id: &ArticleId) -> RepositoryResult<Option<Article>> {
        Ok(self.articles().iter().find(|a| &a.id == id).cloned())
    }

    fn list_articles_by_category(
        &self,
        filter: &CategoryFilter,
    ) -> RepositoryResult<Vec<Article>> {
        Ok(self
            .articles()
            .iter()
            .filter(|a| filter.matches(&a.category))
            .cloned()
            .collect())
    }

    fn search_articles(&self, query: &SearchQuery) -> RepositoryResult<Vec<Article>> {
        Ok(self
            .articles()
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect())
    }

    fn related_articles(&self, article: &Article, limit: usize) -> RepositoryResult<Vec<Article>> {
        Ok(self
            .articles()
            .iter()
            .filter(|a| a.id != article.id && a.category == article.category)
            .take(limit)
            .cloned()
            .collect())
    }
}
