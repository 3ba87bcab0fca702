use crate::domain::category::Category;
use crate::domain::types::CategoryName;
use crate::repository::{CatalogRepository, CategoryReader, RepositoryResult};

impl CategoryReader for CatalogRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories().to_vec())
    }

    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>> {
        Ok(self.categories().iter().find(|c| &c.name == name).cloned())
    }
}
