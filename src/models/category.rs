use serde::Deserialize;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Raw category entry as stored in the seed document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub article_count: u32,
}

impl TryFrom<CategoryRecord> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: CategoryRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(category.id)?,
            name: CategoryName::new(category.name)?,
            color: category.color,
            icon: category.icon,
            article_count: category.article_count,
        })
    }
}
