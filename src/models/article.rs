use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::article::Article as DomainArticle;
use crate::domain::types::{
    ArticleId, ArticleTitle, AuthorName, CategoryName, ImageUrl, ReadTime, TypeConstraintError,
};

/// Raw article entry as stored in the seed document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    pub published_at: String,
    pub read_time: u32,
    #[serde(default)]
    pub is_bookmarked: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_breaking: Option<bool>,
}

impl TryFrom<ArticleRecord> for DomainArticle {
    type Error = TypeConstraintError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        let published_at = DateTime::parse_from_rfc3339(record.published_at.trim())
            .map_err(|_| TypeConstraintError::InvalidTimestamp("published at"))?
            .with_timezone(&Utc);

        Ok(Self {
            id: ArticleId::new(record.id)?,
            title: ArticleTitle::new(record.title)?,
            excerpt: record.excerpt,
            content: record.content,
            image_url: ImageUrl::new(record.image_url)?,
            category: CategoryName::new(record.category)?,
            author: AuthorName::new(record.author)?,
            published_at,
            read_time: ReadTime::new(record.read_time)?,
            is_bookmarked: record.is_bookmarked.unwrap_or(false),
            is_featured: record.is_featured.unwrap_or(false),
            is_breaking: record.is_breaking.unwrap_or(false),
        })
    }
}
