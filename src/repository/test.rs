//! Fixture catalogs shared by unit tests.

use chrono::{TimeZone, Utc};

use crate::domain::article::Article;
use crate::domain::category::Category;
use crate::domain::types::{
    ArticleId, ArticleTitle, AuthorName, CategoryId, CategoryName, ImageUrl, ReadTime,
};
use crate::repository::CatalogRepository;

pub fn sample_article(id: &str, category: &str) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new(format!("Article {id}")).unwrap(),
        excerpt: format!("Excerpt for {id}"),
        content: "First paragraph.\n\nSecond paragraph.".into(),
        image_url: ImageUrl::new(format!("https://images.example.com/{id}.jpeg")).unwrap(),
        category: CategoryName::new(category).unwrap(),
        author: AuthorName::new("Staff Writer").unwrap(),
        published_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        read_time: ReadTime::new(3).unwrap(),
        is_bookmarked: false,
        is_featured: false,
        is_breaking: false,
    }
}

pub fn sample_category(id: &str, name: &str, icon: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        color: "#7C3AED".into(),
        icon: icon.into(),
        article_count: 0,
    }
}

/// Catalog `[1: Tech, 2: Sports, 3: Tech]` with matching categories.
pub fn scenario_repository() -> CatalogRepository {
    CatalogRepository::try_new(
        vec![
            sample_article("1", "Tech"),
            sample_article("2", "Sports"),
            sample_article("3", "Tech"),
        ],
        vec![
            sample_category("1", "Tech", "smartphone"),
            sample_category("2", "Sports", "trophy"),
        ],
    )
    .unwrap()
}
