use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::article::Article;
use crate::domain::presentation::CategoryAccent;

/// Article as rendered in feeds, search results and bookmark lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCardDto {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub category_color: &'static str,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub time_ago: String,
    pub read_time: u32,
    pub is_bookmarked: bool,
    pub is_featured: bool,
    pub is_breaking: bool,
}

impl ArticleCardDto {
    pub fn from_article(article: Article, now: DateTime<Utc>) -> Self {
        Self {
            time_ago: article.time_ago(now),
            category_color: CategoryAccent::for_category(&article.category).hex(),
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            image_url: article.image_url.into_inner(),
            category: article.category.into_inner(),
            author: article.author.into_inner(),
            published_at: article.published_at,
            read_time: article.read_time.minutes(),
            is_bookmarked: article.is_bookmarked,
            is_featured: article.is_featured,
            is_breaking: article.is_breaking,
        }
    }

    pub fn from_articles(articles: Vec<Article>, now: DateTime<Utc>) -> Vec<Self> {
        articles
            .into_iter()
            .map(|a| Self::from_article(a, now))
            .collect()
    }
}

/// Full article view with its related stories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetailsDto {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub paragraphs: Vec<String>,
    pub image_url: String,
    pub category: String,
    pub category_color: &'static str,
    pub author: String,
    /// Long-form date, e.g. "January 15, 2024".
    pub published_on: String,
    pub read_time: u32,
    pub is_bookmarked: bool,
    pub is_breaking: bool,
    pub related: Vec<ArticleCardDto>,
}

impl ArticleDetailsDto {
    pub fn new(article: Article, related: Vec<ArticleCardDto>) -> Self {
        Self {
            paragraphs: article.paragraphs().into_iter().map(String::from).collect(),
            published_on: article.published_date_label(),
            category_color: CategoryAccent::for_category(&article.category).hex(),
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            image_url: article.image_url.into_inner(),
            category: article.category.into_inner(),
            author: article.author.into_inner(),
            read_time: article.read_time.minutes(),
            is_bookmarked: article.is_bookmarked,
            is_breaking: article.is_breaking,
            related,
        }
    }
}
