use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ArticleId, ArticleTitle, AuthorName, CategoryName, ImageUrl, ReadTime};

/// Delimiter separating paragraphs inside [`Article::content`].
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// A news article from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub excerpt: String,
    /// Paragraph text separated by [`PARAGRAPH_DELIMITER`].
    pub content: String,
    pub image_url: ImageUrl,
    /// Free-text label. Not checked against the category list.
    pub category: CategoryName,
    pub author: AuthorName,
    pub published_at: DateTime<Utc>,
    pub read_time: ReadTime,
    pub is_bookmarked: bool,
    pub is_featured: bool,
    pub is_breaking: bool,
}

impl Article {
    /// Split the body into display paragraphs, skipping blank fragments.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split(PARAGRAPH_DELIMITER)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Case-insensitive literal substring match over title, excerpt and author.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
    }

    /// Relative age label such as `"12 min ago"`, `"3h ago"` or `"2d ago"`.
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let minutes = (now - self.published_at).num_minutes().max(0);
        if minutes < 60 {
            return format!("{minutes} min ago");
        }
        let hours = minutes / 60;
        if hours < 24 {
            return format!("{hours}h ago");
        }
        format!("{}d ago", hours / 24)
    }

    /// Long-form publication date, e.g. `"January 15, 2024"`.
    pub fn published_date_label(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }

    /// Copy of the article with the bookmark flag set to `bookmarked`.
    pub fn with_bookmark(mut self, bookmarked: bool) -> Self {
        self.is_bookmarked = bookmarked;
        self
    }
}
