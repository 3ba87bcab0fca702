use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::article::Article;
use crate::domain::types::CategoryName;

/// Free-text query combined with an optional set of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    categories: BTreeSet<CategoryName>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, categories: BTreeSet<CategoryName>) -> Self {
        Self {
            text: text.into(),
            categories,
        }
    }

    /// Raw query text as typed by the reader.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn categories(&self) -> &BTreeSet<CategoryName> {
        &self.categories
    }

    /// Lowercased needle, or `None` when the text is blank.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.text.to_lowercase())
        }
    }

    /// Empty text and no category filter: the search has not been performed yet.
    pub fn is_inactive(&self) -> bool {
        self.needle().is_none() && self.categories.is_empty()
    }

    pub fn matches(&self, article: &Article) -> bool {
        let text_matches = self
            .needle()
            .is_none_or(|needle| article.matches_text(&needle));
        let category_matches =
            self.categories.is_empty() || self.categories.contains(&article.category);
        text_matches && category_matches
    }
}

/// Result of a search as presented to the reader.
///
/// `Inactive` is distinct from `Results(vec![])`: the former means no search
/// was run, the latter that nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "articles", rename_all = "snake_case")]
pub enum SearchOutcome {
    Inactive,
    Results(Vec<Article>),
}
