//! Hand-off of an article to a platform share mechanism.

use thiserror::Error;

use crate::domain::article::Article;

/// Payload given to a [`ShareTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    /// Title and excerpt separated by a blank line.
    pub message: String,
}

impl From<&Article> for ShareRequest {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.to_string(),
            message: format!("{}\n\n{}", article.title, article.excerpt),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The platform has no share mechanism.
    #[error("sharing is not supported")]
    Unsupported,
    /// The share mechanism reported a failure.
    #[error("share failed: {0}")]
    Failed(String),
}

/// Platform collaborator that delivers share requests.
pub trait ShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Tries `primary` and falls back to `fallback` when it is unsupported,
/// e.g. a native share sheet backed by a clipboard copy.
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> ShareTarget for WithFallback<P, F>
where
    P: ShareTarget,
    F: ShareTarget,
{
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        match self.primary.share(request) {
            Err(ShareError::Unsupported) => self.fallback.share(request),
            other => other,
        }
    }
}
