use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::domain::article::Article;
use crate::domain::types::ArticleId;
use crate::repository::{BookmarkReader, BookmarkWriter, RepositoryResult};

/// Notification sent to subscribers after a bookmark flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEvent {
    pub article_id: ArticleId,
    pub bookmarked: bool,
}

/// Handle returned by [`BookmarkStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&BookmarkEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Single source of truth for bookmark flags, shared by every screen.
///
/// Cloning yields another handle onto the same set. Concurrent toggles are
/// last-write-wins. Listeners run after the set is updated and must not
/// subscribe or unsubscribe from inside the callback.
#[derive(Clone, Default)]
pub struct BookmarkStore {
    bookmarked: Arc<RwLock<HashSet<ArticleId>>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from the `is_bookmarked` flags of catalog articles.
    pub fn from_articles(articles: &[Article]) -> Self {
        let bookmarked = articles
            .iter()
            .filter(|a| a.is_bookmarked)
            .map(|a| a.id.clone())
            .collect();
        Self {
            bookmarked: Arc::new(RwLock::new(bookmarked)),
            listeners: Arc::default(),
        }
    }

    /// Register a callback invoked on every bookmark change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&BookmarkEvent) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns `false` when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    fn notify(&self, event: &BookmarkEvent) {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in &listeners.entries {
            listener(event);
        }
    }
}

impl BookmarkReader for BookmarkStore {
    fn is_bookmarked(&self, id: &ArticleId) -> RepositoryResult<bool> {
        let bookmarked = self.bookmarked.read().unwrap_or_else(PoisonError::into_inner);
        Ok(bookmarked.contains(id))
    }

    fn apply_bookmarks(&self, articles: Vec<Article>) -> RepositoryResult<Vec<Article>> {
        let bookmarked = self.bookmarked.read().unwrap_or_else(PoisonError::into_inner);
        Ok(articles
            .into_iter()
            .map(|a| {
                let flag = bookmarked.contains(&a.id);
                a.with_bookmark(flag)
            })
            .collect())
    }
}

impl BookmarkWriter for BookmarkStore {
    fn toggle_bookmark(&self, id: &ArticleId) -> RepositoryResult<bool> {
        let now_bookmarked = {
            let mut bookmarked = self.bookmarked.write().unwrap_or_else(PoisonError::into_inner);
            if bookmarked.remove(id) {
                false
            } else {
                bookmarked.insert(id.clone());
                true
            }
        };

        self.notify(&BookmarkEvent {
            article_id: id.clone(),
            bookmarked: now_bookmarked,
        });

        Ok(now_bookmarked)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::repository::test::sample_article;

    #[test]
    fn seeds_from_article_flags() {
        let mut bookmarked = sample_article("1", "Tech");
        bookmarked.is_bookmarked = true;
        let store = BookmarkStore::from_articles(&[bookmarked, sample_article("2", "Tech")]);

        assert!(store.is_bookmarked(&ArticleId::new("1").unwrap()).unwrap());
        assert!(!store.is_bookmarked(&ArticleId::new("2").unwrap()).unwrap());
    }

    #[test]
    fn toggle_flips_and_notifies() {
        let store = BookmarkStore::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        let id = ArticleId::new("7").unwrap();
        assert!(store.toggle_bookmark(&id).unwrap());
        assert!(!store.toggle_bookmark(&id).unwrap());

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].bookmarked);
        assert!(!events[1].bookmarked);
        assert_eq!(events[1].article_id, id);
    }

    #[test]
    fn clones_share_state_and_listeners() {
        let store = BookmarkStore::new();
        let other = store.clone();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let id = ArticleId::new("1").unwrap();
        other.toggle_bookmark(&id).unwrap();
        assert!(store.is_bookmarked(&id).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        other.toggle_bookmark(&id).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn apply_overlays_flags() {
        let store = BookmarkStore::new();
        store.toggle_bookmark(&ArticleId::new("2").unwrap()).unwrap();
        let mut stale = sample_article("1", "Tech");
        stale.is_bookmarked = true;

        let articles = store
            .apply_bookmarks(vec![stale, sample_article("2", "Tech")])
            .unwrap();

        assert!(!articles[0].is_bookmarked);
        assert!(articles[1].is_bookmarked);
    }
}
