//! In-memory [`MediaSource`] with fuzzy title search.
//!
//! Results start empty and are filled by [`MediaSource::search`], the way a remote
//! search API behaves. Observers are notified after every search or cancel.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::source::{ChangeObserver, MediaItem, MediaSource, ObserverKey};

/// A fixed catalog searched by fuzzy match on item titles.
#[derive(Default)]
pub struct InMemoryMediaSource {
    catalog: Vec<MediaItem>,
    results: Vec<MediaItem>,
    observers: Vec<(ObserverKey, ChangeObserver)>,
    next_key: u64,
}

impl InMemoryMediaSource {
    #[must_use]
    pub fn new(catalog: Vec<MediaItem>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer();
        }
    }
}

impl std::fmt::Debug for InMemoryMediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMediaSource")
            .field("catalog", &self.catalog.len())
            .field("results", &self.results.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl MediaSource for InMemoryMediaSource {
    fn count(&self) -> usize {
        self.results.len()
    }

    fn item_at(&self, index: usize) -> Option<MediaItem> {
        self.results.get(index).cloned()
    }

    fn search(&mut self, query: &str) {
        let _span = tracing::debug_span!("media_search", query_len = query.len()).entered();

        let matcher = SkimMatcherV2::default();
        let query = query.to_lowercase();
        let mut scored: Vec<(i64, &MediaItem)> = self
            .catalog
            .iter()
            .filter_map(|item| {
                matcher
                    .fuzzy_match(&item.title.to_lowercase(), &query)
                    .map(|score| (score, item))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        self.results = scored.into_iter().map(|(_, item)| item.clone()).collect();
        tracing::debug!(results = self.results.len(), "media search completed");
        self.notify();
    }

    fn cancel_search(&mut self) {
        self.results.clear();
        self.notify();
    }

    fn register_change_observer(&mut self, observer: ChangeObserver) -> ObserverKey {
        let key = ObserverKey(self.next_key);
        self.next_key += 1;
        self.observers.push((key, observer));
        key
    }

    fn unregister_change_observer(&mut self, key: ObserverKey) {
        self.observers.retain(|(k, _)| *k != key);
    }
}
