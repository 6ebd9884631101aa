//! Pass-through adapter between a media grid and its [`MediaSource`].
//!
//! The picker forwards counts and items unchanged. It only adds the bits of
//! screen state that depend on the source: whether the welcome placeholder is
//! still up, whether the loading indicator should spin, and whether a search
//! term is long enough to send.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::source::{MediaItem, MediaSource, ObserverKey};
use crate::Config;

/// Media search grid state over an external source.
///
/// Registers a change observer on construction and unregisters it on drop.
pub struct MediaPicker<S: MediaSource> {
    source: S,
    observer_key: Option<ObserverKey>,

    /// Number of change notifications received so far.
    revision: Arc<AtomicU64>,

    is_loading: bool,
    min_search_length: usize,
}

impl<S: MediaSource> MediaPicker<S> {
    #[must_use]
    pub fn new(mut source: S, config: &Config) -> Self {
        let revision = Arc::new(AtomicU64::new(0));
        let observed = Arc::clone(&revision);
        let observer_key = source.register_change_observer(Box::new(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        }));

        Self {
            source,
            observer_key: Some(observer_key),
            revision,
            is_loading: false,
            min_search_length: config.min_search_length,
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.source.count()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<MediaItem> {
        self.source.item_at(index)
    }

    /// Forwards the search field text. Terms shorter than the configured minimum
    /// cancel the running search instead.
    pub fn update_search(&mut self, term: &str) {
        if term.chars().count() < self.min_search_length {
            tracing::trace!(term_len = term.len(), "search term too short, cancelling");
            self.source.cancel_search();
        } else {
            tracing::debug!(term_len = term.len(), "forwarding media search");
            self.source.search(term);
        }
    }

    /// Records a loading state change reported by the source.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// The spinner only shows while loading into an empty grid.
    #[must_use]
    pub fn is_loading_indicator_visible(&self) -> bool {
        self.is_loading && self.source.count() == 0
    }

    /// The welcome placeholder stays up until the source first reports a change.
    #[must_use]
    pub fn is_welcome_visible(&self) -> bool {
        self.revision() == 0
    }

    /// Change counter; hosts reload the grid when it moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MediaSource> Drop for MediaPicker<S> {
    fn drop(&mut self) {
        if let Some(key) = self.observer_key.take() {
            self.source.unregister_change_observer(key);
        }
    }
}

impl<S: MediaSource + std::fmt::Debug> std::fmt::Debug for MediaPicker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaPicker")
            .field("source", &self.source)
            .field("revision", &self.revision())
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::InMemoryMediaSource;

    /// Source wrapper that records calls and shares the observer count.
    #[derive(Debug, Default)]
    struct Recording {
        inner: InMemoryMediaSource,
        searches: Vec<String>,
        cancels: usize,
        live_observers: Arc<AtomicU64>,
    }

    impl MediaSource for Recording {
        fn count(&self) -> usize {
            self.inner.count()
        }
        fn item_at(&self, index: usize) -> Option<MediaItem> {
            self.inner.item_at(index)
        }
        fn search(&mut self, query: &str) {
            self.searches.push(query.to_string());
            self.inner.search(query);
        }
        fn cancel_search(&mut self) {
            self.cancels += 1;
            self.inner.cancel_search();
        }
        fn register_change_observer(&mut self, observer: crate::media::ChangeObserver) -> ObserverKey {
            self.live_observers.fetch_add(1, Ordering::SeqCst);
            self.inner.register_change_observer(observer)
        }
        fn unregister_change_observer(&mut self, key: ObserverKey) {
            self.live_observers.fetch_sub(1, Ordering::SeqCst);
            self.inner.unregister_change_observer(key);
        }
    }

    fn source() -> Recording {
        Recording {
            inner: InMemoryMediaSource::new(vec![
                MediaItem::new("1", "sunset beach", "https://media.example/1.gif"),
                MediaItem::new("2", "sunrise hills", "https://media.example/2.gif"),
            ]),
            ..Recording::default()
        }
    }

    #[test]
    fn short_terms_cancel_search() {
        let mut picker = MediaPicker::new(source(), &Config::default());
        picker.update_search("s");
        picker.update_search("sun");

        assert_eq!(picker.source().cancels, 1);
        assert_eq!(picker.source().searches, vec!["sun".to_string()]);
        assert_eq!(picker.item_count(), 2);
        assert!(picker.item(0).is_some());
    }

    #[test]
    fn welcome_hidden_after_first_change() {
        let mut picker = MediaPicker::new(source(), &Config::default());
        assert!(picker.is_welcome_visible());
        picker.update_search("beach");
        assert!(!picker.is_welcome_visible());
        assert_eq!(picker.revision(), 1);
    }

    #[test]
    fn loading_indicator_only_for_empty_grid() {
        let mut picker = MediaPicker::new(source(), &Config::default());
        picker.set_loading(true);
        assert!(picker.is_loading_indicator_visible());

        picker.update_search("sun");
        assert!(!picker.is_loading_indicator_visible());

        picker.set_loading(false);
        picker.update_search("x");
        assert!(!picker.is_loading_indicator_visible());
    }

    #[test]
    fn drop_unregisters_observer() {
        let recording = source();
        let live = Arc::clone(&recording.live_observers);
        let picker = MediaPicker::new(recording, &Config::default());
        assert_eq!(live.load(Ordering::SeqCst), 1);
        drop(picker);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }
}
