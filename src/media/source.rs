//! Media data source abstraction.
//!
//! This module defines the [`MediaSource`] trait a media search grid reads from.
//! The trait is minimal and focused on what the grid actually needs: a count,
//! random access by index, search control, and a change subscription.

use serde::{Deserialize, Serialize};

/// Callback invoked after the source's contents change.
pub type ChangeObserver = Box<dyn Fn() + Send + Sync>;

/// Handle returned by [`MediaSource::register_change_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverKey(pub(crate) u64);

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub preview_url: String,
}

impl MediaItem {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, preview_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            preview_url: preview_url.into(),
        }
    }
}

/// An external, searchable collection of media items.
pub trait MediaSource {
    fn count(&self) -> usize;

    fn item_at(&self, index: usize) -> Option<MediaItem>;

    fn search(&mut self, query: &str);

    fn cancel_search(&mut self);

    fn register_change_observer(&mut self, observer: ChangeObserver) -> ObserverKey;

    fn unregister_change_observer(&mut self, key: ObserverKey);
}
