//! Media search grid support.
//!
//! Independent of the visibility picker; shares only [`crate::Config`].
//!
//! # Organization
//!
//! - `source`: The [`MediaSource`] trait and [`MediaItem`]
//! - `picker`: [`MediaPicker`], the pass-through grid adapter
//! - `memory`: [`InMemoryMediaSource`], a fuzzy-searched catalog

mod memory;
mod picker;
mod source;

pub use memory::InMemoryMediaSource;
pub use picker::MediaPicker;
pub use source::{ChangeObserver, MediaItem, MediaSource, ObserverKey};
