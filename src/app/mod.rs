//! Application layer coordinating selector state, events, and actions.
//!
//! This layer sits between the presentation host and the flow runtime. It is
//! fully synchronous: no timers, no channels.
//!
//! # Architecture
//!
//! ```text
//! Host gesture → Event → handle_event → SelectorState transition → Actions → flow runtime
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: The selector phase state machine type
//! - [`state`]: Selector state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use post_visibility::app::{handle_event, Event, SelectorState};
//! use post_visibility::{Post, PostVisibility};
//!
//! let mut state = SelectorState::new(&Post::default());
//! let (_refresh, actions) = handle_event(&mut state, &Event::Select(PostVisibility::Protected));
//! assert!(actions.is_empty());
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::SelectorPhase;
pub use state::SelectorState;
