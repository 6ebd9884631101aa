//! Actions representing side effects to be executed by the flow runtime.
//!
//! The event handler never touches channels or timers itself. It returns a
//! `Vec<Action>` and the owner (see [`crate::flow::VisibilityFlow`]) carries them
//! out.
//!
//! # Example
//!
//! ```rust
//! use post_visibility::app::Action;
//! use post_visibility::VisibilityChoice;
//!
//! let actions = vec![Action::Submit(VisibilityChoice::Private)];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::VisibilityChoice;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands the choice to the owner right away.
    ///
    /// Emitted for Public and Private, which never need extra input.
    Submit(VisibilityChoice),

    /// Hands the choice to the owner after the configured commit delay.
    ///
    /// Emitted when a password is saved, so the on-screen keyboard can go away
    /// before the picker is torn down. The owner must cancel it on teardown.
    ScheduleSubmit(VisibilityChoice),
}
