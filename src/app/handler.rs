//! Event handling and state transition logic.
//!
//! This module translates user gestures relayed by the presentation host into
//! [`SelectorState`] transitions and the [`Action`]s the flow runtime has to carry
//! out.
//!
//! # Architecture
//!
//! 1. The host turns a tap or text edit into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `SelectorState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use post_visibility::app::{handle_event, Action, Event, SelectorState};
//! use post_visibility::{Post, PostVisibility, VisibilityChoice};
//!
//! let mut state = SelectorState::new(&Post::default());
//! let (refresh, actions) = handle_event(&mut state, &Event::Select(PostVisibility::Private));
//! assert!(refresh);
//! assert_eq!(actions, vec![Action::Submit(VisibilityChoice::Private)]);
//! ```

use super::{Action, SelectorState};
use crate::domain::PostVisibility;

/// Gestures relayed by the presentation host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A visibility row was tapped.
    Select(PostVisibility),
    /// The password field of an already protected post was focused.
    EditPassword,
    /// The password field text changed.
    PasswordChanged(String),
    /// The clear button inside the password field was tapped.
    ClearPassword,
    /// The show/hide password button was tapped.
    ToggleSecureEntry,
    /// Cancel was tapped below the password field.
    CancelPasswordEntry,
    /// Save was tapped, or the password field was submitted.
    SavePassword,
}

/// Processes an event, mutates selector state, and returns actions to execute.
///
/// # Returns
///
/// `(refresh, actions)`: whether the view model changed, and the side effects to
/// run in order. Events that are invalid in the current phase return
/// `(false, vec![])`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type. Password text is
/// never recorded, only its length.
pub fn handle_event(state: &mut SelectorState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = event_name(event),
        phase = state.phase().name()
    )
    .entered();

    match event {
        Event::Select(visibility) => {
            let (changed, action) = state.select_visibility(*visibility);
            (changed, action.into_iter().collect())
        }
        Event::EditPassword => (state.edit_password(), vec![]),
        Event::PasswordChanged(text) => {
            let changed = state.update_password_draft(text);
            if changed {
                tracing::trace!(draft_len = text.len(), "password draft updated");
            }
            (changed, vec![])
        }
        Event::ClearPassword => (state.clear_password(), vec![]),
        Event::ToggleSecureEntry => (state.toggle_secure_entry(), vec![]),
        Event::CancelPasswordEntry => (state.cancel_password_entry(), vec![]),
        Event::SavePassword => state
            .commit_password()
            .map_or_else(|| (false, vec![]), |action| (true, vec![action])),
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Select(_) => "select",
        Event::EditPassword => "edit_password",
        Event::PasswordChanged(_) => "password_changed",
        Event::ClearPassword => "clear_password",
        Event::ToggleSecureEntry => "toggle_secure_entry",
        Event::CancelPasswordEntry => "cancel_password_entry",
        Event::SavePassword => "save_password",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Post, PostStatus, VisibilityChoice};

    fn run(state: &mut SelectorState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).1)
            .collect()
    }

    #[test]
    fn password_flow_emits_single_scheduled_submit() {
        let mut state = SelectorState::new(&Post::new(Some(PostStatus::Draft), None));
        let actions = run(
            &mut state,
            &[
                Event::Select(PostVisibility::Protected),
                Event::PasswordChanged("hunter2".into()),
                Event::SavePassword,
                Event::SavePassword,
                Event::Select(PostVisibility::Public),
            ],
        );
        assert_eq!(
            actions,
            vec![Action::ScheduleSubmit(VisibilityChoice::Protected {
                password: "hunter2".into()
            })]
        );
    }

    #[test]
    fn switching_away_from_protected_never_submits_protected() {
        let mut state = SelectorState::new(&Post::default());
        let actions = run(
            &mut state,
            &[
                Event::Select(PostVisibility::Protected),
                Event::PasswordChanged("draft".into()),
                Event::Select(PostVisibility::Private),
            ],
        );
        assert_eq!(actions, vec![Action::Submit(VisibilityChoice::Private)]);
    }

    #[test]
    fn cancel_then_save_does_nothing() {
        let mut state = SelectorState::new(&Post::default());
        let actions = run(
            &mut state,
            &[
                Event::Select(PostVisibility::Protected),
                Event::PasswordChanged("abc".into()),
                Event::CancelPasswordEntry,
                Event::SavePassword,
            ],
        );
        assert!(actions.is_empty());
        assert_eq!(state.choice(), VisibilityChoice::Public);
    }

    #[test]
    fn ignored_events_do_not_refresh() {
        let mut state = SelectorState::new(&Post::default());
        assert_eq!(handle_event(&mut state, &Event::PasswordChanged("x".into())), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::SavePassword), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::ClearPassword), (false, vec![]));
    }
}
