//! Selector state and view model computation.
//!
//! [`SelectorState`] is the single source of truth for one run of the picker. It
//! wraps a [`SelectorPhase`] and exposes the flat view a host expects (current
//! choice, password draft, focus, committing flag) through accessors, so the
//! invariants between those values hold by construction.
//!
//! Mutating methods return `true` when something changed. Operations that are not
//! valid in the current phase are ignored and return `false`; the host is expected
//! to have disabled the control that triggered them.
//!
//! # Example
//!
//! ```rust
//! use post_visibility::app::SelectorState;
//! use post_visibility::domain::{Post, PostStatus, PostVisibility};
//!
//! let mut state = SelectorState::new(&Post::new(Some(PostStatus::Draft), None));
//! state.select_visibility(PostVisibility::Protected);
//! state.update_password_draft("hunter2");
//! let action = state.commit_password();
//! assert!(action.is_some());
//! assert!(state.is_committing());
//! ```

use super::actions::Action;
use super::modes::SelectorPhase;
use crate::domain::{Post, PostVisibility, VisibilityChoice};
use crate::ui::viewmodel::{PasswordControls, PasswordEntry, SelectorViewModel, VisibilityRow};

/// Character used to mask the password while secure entry is on.
const MASK_CHAR: char = '•';

/// Title shown above the list of options.
const TITLE: &str = "Visibility";

/// State of one visibility picker instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    phase: SelectorPhase,

    /// Whether the password is masked. Purely presentational.
    secure_entry: bool,
}

impl SelectorState {
    /// Builds the initial state from an existing post.
    ///
    /// A post with a password starts on Protected with that password as the draft;
    /// a privately published post starts on Private; anything else on Public.
    #[must_use]
    pub fn new(post: &Post) -> Self {
        let choice = VisibilityChoice::from_post(post);
        tracing::debug!(
            status = %post.effective_status(),
            initial = %choice.visibility(),
            "selector state initialized"
        );
        Self {
            phase: SelectorPhase::Idle(choice),
            secure_entry: true,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &SelectorPhase {
        &self.phase
    }

    /// The current choice. While entering a password this is `Protected` with the
    /// untrimmed draft.
    #[must_use]
    pub fn choice(&self) -> VisibilityChoice {
        match &self.phase {
            SelectorPhase::Idle(choice)
            | SelectorPhase::Committing(choice)
            | SelectorPhase::Committed(choice) => choice.clone(),
            SelectorPhase::EnteringPassword { draft } => VisibilityChoice::Protected {
                password: draft.clone(),
            },
        }
    }

    #[must_use]
    pub fn visibility(&self) -> PostVisibility {
        match &self.phase {
            SelectorPhase::Idle(choice)
            | SelectorPhase::Committing(choice)
            | SelectorPhase::Committed(choice) => choice.visibility(),
            SelectorPhase::EnteringPassword { .. } => PostVisibility::Protected,
        }
    }

    /// The password text, empty unless the choice is protected.
    #[must_use]
    pub fn password_draft(&self) -> &str {
        match &self.phase {
            SelectorPhase::Idle(choice)
            | SelectorPhase::Committing(choice)
            | SelectorPhase::Committed(choice) => choice.password(),
            SelectorPhase::EnteringPassword { draft } => draft.as_str(),
        }
    }

    #[must_use]
    pub const fn is_password_field_focused(&self) -> bool {
        self.phase.is_entering_password()
    }

    #[must_use]
    pub const fn is_committing(&self) -> bool {
        self.phase.is_frozen()
    }

    #[must_use]
    pub const fn is_secure_entry(&self) -> bool {
        self.secure_entry
    }

    /// True when the trimmed draft is non-empty, i.e. saving would commit.
    #[must_use]
    pub fn can_commit_password(&self) -> bool {
        matches!(&self.phase, SelectorPhase::EnteringPassword { draft } if !draft.trim().is_empty())
    }

    /// Selects a visibility option.
    ///
    /// Protected focuses the password field with an empty draft. Public and Private
    /// drop any unsaved draft and produce an immediate [`Action::Submit`].
    pub fn select_visibility(&mut self, visibility: PostVisibility) -> (bool, Option<Action>) {
        if self.phase.is_frozen() {
            tracing::trace!(%visibility, phase = self.phase.name(), "select ignored");
            return (false, None);
        }

        let choice = match visibility {
            PostVisibility::Protected => {
                tracing::debug!(from = self.phase.name(), "password entry started");
                self.phase = SelectorPhase::EnteringPassword { draft: String::new() };
                return (true, None);
            }
            PostVisibility::Public => VisibilityChoice::Public,
            PostVisibility::Private => VisibilityChoice::Private,
        };

        if self.phase.is_entering_password() {
            tracing::debug!("unsaved password draft discarded");
        }
        tracing::debug!(%visibility, "visibility committed");
        self.phase = SelectorPhase::Committed(choice.clone());
        (true, Some(Action::Submit(choice)))
    }

    /// Refocuses the password field of a post that already had a password,
    /// keeping that password as the draft.
    pub fn edit_password(&mut self) -> bool {
        let SelectorPhase::Idle(VisibilityChoice::Protected { password }) = &self.phase else {
            tracing::trace!(phase = self.phase.name(), "edit password ignored");
            return false;
        };
        let draft = password.clone();
        self.phase = SelectorPhase::EnteringPassword { draft };
        true
    }

    /// Replaces the password draft. Ignored unless the password field has focus.
    pub fn update_password_draft(&mut self, text: &str) -> bool {
        match &mut self.phase {
            SelectorPhase::EnteringPassword { draft } => {
                if draft.as_str() == text {
                    return false;
                }
                text.clone_into(draft);
                true
            }
            other => {
                tracing::trace!(phase = other.name(), "password edit ignored");
                false
            }
        }
    }

    /// Empties the password draft while the field has focus.
    pub fn clear_password(&mut self) -> bool {
        match &mut self.phase {
            SelectorPhase::EnteringPassword { draft } if !draft.is_empty() => {
                draft.clear();
                true
            }
            _ => false,
        }
    }

    /// Abandons password entry and falls back to Public without committing.
    pub fn cancel_password_entry(&mut self) -> bool {
        if !self.phase.is_entering_password() {
            tracing::trace!(phase = self.phase.name(), "cancel ignored");
            return false;
        }
        tracing::debug!("password entry cancelled");
        self.phase = SelectorPhase::Idle(VisibilityChoice::Public);
        true
    }

    /// Saves the trimmed password and moves to `Committing`.
    ///
    /// Returns [`Action::ScheduleSubmit`] on success. Blank drafts are ignored.
    pub fn commit_password(&mut self) -> Option<Action> {
        let SelectorPhase::EnteringPassword { draft } = &self.phase else {
            tracing::trace!(phase = self.phase.name(), "save ignored");
            return None;
        };
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            tracing::trace!("save ignored, blank password");
            return None;
        }

        let choice = VisibilityChoice::Protected {
            password: trimmed.to_string(),
        };
        tracing::debug!(password_len = trimmed.len(), "password saved, commit scheduled");
        self.phase = SelectorPhase::Committing(choice.clone());
        Some(Action::ScheduleSubmit(choice))
    }

    /// Flips between masked and plain password display.
    pub fn toggle_secure_entry(&mut self) -> bool {
        if self.phase.is_frozen() {
            return false;
        }
        self.secure_entry = !self.secure_entry;
        true
    }

    /// Records that a scheduled commit has been delivered.
    pub(crate) fn mark_committed(&mut self) {
        if let SelectorPhase::Committing(choice) = &self.phase {
            self.phase = SelectorPhase::Committed(choice.clone());
        }
    }

    /// Computes the presentation model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> SelectorViewModel {
        let focused = self.is_password_field_focused();
        let current = self.visibility();

        let rows = PostVisibility::ALL
            .iter()
            .map(|&visibility| VisibilityRow {
                visibility,
                title: visibility.title().to_string(),
                details: visibility.details().to_string(),
                is_checked: current == visibility && !focused,
                is_dimmed: focused && visibility != PostVisibility::Protected,
            })
            .collect();

        SelectorViewModel {
            title: TITLE.to_string(),
            rows,
            password_entry: self.compute_password_entry(),
            is_disabled: self.is_committing(),
        }
    }

    fn compute_password_entry(&self) -> Option<PasswordEntry> {
        if self.visibility() != PostVisibility::Protected {
            return None;
        }

        let focused = self.is_password_field_focused();
        let draft = self.password_draft();
        let display_text = if self.secure_entry {
            std::iter::repeat(MASK_CHAR).take(draft.chars().count()).collect()
        } else {
            draft.to_string()
        };

        Some(PasswordEntry {
            display_text,
            is_focused: focused,
            is_secure: self.secure_entry,
            show_clear_button: focused && !draft.is_empty(),
            controls: focused.then(|| PasswordControls {
                save_enabled: self.can_commit_password(),
            }),
        })
    }
}
