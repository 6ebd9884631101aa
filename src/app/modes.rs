//! Phase types for the selector state machine.
//!
//! The selector is always in exactly one [`SelectorPhase`]. Each phase carries only
//! the data that is meaningful in it, so a focused password field without a
//! protected choice, or a password attached to a public choice, cannot be built.
//!
//! # State Machine
//!
//! ```text
//! Idle(choice) ──select(Public|Private)──────────────▶ Committed   (commit now)
//! Idle(choice) ──select(Protected)───────────────────▶ EnteringPassword("")
//! Idle(Protected(pw)) ──edit password────────────────▶ EnteringPassword(pw)
//! EnteringPassword ──type / clear / select(Protected)▶ EnteringPassword
//! EnteringPassword ──select(Public|Private)──────────▶ Committed   (draft dropped)
//! EnteringPassword ──cancel──────────────────────────▶ Idle(Public)
//! EnteringPassword ──save (non-blank)────────────────▶ Committing  (commit after delay)
//! ```
//!
//! `Committing` and `Committed` accept no further input.
//!
//! # Example
//!
//! ```rust
//! use post_visibility::app::SelectorPhase;
//! use post_visibility::VisibilityChoice;
//!
//! let phase = SelectorPhase::Idle(VisibilityChoice::Public);
//! assert!(!phase.is_frozen());
//! ```

use crate::domain::VisibilityChoice;

/// Current phase of the visibility selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPhase {
    /// A choice is shown and the password field (if any) is not focused.
    ///
    /// `Idle(Protected { .. })` only occurs before any input, when the post
    /// already had a password.
    Idle(VisibilityChoice),

    /// Protected is selected and the password field has focus.
    EnteringPassword {
        /// Working password text, untrimmed.
        draft: String,
    },

    /// A password was saved; the commit is scheduled but has not fired yet.
    Committing(VisibilityChoice),

    /// The commit has been handed to the owner. Terminal.
    Committed(VisibilityChoice),
}

impl SelectorPhase {
    /// True once a commit has been initiated; all input is ignored from here on.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        matches!(self, Self::Committing(_) | Self::Committed(_))
    }

    #[must_use]
    pub const fn is_entering_password(&self) -> bool {
        matches!(self, Self::EnteringPassword { .. })
    }

    /// Short name for log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle(_) => "idle",
            Self::EnteringPassword { .. } => "entering_password",
            Self::Committing(_) => "committing",
            Self::Committed(_) => "committed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_commit_phases_are_frozen() {
        assert!(!SelectorPhase::Idle(VisibilityChoice::Private).is_frozen());
        assert!(!SelectorPhase::EnteringPassword { draft: "x".into() }.is_frozen());
        assert!(SelectorPhase::Committing(VisibilityChoice::Public).is_frozen());
        assert!(SelectorPhase::Committed(VisibilityChoice::Public).is_frozen());
    }
}
