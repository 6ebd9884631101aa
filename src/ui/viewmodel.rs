//! View model types representing presentable picker state.
//!
//! View models are created via `SelectorState::compute_viewmodel()` and handed to
//! whatever host draws the picker. They contain no business logic, only
//! display-ready data; laying them out is the host's job.
//!
//! # Example
//!
//! ```rust
//! use post_visibility::app::SelectorState;
//! use post_visibility::Post;
//!
//! let vm = SelectorState::new(&Post::default()).compute_viewmodel();
//! assert_eq!(vm.rows.len(), 3);
//! assert!(vm.password_entry.is_none());
//! ```

use crate::domain::PostVisibility;
use serde::Serialize;

/// Complete view model for one picker screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorViewModel {
    /// Navigation title.
    pub title: String,

    /// One row per visibility option, in display order.
    pub rows: Vec<VisibilityRow>,

    /// Password input, present while the choice is password protected.
    pub password_entry: Option<PasswordEntry>,

    /// True once a commit has started; the whole form stops taking input.
    pub is_disabled: bool,
}

/// A selectable visibility option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityRow {
    pub visibility: PostVisibility,
    pub title: String,
    pub details: String,

    /// Shows the checkmark. Hidden for every row while a password is being typed.
    pub is_checked: bool,

    /// De-emphasized while the password field has focus.
    pub is_dimmed: bool,
}

/// The password input below the protected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordEntry {
    /// Draft text, masked when `is_secure` is set.
    pub display_text: String,
    pub is_focused: bool,
    pub is_secure: bool,
    pub show_clear_button: bool,

    /// Cancel/Save buttons, only while the field has focus.
    pub controls: Option<PasswordControls>,
}

/// Cancel/Save button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordControls {
    /// Disabled while the trimmed draft is empty.
    pub save_enabled: bool,
}
