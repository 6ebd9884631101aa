//! Presentation layer types.
//!
//! The crate does not draw anything. It computes a
//! [`SelectorViewModel`](viewmodel::SelectorViewModel) from selector state and
//! leaves layout to the host.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types consumed by hosts

pub mod viewmodel;

pub use viewmodel::{PasswordControls, PasswordEntry, SelectorViewModel, VisibilityRow};
