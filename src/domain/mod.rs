//! Domain layer for the visibility picker.
//!
//! Core types independent of any presentation host or async runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`post`]: The post fields the picker starts from
//! - [`visibility`]: Selectable visibility levels and the committed choice
//!
//! # Examples
//!
//! ```
//! use post_visibility::domain::{Post, PostStatus, VisibilityChoice};
//!
//! let post = Post::new(Some(PostStatus::PublishPrivate), None);
//! assert_eq!(VisibilityChoice::from_post(&post), VisibilityChoice::Private);
//! ```

pub mod error;
pub mod post;
pub mod visibility;

pub use error::{Result, VisibilityError};
pub use post::{Post, PostStatus};
pub use visibility::{PostVisibility, VisibilityChoice};
