//! Flow runtime for the visibility picker.
//!
//! Where [`crate::app`] decides *what* happens, this module makes it happen: it
//! owns the single-shot commit channel and the delayed commit task.
//!
//! # Modules
//!
//! - `channel`: The one-shot commit channel and its [`CommitReceiver`]
//! - `picker`: [`VisibilityFlow`], the owner of one picker instance
//!
//! # Example
//!
//! ```rust
//! # async fn demo() -> post_visibility::Result<()> {
//! use post_visibility::flow::VisibilityFlow;
//! use post_visibility::{Config, Post, PostVisibility};
//!
//! let (mut flow, receiver) = VisibilityFlow::new(&Post::default(), &Config::default())?;
//! flow.select_visibility(PostVisibility::Protected);
//! flow.update_password_draft("hunter2");
//! flow.commit_password();
//! let choice = receiver.await?;
//! assert_eq!(choice.password(), "hunter2");
//! # Ok(())
//! # }
//! ```

mod channel;
mod picker;

pub use channel::CommitReceiver;
pub use picker::VisibilityFlow;
