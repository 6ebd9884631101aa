//! Post model consumed by the visibility picker.
//!
//! Only the two fields that decide a post's initial visibility are modelled: the
//! publish status and the optional password. Everything else about a post belongs
//! to the host application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::VisibilityError;

/// Publish status of a post.
///
/// Only [`PostStatus::PublishPrivate`] affects the picker; every other status
/// starts the picker on Public unless the post carries a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Publish,
    PublishPrivate,
    Scheduled,
    Pending,
    Trash,
}

impl PostStatus {
    /// Wire name of the status, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Publish => "publish",
            Self::PublishPrivate => "publish_private",
            Self::Scheduled => "scheduled",
            Self::Pending => "pending",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = VisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "publish" | "published" => Ok(Self::Publish),
            "publish_private" | "private" => Ok(Self::PublishPrivate),
            "scheduled" | "future" => Ok(Self::Scheduled),
            "pending" => Ok(Self::Pending),
            "trash" => Ok(Self::Trash),
            other => Err(VisibilityError::Config(format!("unknown post status: {other}"))),
        }
    }
}

/// The slice of a post the picker reads its initial state from.
///
/// A missing status is treated as [`PostStatus::Draft`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub status: Option<PostStatus>,
    pub password: Option<String>,
}

impl Post {
    #[must_use]
    pub const fn new(status: Option<PostStatus>, password: Option<String>) -> Self {
        Self { status, password }
    }

    /// Status with the draft fallback applied.
    #[must_use]
    pub fn effective_status(&self) -> PostStatus {
        self.status.unwrap_or_default()
    }

    /// The password, if present and non-empty.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_is_draft() {
        let post = Post::new(None, None);
        assert_eq!(post.effective_status(), PostStatus::Draft);
    }

    #[test]
    fn empty_password_is_absent() {
        let post = Post::new(Some(PostStatus::Publish), Some(String::new()));
        assert_eq!(post.password(), None);
    }

    #[test]
    fn status_parses_aliases() {
        assert_eq!("private".parse::<PostStatus>().ok(), Some(PostStatus::PublishPrivate));
        assert_eq!(" Publish ".parse::<PostStatus>().ok(), Some(PostStatus::Publish));
        assert!("archived".parse::<PostStatus>().is_err());
    }

    #[test]
    fn status_display_matches_serde() {
        let json = serde_json::to_string(&PostStatus::PublishPrivate).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", PostStatus::PublishPrivate));
    }
}
