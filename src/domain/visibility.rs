//! Visibility levels and the committed choice.
//!
//! [`PostVisibility`] is the plain option a user taps on. [`VisibilityChoice`] is
//! what the picker commits: the same three levels, with the password attached to
//! the protected case so a non-protected choice cannot carry one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::post::{Post, PostStatus};

/// One of the selectable visibility levels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostVisibility {
    Public,
    Private,
    Protected,
}

impl PostVisibility {
    /// All options in the order they are listed to the user.
    pub const ALL: [Self; 3] = [Self::Public, Self::Private, Self::Protected];

    /// Derives the visibility of an existing post.
    ///
    /// A non-empty password wins over the status; otherwise a privately published
    /// post is Private and everything else is Public.
    ///
    /// # Example
    ///
    /// ```
    /// use post_visibility::domain::{PostStatus, PostVisibility};
    ///
    /// let v = PostVisibility::from_status(PostStatus::PublishPrivate, Some("pw"));
    /// assert_eq!(v, PostVisibility::Protected);
    /// ```
    #[must_use]
    pub fn from_status(status: PostStatus, password: Option<&str>) -> Self {
        if password.is_some_and(|p| !p.is_empty()) {
            Self::Protected
        } else if status == PostStatus::PublishPrivate {
            Self::Private
        } else {
            Self::Public
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Protected => "Password protected",
        }
    }

    #[must_use]
    pub const fn details(self) -> &'static str {
        match self {
            Self::Public => "Visible to everyone",
            Self::Private => "Only visible to site admins and editors",
            Self::Protected => "Visible to everyone but requires a password",
        }
    }
}

impl fmt::Display for PostVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A finalized visibility, as reported to the owner of the picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "visibility", rename_all = "snake_case")]
pub enum VisibilityChoice {
    Public,
    Private,
    Protected { password: String },
}

impl VisibilityChoice {
    /// Initial choice for an existing post, keeping its password when protected.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        match PostVisibility::from_status(post.effective_status(), post.password()) {
            PostVisibility::Public => Self::Public,
            PostVisibility::Private => Self::Private,
            PostVisibility::Protected => Self::Protected {
                password: post.password().unwrap_or_default().to_string(),
            },
        }
    }

    #[must_use]
    pub const fn visibility(&self) -> PostVisibility {
        match self {
            Self::Public => PostVisibility::Public,
            Self::Private => PostVisibility::Private,
            Self::Protected { .. } => PostVisibility::Protected,
        }
    }

    /// The raw password; empty for anything but [`VisibilityChoice::Protected`].
    #[must_use]
    pub fn password(&self) -> &str {
        match self {
            Self::Protected { password } => password,
            Self::Public | Self::Private => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_takes_precedence_over_status() {
        for status in [PostStatus::Draft, PostStatus::Publish, PostStatus::PublishPrivate] {
            assert_eq!(PostVisibility::from_status(status, Some("secret")), PostVisibility::Protected);
        }
    }

    #[test]
    fn private_status_without_password_is_private() {
        assert_eq!(PostVisibility::from_status(PostStatus::PublishPrivate, None), PostVisibility::Private);
        assert_eq!(PostVisibility::from_status(PostStatus::PublishPrivate, Some("")), PostVisibility::Private);
    }

    #[test]
    fn other_statuses_are_public() {
        assert_eq!(PostVisibility::from_status(PostStatus::Draft, None), PostVisibility::Public);
        assert_eq!(PostVisibility::from_status(PostStatus::Scheduled, None), PostVisibility::Public);
    }

    #[test]
    fn choice_from_post_keeps_password() {
        let post = Post::new(Some(PostStatus::Publish), Some("hunter2".to_string()));
        let choice = VisibilityChoice::from_post(&post);
        assert_eq!(choice, VisibilityChoice::Protected { password: "hunter2".to_string() });
        assert_eq!(choice.password(), "hunter2");
    }

    #[test]
    fn non_protected_choice_has_empty_password() {
        assert_eq!(VisibilityChoice::Private.password(), "");
        assert_eq!(VisibilityChoice::Public.visibility(), PostVisibility::Public);
    }

    #[test]
    fn choice_serializes_with_tag() {
        let json = serde_json::to_value(VisibilityChoice::Protected { password: "abc".into() })
            .unwrap_or_default();
        assert_eq!(json["visibility"], "protected");
        assert_eq!(json["password"], "abc");
    }
}
