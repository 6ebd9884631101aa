//! The visibility picker flow: selector state plus the commit side effects.
//!
//! [`VisibilityFlow`] is what a presentation host owns for the lifetime of one
//! picker screen. It feeds gestures through [`handle_event`], then executes the
//! returned [`Action`]s: immediate commits go straight down the commit channel,
//! password commits are sent from a delayed task on the tokio runtime the flow
//! was created on.
//!
//! # Teardown
//!
//! Dropping the flow (or calling [`VisibilityFlow::dismiss`]) aborts a pending
//! delayed commit. The aborted task drops the commit sender without sending, so
//! the [`CommitReceiver`] resolves to [`VisibilityError::Dismissed`] instead of
//! delivering into a host that is already gone.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::channel::{commit_channel, CommitReceiver, CommitSender};
use crate::app::{handle_event, Action, Event, SelectorState};
use crate::domain::{Post, PostVisibility, Result, VisibilityChoice, VisibilityError};
use crate::ui::viewmodel::SelectorViewModel;
use crate::Config;

/// One running instance of the visibility picker.
#[derive(Debug)]
pub struct VisibilityFlow {
    state: SelectorState,

    /// Delay between saving a password and committing it.
    commit_delay: Duration,

    /// Taken by the first commit; `None` afterwards.
    commit_tx: Option<CommitSender>,

    /// Delayed password commit, if one is scheduled.
    pending_commit: Option<JoinHandle<()>>,

    /// Runtime the delayed commit is spawned on.
    runtime: Handle,
}

impl VisibilityFlow {
    /// Starts a picker for `post`.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::Runtime`] when called outside a tokio runtime,
    /// since a saved password could not be committed later.
    pub fn new(post: &Post, config: &Config) -> Result<(Self, CommitReceiver)> {
        let runtime = Handle::try_current()
            .map_err(|e| VisibilityError::Runtime(format!("no tokio runtime for commit timer: {e}")))?;
        let (commit_tx, receiver) = commit_channel();

        let flow = Self {
            state: SelectorState::new(post),
            commit_delay: config.commit_delay,
            commit_tx: Some(commit_tx),
            pending_commit: None,
            runtime,
        };
        Ok((flow, receiver))
    }

    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Current view model for the host to draw.
    #[must_use]
    pub fn viewmodel(&self) -> SelectorViewModel {
        self.state.compute_viewmodel()
    }

    /// True once the owner has been handed the choice.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.commit_tx.is_none()
            && self
                .pending_commit
                .as_ref()
                .map_or(true, JoinHandle::is_finished)
    }

    /// Feeds one host gesture through the state machine and runs its effects.
    ///
    /// Returns `true` when the view model changed.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        self.reap_pending_commit();
        let (refresh, actions) = handle_event(&mut self.state, event);
        for action in actions {
            self.execute(action);
        }
        refresh
    }

    pub fn select_visibility(&mut self, visibility: PostVisibility) -> bool {
        self.dispatch(&Event::Select(visibility))
    }

    pub fn edit_password(&mut self) -> bool {
        self.dispatch(&Event::EditPassword)
    }

    pub fn update_password_draft(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(&Event::PasswordChanged(text.into()))
    }

    pub fn clear_password(&mut self) -> bool {
        self.dispatch(&Event::ClearPassword)
    }

    pub fn toggle_secure_entry(&mut self) -> bool {
        self.dispatch(&Event::ToggleSecureEntry)
    }

    pub fn cancel_password_entry(&mut self) -> bool {
        self.dispatch(&Event::CancelPasswordEntry)
    }

    pub fn commit_password(&mut self) -> bool {
        self.dispatch(&Event::SavePassword)
    }

    /// Tears the picker down without waiting for a pending commit.
    pub fn dismiss(self) {
        tracing::debug!(phase = self.state.phase().name(), "picker dismissed");
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::Submit(choice) => {
                let Some(tx) = self.commit_tx.take() else {
                    tracing::warn!("commit already delivered, dropping second submit");
                    return;
                };
                send_commit(tx, choice);
            }
            Action::ScheduleSubmit(choice) => {
                let Some(tx) = self.commit_tx.take() else {
                    tracing::warn!("commit already delivered, dropping scheduled submit");
                    return;
                };
                let delay = self.commit_delay;
                tracing::debug!(delay = ?delay, "scheduling deferred commit");
                self.pending_commit = Some(self.runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    send_commit(tx, choice);
                }));
            }
        }
    }

    fn reap_pending_commit(&mut self) {
        if self.pending_commit.as_ref().is_some_and(JoinHandle::is_finished) {
            self.pending_commit = None;
            self.state.mark_committed();
        }
    }
}

impl Drop for VisibilityFlow {
    fn drop(&mut self) {
        if let Some(task) = self.pending_commit.take() {
            if !task.is_finished() {
                tracing::debug!("pending commit cancelled on teardown");
            }
            task.abort();
        }
    }
}

fn send_commit(tx: CommitSender, choice: VisibilityChoice) {
    let visibility = choice.visibility();
    if tx.send(choice).is_err() {
        tracing::debug!(%visibility, "commit receiver already dropped");
    } else {
        tracing::debug!(%visibility, "visibility commit delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostStatus;

    fn config() -> Config {
        Config {
            commit_delay: Duration::from_millis(550),
            ..Config::default()
        }
    }

    #[test]
    fn new_outside_runtime_is_an_error() {
        let result = VisibilityFlow::new(&Post::default(), &config());
        assert!(matches!(result, Err(VisibilityError::Runtime(_))));
    }

    #[tokio::test]
    async fn public_commits_immediately() {
        let (mut flow, mut receiver) = VisibilityFlow::new(&Post::default(), &config()).unwrap();
        assert!(flow.select_visibility(PostVisibility::Public));
        assert!(flow.is_committed());
        assert!(!flow.state().is_password_field_focused());
        assert!(matches!(receiver.try_take(), Some(Ok(VisibilityChoice::Public))));
    }

    #[tokio::test]
    async fn protected_selection_does_not_commit() {
        let (mut flow, mut receiver) = VisibilityFlow::new(&Post::default(), &config()).unwrap();
        flow.select_visibility(PostVisibility::Protected);
        assert!(receiver.try_take().is_none());
        assert!(!flow.is_committed());
    }

    #[tokio::test(start_paused = true)]
    async fn password_commit_waits_for_delay() {
        let (mut flow, mut receiver) = VisibilityFlow::new(&Post::default(), &config()).unwrap();
        flow.select_visibility(PostVisibility::Protected);
        flow.update_password_draft(" abc ");
        assert!(flow.commit_password());
        assert!(flow.state().is_committing());

        tokio::time::advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert!(receiver.try_take().is_none());

        let choice = receiver.await.unwrap();
        assert_eq!(choice, VisibilityChoice::Protected { password: "abc".into() });
        assert!(flow.is_committed());
    }

    #[tokio::test(start_paused = true)]
    async fn input_after_commit_is_ignored() {
        let (mut flow, receiver) = VisibilityFlow::new(&Post::default(), &config()).unwrap();
        flow.select_visibility(PostVisibility::Protected);
        flow.update_password_draft("pw");
        flow.commit_password();

        assert!(!flow.select_visibility(PostVisibility::Public));
        assert!(!flow.cancel_password_entry());
        assert!(!flow.commit_password());

        assert_eq!(receiver.await.unwrap(), VisibilityChoice::Protected { password: "pw".into() });
        assert!(!flow.select_visibility(PostVisibility::Private));
        assert!(matches!(
            flow.state().phase(),
            crate::app::SelectorPhase::Committed(VisibilityChoice::Protected { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_cancels_pending_commit() {
        let post = Post::new(Some(PostStatus::Publish), None);
        let (mut flow, receiver) = VisibilityFlow::new(&post, &config()).unwrap();
        flow.select_visibility(PostVisibility::Protected);
        flow.update_password_draft("secret");
        flow.commit_password();
        flow.dismiss();

        assert!(matches!(receiver.await, Err(VisibilityError::Dismissed)));
    }

    #[tokio::test]
    async fn dropping_without_commit_dismisses() {
        let (flow, receiver) = VisibilityFlow::new(&Post::default(), &config()).unwrap();
        drop(flow);
        assert!(matches!(receiver.await, Err(VisibilityError::Dismissed)));
    }
}
