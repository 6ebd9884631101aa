//! Single-shot commit channel.
//!
//! The sending half lives inside the flow and is moved out the first time a
//! commit happens, so a second commit has nothing to send with. The receiving
//! half goes to whoever owns the picker.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::domain::{Result, VisibilityChoice, VisibilityError};

pub(crate) type CommitSender = oneshot::Sender<VisibilityChoice>;

pub(crate) fn commit_channel() -> (CommitSender, CommitReceiver) {
    let (tx, rx) = oneshot::channel();
    (tx, CommitReceiver { rx })
}

/// Receiving half of a picker's commit.
///
/// Resolves to the committed [`VisibilityChoice`], or to
/// [`VisibilityError::Dismissed`] if the flow was torn down first.
///
/// # Example
///
/// ```rust
/// # async fn demo() -> post_visibility::Result<()> {
/// use post_visibility::{Config, Post, PostVisibility, VisibilityChoice, VisibilityFlow};
///
/// let (mut flow, receiver) = VisibilityFlow::new(&Post::default(), &Config::default())?;
/// flow.select_visibility(PostVisibility::Private);
/// assert_eq!(receiver.await?, VisibilityChoice::Private);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use = "the commit is lost if the receiver is dropped"]
pub struct CommitReceiver {
    rx: oneshot::Receiver<VisibilityChoice>,
}

impl CommitReceiver {
    /// Non-blocking check for hosts that poll from their own event loop.
    ///
    /// Returns `None` while nothing has been committed yet. Once a value has been
    /// taken, later calls report [`VisibilityError::Dismissed`].
    pub fn try_take(&mut self) -> Option<Result<VisibilityChoice>> {
        match self.rx.try_recv() {
            Ok(choice) => Some(Ok(choice)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(VisibilityError::Dismissed)),
        }
    }
}

impl Future for CommitReceiver {
    type Output = Result<VisibilityChoice>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.map_err(|_| VisibilityError::Dismissed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_take_reports_pending_then_value() {
        let (tx, mut rx) = commit_channel();
        assert!(rx.try_take().is_none());
        tx.send(VisibilityChoice::Public).ok();
        assert!(matches!(rx.try_take(), Some(Ok(VisibilityChoice::Public))));
    }

    #[tokio::test]
    async fn dropped_sender_means_dismissed() {
        let (tx, rx) = commit_channel();
        drop(tx);
        assert!(matches!(rx.await, Err(VisibilityError::Dismissed)));
    }
}
