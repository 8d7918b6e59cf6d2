//! Background polling of an open conversation.

use crate::chat_conversation::ChatConversation;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Owns a running poll loop. Dropping the handle stops it.
pub struct PollHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Stops the loop. No request starts after this returns.
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stops the loop and waits for the task to finish.
    pub async fn join(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::warn!(error = %e, "Chat poller task ended abnormally");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Polls `conversation` every `interval` until the handle is stopped or dropped.
///
/// Poll errors are logged and the loop keeps going.
pub fn spawn_chat_poller(conversation: Arc<ChatConversation>, interval: Duration) -> PollHandle {
    let token = CancellationToken::new();
    let child = token.clone();

    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                _ = child.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            tokio::select! {
                biased;
                _ = child.cancelled() => break,
                result = conversation.poll_once() => {
                    if let Err(e) = result {
                        tracing::warn!(error = %e, "Chat poll failed");
                    }
                }
            }
        }
        tracing::debug!("Chat poller stopped");
    });

    PollHandle {
        token,
        task: Some(task),
    }
}
