//! Client-side state of one open conversation.
//!
//! Holds the confirmed server tail plus any locally pending sends. Poll
//! results replace the confirmed list; pending entries survive polls until
//! their send settles.

use super::model::Message;
use crate::error::{FamiliaError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of an optimistic send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OutgoingState {
    Pending,
    Confirmed { server_id: String },
    Failed { reason: String },
}

/// A message the user sent that the server has not confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub temp_id: String,
    pub relationship_id: String,
    pub text: String,
    pub state: OutgoingState,
}

impl OutgoingMessage {
    pub fn new(relationship_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            temp_id: format!("temp-{}", Uuid::new_v4()),
            relationship_id: relationship_id.into(),
            text: text.into(),
            state: OutgoingState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, OutgoingState::Pending)
    }
}

/// A row in the rendered conversation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChatEntry<'a> {
    Confirmed(&'a Message),
    Pending(&'a OutgoingMessage),
}

/// The open conversation for one relationship.
#[derive(Debug, Clone, Default)]
pub struct ChatThread {
    relationship_id: String,
    confirmed: Vec<Message>,
    outgoing: Vec<OutgoingMessage>,
    loaded: bool,
}

impl ChatThread {
    pub fn new(relationship_id: impl Into<String>) -> Self {
        Self {
            relationship_id: relationship_id.into(),
            ..Default::default()
        }
    }

    pub fn relationship_id(&self) -> &str {
        &self.relationship_id
    }

    /// Installs the initial history. Polling is only allowed after this.
    pub fn load(&mut self, messages: Vec<Message>) {
        self.confirmed = messages;
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn confirmed(&self) -> &[Message] {
        &self.confirmed
    }

    pub fn pending(&self) -> &[OutgoingMessage] {
        &self.outgoing
    }

    /// Confirmed messages in server order, then pending sends in send order.
    pub fn entries(&self) -> Vec<ChatEntry<'_>> {
        self.confirmed
            .iter()
            .map(ChatEntry::Confirmed)
            .chain(self.outgoing.iter().map(ChatEntry::Pending))
            .collect()
    }

    pub fn last_message_id(&self) -> Option<&str> {
        self.confirmed.last().map(|m| m.id.as_str())
    }

    /// Whether a fetched tail differs from the current one by count or last id.
    pub fn tail_differs(&self, fetched: &[Message]) -> bool {
        fetched.len() != self.confirmed.len()
            || fetched.last().map(|m| m.id.as_str()) != self.last_message_id()
    }

    /// Applies a poll result.
    ///
    /// Returns `true` when the confirmed list was replaced. Pending sends are
    /// left untouched.
    pub fn apply_poll(&mut self, fetched: Vec<Message>) -> bool {
        if !self.tail_differs(&fetched) {
            return false;
        }
        self.confirmed = fetched;
        true
    }

    /// Validates the draft and appends a pending outgoing entry.
    ///
    /// # Errors
    ///
    /// Returns `FamiliaError::Validation` when the text is blank.
    pub fn begin_send(&mut self, text: &str) -> Result<OutgoingMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FamiliaError::validation("text", "Message cannot be empty"));
        }

        let outgoing = OutgoingMessage::new(self.relationship_id.clone(), text);
        self.outgoing.push(outgoing.clone());
        Ok(outgoing)
    }

    /// Replaces a pending entry with the server's message.
    ///
    /// If a poll already delivered the same server id, the message is not
    /// inserted twice. Returns the settled entry, or `None` if `temp_id` is unknown.
    pub fn confirm_send(&mut self, temp_id: &str, message: Message) -> Option<OutgoingMessage> {
        let index = self.outgoing.iter().position(|o| o.temp_id == temp_id)?;
        let mut settled = self.outgoing.remove(index);
        settled.state = OutgoingState::Confirmed {
            server_id: message.id.clone(),
        };

        if !self.confirmed.iter().any(|m| m.id == message.id) {
            self.confirmed.push(message);
        }
        Some(settled)
    }

    /// Drops a pending entry after a failed send.
    ///
    /// Returns the entry in the `Failed` state so the caller can restore the
    /// draft text for a manual retry.
    pub fn fail_send(&mut self, temp_id: &str, reason: impl Into<String>) -> Option<OutgoingMessage> {
        let index = self.outgoing.iter().position(|o| o.temp_id == temp_id)?;
        let mut failed = self.outgoing.remove(index);
        failed.state = OutgoingState::Failed {
            reason: reason.into(),
        };
        Some(failed)
    }
}
