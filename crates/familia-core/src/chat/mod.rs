//! Conversation state: messages, translations and optimistic sends.

pub mod model;
pub mod thread;

pub use model::{Message, SendMessageRequest, SupportedLanguage, Translation};
pub use thread::{ChatEntry, ChatThread, OutgoingMessage, OutgoingState};
