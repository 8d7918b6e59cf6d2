//! Use cases of the Familia client.
//!
//! Each use case holds its gateways as trait objects and reports failures
//! through a [`ToastSink`](toast::ToastSink), so front ends only wire
//! concrete adapters together.

pub mod app_session;
pub mod avatar_studio;
pub mod chat_conversation;
pub mod chat_poller;
pub mod quick_match;
pub mod toast;

#[cfg(test)]
mod test_support;

pub use app_session::{AppSession, SessionState};
pub use avatar_studio::AvatarStudio;
pub use chat_conversation::{ChatConversation, SendOutcome};
pub use chat_poller::{PollHandle, spawn_chat_poller};
pub use quick_match::QuickMatch;
pub use toast::{RecordingToasts, Toast, ToastLevel, ToastSink, TracingToasts};
