//! One open conversation: initial load, polling, optimistic send and
//! on-demand translation.

use crate::toast::ToastSink;
use familia_core::chat::{
    ChatThread, Message, OutgoingMessage, SendMessageRequest, SupportedLanguage, Translation,
};
use familia_core::error::{FamiliaError, Result};
use familia_core::gateway::{ChatGateway, TranslationGateway};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// How a send settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Sent(Message),
    /// The pending entry was dropped; `draft` holds the text for a manual retry.
    Failed { draft: String, error: FamiliaError },
}

pub struct ChatConversation {
    chat: Arc<dyn ChatGateway>,
    translator: Arc<dyn TranslationGateway>,
    toasts: Arc<dyn ToastSink>,
    history_limit: u32,
    thread: Mutex<ChatThread>,
    translations: Mutex<HashMap<(String, String), Translation>>,
    show_translation: AtomicBool,
}

impl ChatConversation {
    pub fn new(
        relationship_id: impl Into<String>,
        chat: Arc<dyn ChatGateway>,
        translator: Arc<dyn TranslationGateway>,
        toasts: Arc<dyn ToastSink>,
        history_limit: u32,
    ) -> Self {
        Self {
            chat,
            translator,
            toasts,
            history_limit,
            thread: Mutex::new(ChatThread::new(relationship_id)),
            translations: Mutex::new(HashMap::new()),
            show_translation: AtomicBool::new(true),
        }
    }

    pub async fn relationship_id(&self) -> String {
        self.thread.lock().await.relationship_id().to_string()
    }

    /// Fetches the initial history. Failures are toasted and returned.
    pub async fn load(&self) -> Result<()> {
        let relationship_id = self.relationship_id().await;
        match self.chat.messages(&relationship_id, self.history_limit).await {
            Ok(messages) => {
                tracing::debug!(%relationship_id, count = messages.len(), "Loaded chat history");
                self.thread.lock().await.load(messages);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%relationship_id, error = %e, "Failed to load chat history");
                self.toasts.error(&e.user_message());
                Err(e)
            }
        }
    }

    /// Fetches the latest tail once.
    ///
    /// Returns whether the confirmed list changed. Does nothing before the
    /// initial load.
    pub async fn poll_once(&self) -> Result<bool> {
        let relationship_id = {
            let thread = self.thread.lock().await;
            if !thread.is_loaded() {
                return Ok(false);
            }
            thread.relationship_id().to_string()
        };

        let fetched = self.chat.messages(&relationship_id, self.history_limit).await?;
        let changed = self.thread.lock().await.apply_poll(fetched);
        if changed {
            tracing::debug!(%relationship_id, "Chat tail changed");
        }
        Ok(changed)
    }

    /// Sends a text message optimistically.
    ///
    /// The pending entry is visible immediately and is replaced by the
    /// server's message on success. On failure the entry is removed, the
    /// error is toasted and the draft is handed back. Nothing is retried.
    ///
    /// # Errors
    ///
    /// `Validation` for blank text; no request is made.
    pub async fn send(&self, text: &str) -> Result<SendOutcome> {
        let outgoing: OutgoingMessage = self.thread.lock().await.begin_send(text)?;
        let request = SendMessageRequest::text(outgoing.relationship_id.clone(), outgoing.text.clone());

        match self.chat.send(&request).await {
            Ok(message) => {
                self.thread
                    .lock()
                    .await
                    .confirm_send(&outgoing.temp_id, message.clone());
                Ok(SendOutcome::Sent(message))
            }
            Err(error) => {
                tracing::warn!(
                    relationship_id = %outgoing.relationship_id,
                    error = %error,
                    "Message send failed"
                );
                let reason = error.user_message();
                self.thread.lock().await.fail_send(&outgoing.temp_id, &reason);
                self.toasts.error(&reason);
                Ok(SendOutcome::Failed {
                    draft: outgoing.text,
                    error,
                })
            }
        }
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.thread.lock().await.confirmed().to_vec()
    }

    pub async fn pending(&self) -> Vec<OutgoingMessage> {
        self.thread.lock().await.pending().to_vec()
    }

    /// Snapshot of the whole thread for rendering.
    pub async fn thread(&self) -> ChatThread {
        self.thread.lock().await.clone()
    }

    pub fn show_translation(&self) -> bool {
        self.show_translation.load(Ordering::SeqCst)
    }

    /// Flips the translation toggle and returns the new value.
    pub fn toggle_translation(&self) -> bool {
        !self.show_translation.fetch_xor(true, Ordering::SeqCst)
    }

    /// Text of a message as currently displayed.
    pub async fn display_text(&self, message_id: &str) -> Option<String> {
        let show = self.show_translation();
        let thread = self.thread.lock().await;
        thread
            .confirmed()
            .iter()
            .find(|m| m.id == message_id)
            .map(|m| m.display_text(show).to_string())
    }

    /// Translates a confirmed message, cached per message and target language.
    pub async fn translate_message(&self, message_id: &str, target_lang: &str) -> Result<Translation> {
        let key = (message_id.to_string(), target_lang.to_string());
        if let Some(cached) = self.translations.lock().await.get(&key) {
            return Ok(cached.clone());
        }

        let (text, source_lang) = {
            let thread = self.thread.lock().await;
            let message = thread
                .confirmed()
                .iter()
                .find(|m| m.id == message_id)
                .ok_or_else(|| FamiliaError::not_found("Message", message_id))?;
            (message.original_text.clone(), message.original_language.clone())
        };

        let translation = self
            .translator
            .translate(&text, source_lang.as_deref(), target_lang)
            .await
            .inspect_err(|e| self.toasts.error(&e.user_message()))?;

        self.translations
            .lock()
            .await
            .insert(key, translation.clone());
        Ok(translation)
    }

    pub async fn languages(&self) -> Result<Vec<SupportedLanguage>> {
        self.translator.languages().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CallCounts, MockBackend, message};
    use crate::toast::RecordingToasts;

    fn conversation(backend: &Arc<MockBackend>, toasts: &Arc<RecordingToasts>) -> ChatConversation {
        ChatConversation::new("rel-1", backend.clone(), backend.clone(), toasts.clone(), 50)
    }

    #[tokio::test]
    async fn test_poll_before_load_makes_no_request() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);

        assert!(!chat.poll_once().await.unwrap());
        assert_eq!(CallCounts::get(&backend.calls.messages), 0);
    }

    #[tokio::test]
    async fn test_poll_replaces_tail_only_when_changed() {
        let backend = Arc::new(MockBackend::new());
        backend.set_messages(vec![message("m1", "oi"), message("m2", "tudo bem?")]);
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);

        chat.load().await.unwrap();
        assert!(!chat.poll_once().await.unwrap());

        backend.messages.lock().unwrap().push(message("m3", "sim!"));
        assert!(chat.poll_once().await.unwrap());
        assert_eq!(chat.messages().await.len(), 3);
    }

    #[tokio::test]
    async fn test_send_success_replaces_pending() {
        let backend = Arc::new(MockBackend::new());
        backend.set_messages(vec![message("m1", "oi")]);
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);
        chat.load().await.unwrap();

        let outcome = chat.send("  good morning  ").await.unwrap();

        let SendOutcome::Sent(sent) = outcome else {
            panic!("expected Sent");
        };
        assert_eq!(sent.original_text, "good morning");
        assert!(chat.pending().await.is_empty());
        assert_eq!(chat.messages().await.last().unwrap().id, sent.id);

        // the next poll sees the same tail and does not duplicate it
        assert!(!chat.poll_once().await.unwrap());
        assert_eq!(chat.messages().await.len(), 2);
    }

    #[tokio::test]
    async fn test_send_failure_restores_draft_and_toasts() {
        let backend = Arc::new(MockBackend::new());
        MockBackend::fail_with(&backend.send_error, FamiliaError::network("timed out"));
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);
        chat.load().await.unwrap();

        let outcome = chat.send("see you soon").await.unwrap();

        match outcome {
            SendOutcome::Failed { draft, error } => {
                assert_eq!(draft, "see you soon");
                assert!(error.is_network());
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(chat.pending().await.is_empty());
        assert!(chat.messages().await.is_empty());
        assert_eq!(toasts.errors(), vec!["Could not reach the Familia server"]);
        assert_eq!(CallCounts::get(&backend.calls.send), 1);
    }

    #[tokio::test]
    async fn test_blank_send_is_rejected_without_request() {
        let backend = Arc::new(MockBackend::new());
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);
        chat.load().await.unwrap();

        let err = chat.send("   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(CallCounts::get(&backend.calls.send), 0);
    }

    #[tokio::test]
    async fn test_translation_is_cached_per_language() {
        let backend = Arc::new(MockBackend::new());
        backend.set_messages(vec![message("m1", "saudade")]);
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);
        chat.load().await.unwrap();

        let first = chat.translate_message("m1", "en").await.unwrap();
        let again = chat.translate_message("m1", "en").await.unwrap();
        assert_eq!(first, again);
        assert_eq!(first.translated_text, "[en] saudade");
        assert_eq!(CallCounts::get(&backend.calls.translate), 1);

        chat.translate_message("m1", "ja").await.unwrap();
        assert_eq!(CallCounts::get(&backend.calls.translate), 2);

        let missing = chat.translate_message("m9", "en").await.unwrap_err();
        assert!(missing.is_not_found());
    }

    #[tokio::test]
    async fn test_translation_toggle_controls_display_text() {
        let backend = Arc::new(MockBackend::new());
        let mut translated = message("m1", "obrigado");
        translated.translated_text = Some("thank you".into());
        backend.set_messages(vec![translated]);
        let toasts = Arc::new(RecordingToasts::new());
        let chat = conversation(&backend, &toasts);
        chat.load().await.unwrap();

        assert!(chat.show_translation());
        assert_eq!(chat.display_text("m1").await.as_deref(), Some("thank you"));
        assert!(!chat.toggle_translation());
        assert_eq!(chat.display_text("m1").await.as_deref(), Some("obrigado"));
        assert!(chat.toggle_translation());
    }
}
