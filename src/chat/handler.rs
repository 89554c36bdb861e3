//! The chat submission handler.
//!
//! A submission runs in two halves. [`ChatHandler::accept`] is synchronous: it
//! trims the input, records the user's entry and clears the field.
//! [`ChatHandler::respond`] is the single suspension point: it sends the
//! prompt and renders whatever comes back. The transcript lock is never held
//! across the await, so several replies may be outstanding at once and land
//! in the order the bridge answers them.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

use super::render::{render_failure, render_reply};
use crate::bridge::{Action, Backend, BridgeError, LlmResponse};
use crate::input::{PromptInput, trim_prompt};
use crate::transcript::{Entry, Transcript};

/// What the bridge made of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Actions(Vec<Action>),
    NoActions,
}

impl From<LlmResponse> for Reply {
    fn from(response: LlmResponse) -> Self {
        response.actions.map_or(Self::NoActions, Self::Actions)
    }
}

/// Reads prompts, forwards them to a [`Backend`] and renders the replies.
pub struct ChatHandler<B> {
    backend: B,
}

impl<B: Backend> ChatHandler<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Takes the prompt out of `input` and records it.
    ///
    /// Returns `None` without touching anything when the trimmed input is empty.
    pub fn accept<I, T>(&self, input: &mut I, transcript: &Mutex<T>) -> Option<String>
    where
        I: PromptInput + ?Sized,
        T: Transcript + ?Sized,
    {
        let text = trim_prompt(input.value());
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();

        lock(transcript).append(Entry::user(format!("You: {text}")));
        input.clear();
        Some(text)
    }

    /// Sends an accepted prompt and renders the outcome.
    pub async fn respond<T>(&self, prompt: &str, transcript: &Mutex<T>) -> Result<Reply, BridgeError>
    where
        T: Transcript + ?Sized,
    {
        let result = self.backend.submit(prompt).await;
        self.finish(result, transcript)
    }

    /// Renders a finished request into the transcript and scrolls to it.
    ///
    /// Failures get a visible assistant entry and are handed back to the caller.
    pub fn finish<T>(
        &self,
        result: Result<LlmResponse, BridgeError>,
        transcript: &Mutex<T>,
    ) -> Result<Reply, BridgeError>
    where
        T: Transcript + ?Sized,
    {
        let mut transcript = lock(transcript);
        let outcome = match result {
            Ok(response) => {
                debug!(?response, "rendering reply");
                transcript.append(Entry::assistant(render_reply(&response)));
                Ok(Reply::from(response))
            }
            Err(err) => {
                debug!(error = %err, "prompt failed");
                transcript.append(Entry::assistant(render_failure(&err)));
                Err(err)
            }
        };
        transcript.scroll_to_end();
        outcome
    }

    /// Runs a whole submission: [`accept`](Self::accept) then
    /// [`respond`](Self::respond).
    ///
    /// Returns `None` when the input was empty and nothing was sent.
    pub async fn submit<I, T>(
        &self,
        input: &mut I,
        transcript: &Mutex<T>,
    ) -> Option<Result<Reply, BridgeError>>
    where
        I: PromptInput + ?Sized,
        T: Transcript + ?Sized,
    {
        let prompt = self.accept(input, transcript)?;
        Some(self.respond(&prompt, transcript).await)
    }
}

fn lock<T: ?Sized>(transcript: &Mutex<T>) -> MutexGuard<'_, T> {
    transcript.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::render::NO_ACTIONS;
    use crate::input::LineInput;
    use crate::transcript::{MemoryTranscript, Role};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every prompt with the same canned body.
    struct CannedBackend {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl CannedBackend {
        const fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Backend for CannedBackend {
        async fn submit(&self, _prompt: &str) -> Result<LlmResponse, BridgeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LlmResponse::from_json(self.body)?)
        }
    }

    fn texts(transcript: &Mutex<MemoryTranscript>) -> Vec<(Role, String)> {
        transcript
            .lock()
            .unwrap()
            .entries()
            .iter()
            .map(|e| (e.role(), e.text().to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_whitespace_input_is_a_no_op() {
        let handler = ChatHandler::new(CannedBackend::new("{}"));
        let transcript = Mutex::new(MemoryTranscript::new());
        let mut input = LineInput::new("   \t ");

        assert!(handler.submit(&mut input, &transcript).await.is_none());
        assert_eq!(input.value(), "   \t ");
        assert!(transcript.lock().unwrap().is_empty());
        assert_eq!(handler.backend().calls(), 0);
    }

    #[tokio::test]
    async fn test_byte_order_mark_only_input_is_a_no_op() {
        let handler = ChatHandler::new(CannedBackend::new("{}"));
        let transcript = Mutex::new(MemoryTranscript::new());
        let mut input = LineInput::new("\u{FEFF} ");

        assert!(handler.submit(&mut input, &transcript).await.is_none());
        assert!(transcript.lock().unwrap().is_empty());
        assert_eq!(handler.backend().calls(), 0);
    }

    #[test]
    fn test_accept_records_user_entry_before_sending() {
        let handler = ChatHandler::new(CannedBackend::new("{}"));
        let transcript = Mutex::new(MemoryTranscript::new());
        let mut input = LineInput::new("  hello  ");

        let prompt = handler.accept(&mut input, &transcript);

        assert_eq!(prompt.as_deref(), Some("hello"));
        assert!(input.is_empty());
        assert_eq!(texts(&transcript), [(Role::User, "You: hello".to_string())]);
        assert_eq!(handler.backend().calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_renders_actions() {
        let handler = ChatHandler::new(CannedBackend::new(
            r#"{"actions":[{"method":"GET","endpoint":"/x","status":"200"}]}"#,
        ));
        let transcript = Mutex::new(MemoryTranscript::new());
        let mut input = LineInput::new("hello");

        let reply = handler.submit(&mut input, &transcript).await.unwrap().unwrap();

        assert_eq!(reply, Reply::Actions(vec![Action::new("GET", "/x", "200")]));
        assert_eq!(
            texts(&transcript),
            [
                (Role::User, "You: hello".to_string()),
                (Role::Assistant, "→ GET /x\n   200".to_string()),
            ]
        );
        assert!(input.is_empty());
        assert!(transcript.lock().unwrap().is_scrolled_to_end());
    }

    #[tokio::test]
    async fn test_submit_without_actions_renders_fallback() {
        let handler = ChatHandler::new(CannedBackend::new(r#"{"prompt":"hello"}"#));
        let transcript = Mutex::new(MemoryTranscript::new());

        let reply = handler
            .submit(&mut LineInput::new("hello"), &transcript)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reply, Reply::NoActions);
        let last = transcript.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last, Entry::assistant(NO_ACTIONS));
    }

    #[tokio::test]
    async fn test_submit_with_empty_action_list_renders_empty_entry() {
        let handler = ChatHandler::new(CannedBackend::new(r#"{"actions":[]}"#));
        let transcript = Mutex::new(MemoryTranscript::new());

        let reply = handler
            .submit(&mut LineInput::new("hello"), &transcript)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reply, Reply::Actions(vec![]));
        let last = transcript.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last, Entry::assistant(""));
    }

    #[tokio::test]
    async fn test_decode_failure_renders_error_entry() {
        let handler = ChatHandler::new(CannedBackend::new("not json"));
        let transcript = Mutex::new(MemoryTranscript::new());
        let mut input = LineInput::new("hello");

        let result = handler.submit(&mut input, &transcript).await.unwrap();

        assert!(matches!(result, Err(BridgeError::Decode(_))));
        assert!(input.is_empty());
        let guard = transcript.lock().unwrap();
        assert_eq!(guard.len(), 2);
        let last = guard.last().unwrap();
        assert_eq!(last.role(), Role::Assistant);
        assert!(last.text().starts_with("⚠️ Request failed"));
        assert!(guard.is_scrolled_to_end());
    }
}
