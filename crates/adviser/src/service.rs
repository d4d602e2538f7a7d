//! Conversation state around a completion provider.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error};

use crate::error::AdviserError;
use crate::providers::ChatCompletionProvider;
use crate::types::ChatMessage;

/// Holds the conversation and allows one outstanding request at a time.
pub struct AdviserService {
    provider: Arc<dyn ChatCompletionProvider>,
    history: Mutex<Vec<ChatMessage>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however the request ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AdviserService {
    pub fn new(provider: Arc<dyn ChatCompletionProvider>) -> Self {
        Self {
            provider,
            history: Mutex::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Sends a user message and waits for the reply.
    ///
    /// Blank input is ignored and yields `Ok(None)`. The user turn stays in
    /// the history even when the provider fails.
    pub async fn send(&self, input: &str) -> Result<Option<ChatMessage>, AdviserError> {
        let content = input.trim();
        if content.is_empty() {
            return Ok(None);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AdviserError::RequestInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let user_turn = ChatMessage::user(content);
        let prior = {
            let mut history = self.lock_history()?;
            let prior = history.clone();
            history.push(user_turn.clone());
            prior
        };

        debug!(
            "Asking {} adviser with {} prior turns",
            self.provider.name(),
            prior.len()
        );

        match self.provider.complete(&prior, &user_turn).await {
            Ok(reply) => {
                let reply = ChatMessage::assistant(reply);
                self.lock_history()?.push(reply.clone());
                Ok(Some(reply))
            }
            Err(err) => {
                error!("Adviser request failed: {}", err);
                Err(err)
            }
        }
    }

    /// Snapshot of the conversation, oldest first.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.lock_history()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn clear(&self) {
        if let Ok(mut history) = self.lock_history() {
            history.clear();
        }
    }

    fn lock_history(&self) -> Result<MutexGuard<'_, Vec<ChatMessage>>, AdviserError> {
        self.history
            .lock()
            .map_err(|_| AdviserError::Internal("conversation lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::SimulatedAdviser;
    use crate::types::ChatRole;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    struct MockProvider {
        calls: AtomicUsize,
        seen_history: Mutex<Vec<usize>>,
        fail: bool,
        delay: Duration,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen_history: Mutex::new(Vec::new()),
                fail: false,
                delay: Duration::ZERO,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl ChatCompletionProvider for MockProvider {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn complete(
            &self,
            history: &[ChatMessage],
            user_turn: &ChatMessage,
        ) -> Result<String, AdviserError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_history.lock().unwrap().push(history.len());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(AdviserError::provider("rate limited"));
            }
            Ok(format!("echo: {}", user_turn.content))
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let provider = Arc::new(MockProvider::new());
        let service = AdviserService::new(provider.clone());

        assert!(service.send("   ").await.unwrap().is_none());
        assert!(service.history().is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let provider = Arc::new(MockProvider::new());
        let service = AdviserService::new(provider.clone());

        let reply = service.send("  first  ").await.unwrap().unwrap();
        assert_eq!(reply.content, "echo: first");
        service.send("second").await.unwrap();

        let history = service.history();
        let roles: Vec<ChatRole> = history.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant
            ]
        );
        assert_eq!(history[0].content, "first");
        // The provider sees prior turns only.
        assert_eq!(*provider.seen_history.lock().unwrap(), vec![0, 2]);
        assert!(!service.is_awaiting_reply());
    }

    #[tokio::test]
    async fn test_failure_keeps_user_turn_and_releases_flag() {
        let service = AdviserService::new(Arc::new(MockProvider::failing()));

        let err = service.send("help").await.unwrap_err();
        assert_eq!(err.code(), "PROVIDER_ERROR");

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, ChatRole::User);
        assert!(!service.is_awaiting_reply());
    }

    #[tokio::test]
    async fn test_second_send_while_pending_is_rejected() {
        let provider = Arc::new(MockProvider::slow(Duration::from_millis(100)));
        let service = Arc::new(AdviserService::new(provider.clone()));

        let pending = {
            let service = service.clone();
            tokio::spawn(async move { service.send("first").await })
        };
        while !service.is_awaiting_reply() {
            tokio::task::yield_now().await;
        }

        let err = service.send("second").await.unwrap_err();
        assert_eq!(err.code(), "REQUEST_IN_FLIGHT");

        pending.await.unwrap().unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.history().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_resets_conversation() {
        let service = AdviserService::new(Arc::new(SimulatedAdviser::with_seed(9)));
        service.send("How do I save more?").await.unwrap();
        assert_eq!(service.provider_name(), "simulated");

        service.clear();
        assert!(service.history().is_empty());
    }
}
