//! Notification dispatcher - Delivers booking messages to the owner's channel

use std::sync::Arc;

use crate::domain::entities::Notification;
use crate::domain::traits::Notifier;

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Accepted by the messaging API
    Delivered { message_id: String },
    /// Transport, timeout, or API rejection
    Failed(String),
    /// No notifier credentials; nothing was sent
    NotConfigured,
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered { .. })
    }
}

/// Single-attempt dispatcher over an optional notifier
#[derive(Clone, Default)]
pub struct NotificationDispatcher {
    notifier: Option<Arc<dyn Notifier>>,
}

impl NotificationDispatcher {
    pub fn new(notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { notifier }
    }

    pub fn is_configured(&self) -> bool {
        self.notifier.is_some()
    }

    /// Attempt delivery once; errors become `Failed`, never propagate
    pub async fn dispatch(&self, note: &Notification) -> DispatchOutcome {
        let Some(notifier) = &self.notifier else {
            return DispatchOutcome::NotConfigured;
        };

        match notifier.send_message(note).await {
            Ok(message_id) => {
                tracing::info!("Booking delivered via {} (message {})", notifier.name(), message_id);
                DispatchOutcome::Delivered { message_id }
            }
            Err(e) => {
                tracing::warn!("Delivery via {} failed: {}", notifier.name(), e);
                DispatchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::BotError;
    use async_trait::async_trait;

    struct StubNotifier {
        fail: bool,
    }

    #[async_trait]
    impl Notifier for StubNotifier {
        fn name(&self) -> &str {
            "stub"
        }

        async fn send_message(&self, _note: &Notification) -> Result<String, BotError> {
            if self.fail {
                Err(BotError::Network("timed out".to_string()))
            } else {
                Ok("1".to_string())
            }
        }
    }

    fn hi() -> Notification {
        Notification::new("*hi*", "hi")
    }

    #[tokio::test]
    async fn test_not_configured() {
        let dispatcher = NotificationDispatcher::default();
        assert!(!dispatcher.is_configured());
        assert_eq!(dispatcher.dispatch(&hi()).await, DispatchOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn test_delivered() {
        let dispatcher = NotificationDispatcher::new(Some(Arc::new(StubNotifier { fail: false })));
        let outcome = dispatcher.dispatch(&hi()).await;
        assert!(outcome.is_delivered());
    }

    #[tokio::test]
    async fn test_error_becomes_failed() {
        let dispatcher = NotificationDispatcher::new(Some(Arc::new(StubNotifier { fail: true })));
        let outcome = dispatcher.dispatch(&hi()).await;
        assert!(!outcome.is_delivered());
        assert_eq!(outcome, DispatchOutcome::Failed("Network error: timed out".to_string()));
    }

    #[tokio::test]
    async fn test_failed_outcome_hides_bot_token() {
        use crate::infrastructure::adapters::TelegramAdapter;
        use std::time::Duration;

        let bot = TelegramAdapter::new("SECRET_TOKEN", "42", Duration::from_secs(2))
            .unwrap()
            .with_api_base("http://127.0.0.1:1");
        let dispatcher = NotificationDispatcher::new(Some(Arc::new(bot)));

        match dispatcher.dispatch(&hi()).await {
            DispatchOutcome::Failed(reason) => assert!(!reason.contains("SECRET_TOKEN"), "leaked: {}", reason),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
