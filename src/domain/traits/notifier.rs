use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::entities::Notification;

/// Notifier trait - abstraction for the shop owner's messaging channel
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name, for logs
    fn name(&self) -> &str;

    /// Deliver a notification; returns the platform message id
    async fn send_message(&self, note: &Notification) -> Result<String, BotError>;
}
