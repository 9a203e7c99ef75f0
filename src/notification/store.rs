use crate::types::ActiveNotification;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// A single notification
#[derive(Debug, Clone)]
struct Notification {
    message: String,
    timestamp: Instant,
    ttl: Duration,
}

/// Holds at most one ephemeral message for an external viewer.
///
/// Expiry is checked lazily when the message is read; there is no background
/// timer. A record is either fully present or absent.
#[derive(Debug, Default)]
pub struct NotificationStore {
    current: Option<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Show `message` for `ttl`, replacing whatever was showing
    pub fn set_message(&mut self, message: impl Into<String>, ttl: Duration) {
        let message = message.into();
        debug!("Notification set for {:?}: {}", ttl, message);
        self.current = Some(Notification {
            message,
            timestamp: Instant::now(),
            ttl,
        });
    }

    /// Current message and its remaining time, clearing it if expired
    pub fn current_message(&mut self) -> Option<ActiveNotification> {
        let notification = self.current.as_ref()?;
        let elapsed = notification.timestamp.elapsed();

        if elapsed >= notification.ttl {
            debug!("Notification expired: {}", notification.message);
            self.current = None;
            return None;
        }

        Some(ActiveNotification {
            text: notification.message.clone(),
            remaining: notification.ttl.saturating_sub(elapsed),
        })
    }

    /// Duration the current message was set with, ignoring expiry
    pub fn current_ttl(&self) -> Option<Duration> {
        self.current.as_ref().map(|n| n.ttl)
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }
}
