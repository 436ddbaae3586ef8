//! In-process permission-error relay backed by `tokio::sync::broadcast`.
//!
//! Deeply-nested write call sites need to notify a UI error surface they
//! hold no reference to. [`PermissionRelay`] is that channel: constructed
//! once at startup, carried in application state, and swappable per test.
//! Delivery is best-effort - the relay holds no queue, so a failure with no
//! live subscriber is dropped. This is a UX signal, not an audit log.

#![cfg_attr(not(test), forbid(unsafe_code))]

use noor_core::PermissionError;
use tokio::sync::broadcast;

/// The single event name carried on the relay.
pub const PERMISSION_ERROR_EVENT: &str = "permission-error";

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Process-wide publish/subscribe hub for [`PermissionError`]s.
///
/// Cloning is cheap and clones share the same channel, so handing a clone to
/// a spawned write task keeps publishing into the same subscribers.
#[derive(Debug, Clone)]
pub struct PermissionRelay {
    sender: broadcast::Sender<PermissionError>,
}

impl PermissionRelay {
    /// Create a relay with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed errors are dropped and
    /// slow receivers observe a `RecvError::Lagged`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an error to every current subscriber.
    ///
    /// With zero subscribers the error is silently dropped; publishing never
    /// fails and never blocks.
    pub fn publish(&self, error: PermissionError) {
        tracing::debug!(
            event = PERMISSION_ERROR_EVENT,
            operation = error.operation.as_str(),
            path = %error.path,
            "publishing permission error"
        );
        // SendError only means there are zero receivers right now.
        let _ = self.sender.send(error);
    }

    /// Subscribe to every error published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PermissionError> {
        self.sender.subscribe()
    }

    /// Number of live subscribers, for diagnostics.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Spawn the lifetime logging subscriber.
    ///
    /// Every binary attaches one of these at startup so no denial goes
    /// completely unobserved even when no UI stream is connected.
    pub fn spawn_logger(&self) {
        let mut receiver = self.subscribe();
        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(error) => {
                        tracing::error!(
                            operation = error.operation.as_str(),
                            path = %error.path,
                            "{}",
                            error.remediation_hint()
                        );
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "permission-error subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }
}

impl Default for PermissionRelay {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use noor_core::StoreOperation;
    use serde_json::json;

    #[tokio::test]
    async fn test_subscriber_receives_published_error_exactly_once() {
        let relay = PermissionRelay::default();
        let mut rx = relay.subscribe();

        relay.publish(
            PermissionError::new(StoreOperation::Create, "contact_submissions/abc")
                .with_request_data(json!({"fullName": "Jane Doe"})),
        );

        let received = rx.recv().await.unwrap();
        assert!(matches!(received.operation, StoreOperation::Create));
        assert_eq!(received.path, "contact_submissions/abc");
        assert_eq!(received.request_resource_data.unwrap()["fullName"], "Jane Doe");

        // Exactly once: nothing further is pending.
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_all_subscribers_receive_the_same_error() {
        let relay = PermissionRelay::default();
        let mut rx1 = relay.subscribe();
        let mut rx2 = relay.subscribe();

        relay.publish(PermissionError::new(StoreOperation::Update, "page_content/about"));

        assert_eq!(rx1.recv().await.unwrap().path, "page_content/about");
        assert_eq!(rx2.recv().await.unwrap().path, "page_content/about");
    }

    #[test]
    fn test_publish_with_no_subscribers_does_not_panic() {
        let relay = PermissionRelay::default();
        relay.publish(PermissionError::new(StoreOperation::Delete, "media/1"));
    }

    #[tokio::test]
    async fn test_clones_share_one_channel() {
        let relay = PermissionRelay::default();
        let clone = relay.clone();
        let mut rx = relay.subscribe();

        clone.publish(PermissionError::new(StoreOperation::List, "donations"));

        assert_eq!(rx.recv().await.unwrap().path, "donations");
    }
}
