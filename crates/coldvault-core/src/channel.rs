//! Named message channel carrying lifecycle payloads from the sync producer.
//!
//! Listeners hold a [`Subscription`]; the registration lives exactly as long
//! as that value, so dropping it (or the task that owns it) releases the
//! listener on every exit path.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::message::LifecycleMessage;

/// Channel name used between the sync producer and the UI
pub const DEFAULT_CHANNEL: &str = "msg";

/// Payloads buffered per listener before older ones are skipped
const CHANNEL_CAPACITY: usize = 64;

/// Broadcast channel of raw lifecycle payloads.
#[derive(Clone, Debug)]
pub struct MessageChannel {
    name: Arc<str>,
    sender: broadcast::Sender<String>,
}

impl MessageChannel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            name: Arc::from(name.into()),
            sender,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of live listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Send a raw payload and return how many listeners it reached.
    ///
    /// Sending with no listener attached is not an error.
    pub fn publish_raw(&self, payload: impl Into<String>) -> usize {
        self.sender.send(payload.into()).unwrap_or(0)
    }

    pub fn publish(&self, message: LifecycleMessage) -> usize {
        self.publish_raw(message.encode())
    }

    /// Register a listener
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        tracing::debug!("Registered listener on channel '{}'", self.name);
        Subscription {
            channel: Arc::clone(&self.name),
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL)
    }
}

/// A live listener registration. Unrecognized and malformed payloads are
/// skipped without surfacing.
#[derive(Debug)]
pub struct Subscription {
    channel: Arc<str>,
    receiver: broadcast::Receiver<String>,
}

impl Subscription {
    /// Wait for the next recognized lifecycle message.
    ///
    /// Returns `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<LifecycleMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(payload) => {
                    if let Some(message) = recognize(&payload) {
                        return Some(message);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(
                        "Listener on '{}' skipped {} stale payloads",
                        self.channel,
                        skipped
                    );
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next recognized message already queued, without waiting.
    pub fn try_next(&mut self) -> Option<LifecycleMessage> {
        loop {
            match self.receiver.try_recv() {
                Ok(payload) => {
                    if let Some(message) = recognize(&payload) {
                        return Some(message);
                    }
                }
                Err(TryRecvError::Lagged(_)) => {}
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        tracing::debug!("Released listener on channel '{}'", self.channel);
    }
}

fn recognize(payload: &str) -> Option<LifecycleMessage> {
    LifecycleMessage::decode(payload).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{SyncIndicator, SyncStatus};

    #[test]
    fn subscription_receives_published_messages_in_order() {
        let channel = MessageChannel::default();
        let mut subscription = channel.subscribe();

        assert_eq!(channel.publish(LifecycleMessage::SyncProgress), 1);
        assert_eq!(channel.publish(LifecycleMessage::SyncSuccess), 1);

        assert_eq!(subscription.try_next(), Some(LifecycleMessage::SyncProgress));
        assert_eq!(subscription.try_next(), Some(LifecycleMessage::SyncSuccess));
        assert_eq!(subscription.try_next(), None);
    }

    #[test]
    fn unrecognized_payloads_are_skipped() {
        let channel = MessageChannel::default();
        let mut subscription = channel.subscribe();

        channel.publish_raw(r#"{"type":"accounts.sync.unknown"}"#);
        channel.publish_raw("{broken");
        channel.publish(LifecycleMessage::SyncFail);

        assert_eq!(subscription.try_next(), Some(LifecycleMessage::SyncFail));
        assert_eq!(subscription.try_next(), None);
    }

    #[test]
    fn dropping_subscription_releases_listener() {
        let channel = MessageChannel::new("msg");
        let subscription = channel.subscribe();
        assert_eq!(channel.listener_count(), 1);

        drop(subscription);
        assert_eq!(channel.listener_count(), 0);
        assert_eq!(channel.publish(LifecycleMessage::SyncProgress), 0);
    }

    #[test]
    fn publish_after_release_leaves_state_untouched() {
        let channel = MessageChannel::default();
        let mut indicator = SyncIndicator::new();
        {
            let mut subscription = channel.subscribe();
            channel.publish(LifecycleMessage::SyncFail);
            while let Some(message) = subscription.try_next() {
                indicator.apply(message);
            }
        }

        channel.publish(LifecycleMessage::SyncProgress);
        assert_eq!(indicator.status(), SyncStatus::Failed);
    }

    #[test]
    fn lagging_listener_keeps_latest_payloads() {
        let channel = MessageChannel::default();
        let mut subscription = channel.subscribe();
        for _ in 0..CHANNEL_CAPACITY {
            channel.publish(LifecycleMessage::SyncProgress);
        }
        channel.publish(LifecycleMessage::SyncFail);

        let mut indicator = SyncIndicator::new();
        while let Some(message) = subscription.try_next() {
            indicator.apply(message);
        }
        assert_eq!(indicator.status(), SyncStatus::Failed);
    }

    #[tokio::test]
    async fn next_waits_for_message() {
        let channel = MessageChannel::default();
        let mut subscription = channel.subscribe();
        let producer = channel.clone();

        tokio::spawn(async move {
            producer.publish_raw(r#"{"type":"noise"}"#);
            producer.publish(LifecycleMessage::SyncSuccess);
        });

        assert_eq!(subscription.next().await, Some(LifecycleMessage::SyncSuccess));
    }

    #[tokio::test]
    async fn next_ends_when_channel_dropped() {
        let channel = MessageChannel::default();
        let mut subscription = channel.subscribe();
        drop(channel);
        assert_eq!(subscription.next().await, None);
    }
}
