//! Local sync producer used when no external producer is attached.
//!
//! Publishes a fixed cycle of lifecycle messages on the channel so the top
//! bar indicator can be exercised without a running sync service.

use std::time::Duration;

use coldvault_core::{LifecycleMessage, MessageChannel};

const CYCLE: [LifecycleMessage; 6] = [
    LifecycleMessage::SyncProgress,
    LifecycleMessage::SyncSuccess,
    LifecycleMessage::SyncProgress,
    LifecycleMessage::SyncSuccess,
    LifecycleMessage::SyncProgress,
    LifecycleMessage::SyncFail,
];

/// Message published at `step`
#[must_use]
pub const fn message_at(step: usize) -> LifecycleMessage {
    CYCLE[step % CYCLE.len()]
}

/// Publish the cycle forever, one message per `interval`.
pub async fn run(channel: MessageChannel, interval: Duration) {
    tracing::info!(
        "Simulating sync on channel '{}' every {:?}",
        channel.name(),
        interval
    );
    let mut step = 0;
    loop {
        tokio::time::sleep(interval).await;
        let message = message_at(step);
        let delivered = channel.publish(message);
        tracing::debug!("Published {} to {} listeners", message.as_type(), delivered);
        step = step.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_starts_with_progress_and_repeats() {
        assert_eq!(message_at(0), LifecycleMessage::SyncProgress);
        assert_eq!(message_at(5), LifecycleMessage::SyncFail);
        assert_eq!(message_at(6), message_at(0));
    }

    #[test]
    fn every_failure_or_success_follows_progress() {
        for step in 1..CYCLE.len() {
            if message_at(step) != LifecycleMessage::SyncProgress {
                assert_eq!(message_at(step - 1), LifecycleMessage::SyncProgress);
            }
        }
    }
}
