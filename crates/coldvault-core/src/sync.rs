//! Account sync status shown next to the activity icon.
//!
//! The indicator only ever reflects the most recent lifecycle message; there
//! is no queueing and no terminal state.

use crate::message::LifecycleMessage;

/// Current sync state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    InProgress,
    Failed,
}

/// Color of the status dot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotColor {
    Blue,
    Red,
    Green,
}

impl SyncStatus {
    /// State reached after `message`, regardless of the current state.
    #[must_use]
    pub const fn after(message: LifecycleMessage) -> Self {
        match message {
            LifecycleMessage::SyncProgress => Self::InProgress,
            LifecycleMessage::SyncFail => Self::Failed,
            LifecycleMessage::SyncSuccess => Self::Idle,
        }
    }

    #[must_use]
    pub const fn dot_color(self) -> DotColor {
        match self {
            Self::InProgress => DotColor::Blue,
            Self::Failed => DotColor::Red,
            Self::Idle => DotColor::Green,
        }
    }

    /// Short human label, used as the dot tooltip
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Synchronized",
            Self::InProgress => "Synchronizing...",
            Self::Failed => "Sync failed",
        }
    }
}

/// Two-field view of the indicator. `in_progress` is `Some(true)` while
/// syncing, `Some(false)` after a success, and `None` at start or after a
/// failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncFlags {
    pub in_progress: Option<bool>,
    pub failed: bool,
}

/// Per-mount sync indicator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SyncIndicator {
    status: SyncStatus,
    completed: bool,
}

impl SyncIndicator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: SyncStatus::Idle,
            completed: false,
        }
    }

    /// Apply a lifecycle message, overwriting the previous state.
    pub fn apply(&mut self, message: LifecycleMessage) {
        self.status = SyncStatus::after(message);
        self.completed = matches!(message, LifecycleMessage::SyncSuccess);
    }

    #[must_use]
    pub const fn status(&self) -> SyncStatus {
        self.status
    }

    /// Whether the current idle state was reached through a successful sync
    #[must_use]
    pub const fn has_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub const fn dot_color(&self) -> DotColor {
        self.status.dot_color()
    }

    #[must_use]
    pub const fn flags(&self) -> SyncFlags {
        match self.status {
            SyncStatus::InProgress => SyncFlags {
                in_progress: Some(true),
                failed: false,
            },
            SyncStatus::Failed => SyncFlags {
                in_progress: None,
                failed: true,
            },
            SyncStatus::Idle if self.completed => SyncFlags {
                in_progress: Some(false),
                failed: false,
            },
            SyncStatus::Idle => SyncFlags {
                in_progress: None,
                failed: false,
            },
        }
    }
}
