//! What the top bar shows for a given store and sync state.

use crate::store::Store;
use crate::sync::{DotColor, SyncIndicator};

/// Render decisions for the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBarView {
    /// Sync dot color, `None` when the dot is hidden
    pub indicator: Option<DotColor>,
    /// Whether the lock control is shown
    pub show_lock: bool,
}

impl TopBarView {
    #[must_use]
    pub const fn new(has_accounts: bool, has_password: bool, sync: &SyncIndicator) -> Self {
        Self {
            indicator: if has_accounts {
                Some(sync.dot_color())
            } else {
                None
            },
            show_lock: has_password,
        }
    }

    #[must_use]
    pub fn from_store(store: &Store, sync: &SyncIndicator) -> Self {
        Self::new(store.has_accounts(), store.has_password(), sync)
    }
}
