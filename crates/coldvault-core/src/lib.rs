//! coldvault-core - Core library for Coldvault
//!
//! This crate holds everything the desktop shell renders from but that does
//! not depend on a UI framework: lifecycle messages and the channel that
//! delivers them, the sync-status state machine, the application store,
//! layout style computation, theme color helpers and configuration.

pub mod channel;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod message;
pub mod models;
pub mod store;
pub mod sync;
pub mod top_bar;

pub use channel::{MessageChannel, Subscription};
pub use error::{Error, Result};
pub use message::LifecycleMessage;
pub use store::{Action, Store};
pub use sync::{DotColor, SyncIndicator, SyncStatus};
