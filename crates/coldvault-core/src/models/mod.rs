//! Data models for Coldvault

mod account;
mod settings;

pub use account::{Account, AccountId};
pub use settings::ThemeMode;
