//! UI Components
//!
//! Reusable UI components for the desktop application.

mod account_menu;
mod icons;
mod layout;
mod search_bar;
pub mod settings;
mod top_bar;

pub use icons::{IconCurrencies, IconDevices, IconLock};
pub use layout::{Card, Flex};
pub use top_bar::TopBar;
