//! Application views

mod home;
mod locked;
mod settings;

pub use home::Home;
pub use locked::LockedScreen;
pub use settings::SettingsView;
