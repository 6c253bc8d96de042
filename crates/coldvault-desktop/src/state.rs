//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::path::PathBuf;

use dioxus::prelude::*;

use coldvault_core::config::AppConfig;
use coldvault_core::models::{Account, ThemeMode};
use coldvault_core::{Action, Store};

use crate::theme::{resolve_theme, ResolvedTheme};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Accounts, password flag and lock state
    pub store: Signal<Store>,
    /// Loaded configuration
    pub config: Signal<AppConfig>,
    /// Where the configuration is saved, if a config directory exists
    pub config_path: Signal<Option<PathBuf>>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Current search query
    pub search_query: Signal<String>,
    /// Whether the settings view is shown
    pub settings_open: Signal<bool>,
}

impl AppState {
    #[must_use]
    pub fn has_accounts(&self) -> bool {
        self.store.read().has_accounts()
    }

    #[must_use]
    pub fn has_password(&self) -> bool {
        self.store.read().has_password()
    }

    /// Send an action to the store
    pub fn dispatch(&self, action: Action) {
        let mut store = self.store;
        store.write().dispatch(action);
    }

    /// Accounts whose name or currency matches the search query
    #[must_use]
    pub fn filtered_accounts(&self) -> Vec<Account> {
        let query = (self.search_query)();
        filter_accounts(self.store.read().accounts(), &query)
    }

    /// Switch theme mode and persist it
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        let mut config = self.config;
        let mut theme = self.theme;
        config.write().theme = mode;
        theme.set(resolve_theme(mode));

        let Some(path) = (self.config_path)() else {
            return;
        };
        if let Err(e) = config.read().save_to(&path) {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}

fn filter_accounts(accounts: &[Account], query: &str) -> Vec<Account> {
    let query = query.trim().to_lowercase();
    accounts
        .iter()
        .filter(|account| {
            query.is_empty()
                || account.name.to_lowercase().contains(&query)
                || account.currency.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("Savings", "BTC"),
            Account::new("Trading", "ETH"),
        ]
    }

    #[test]
    fn empty_query_keeps_all_accounts() {
        assert_eq!(filter_accounts(&accounts(), "  ").len(), 2);
    }

    #[test]
    fn query_matches_name_or_currency() {
        let by_name = filter_accounts(&accounts(), "sav");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Savings");

        let by_currency = filter_accounts(&accounts(), "eth");
        assert_eq!(by_currency.len(), 1);
        assert_eq!(by_currency[0].name, "Trading");
    }
}
