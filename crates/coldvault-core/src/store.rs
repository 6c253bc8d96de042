//! Centralized application store.
//!
//! The shell reads two projections from it (`has_accounts`, `has_password`)
//! and sends it actions; it never mutates the fields directly.

use crate::config::AppConfig;
use crate::models::Account;

/// Intents dispatched from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Lock the application behind its password
    Lock,
    /// Leave the locked state
    Unlock,
}

/// Application state shared by the desktop shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    accounts: Vec<Account>,
    password_configured: bool,
    locked: bool,
}

impl Store {
    #[must_use]
    pub fn new(accounts: Vec<Account>, password_configured: bool) -> Self {
        Self {
            accounts,
            password_configured,
            locked: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.accounts.clone(), config.password_configured)
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    #[must_use]
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password_configured
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Apply an action; returns whether the state changed.
    ///
    /// Locking requires a configured password, otherwise there would be no
    /// way back out.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Lock => {
                if !self.password_configured {
                    tracing::warn!("Ignoring lock request: no password configured");
                    return false;
                }
                if self.locked {
                    return false;
                }
                tracing::info!("Locking application");
                self.locked = true;
                true
            }
            Action::Unlock => {
                if !self.locked {
                    return false;
                }
                tracing::info!("Unlocking application");
                self.locked = false;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_follow_state() {
        let store = Store::default();
        assert!(!store.has_accounts());
        assert!(!store.has_password());

        let store = Store::new(vec![Account::new("Main", "BTC")], true);
        assert!(store.has_accounts());
        assert!(store.has_password());
    }

    #[test]
    fn lock_requires_password() {
        let mut store = Store::new(Vec::new(), false);
        assert!(!store.dispatch(Action::Lock));
        assert!(!store.is_locked());
    }

    #[test]
    fn lock_is_idempotent() {
        let mut store = Store::new(Vec::new(), true);
        assert!(store.dispatch(Action::Lock));
        assert!(!store.dispatch(Action::Lock));
        assert!(store.is_locked());

        assert!(store.dispatch(Action::Unlock));
        assert!(!store.is_locked());
        assert!(!store.dispatch(Action::Unlock));
    }

    #[test]
    fn from_config_copies_flags() {
        let config = AppConfig {
            password_configured: true,
            accounts: vec![Account::new("Cold", "ETH")],
            ..AppConfig::default()
        };
        let store = Store::from_config(&config);
        assert!(store.has_password());
        assert_eq!(store.accounts().len(), 1);
        assert!(!store.is_locked());
    }
}
