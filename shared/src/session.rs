//! Session and theme state backed by a key-value store.
//!
//! The dashboard keeps two entries in browser local storage: the serialized
//! signed-in user and the theme preference. [`SessionService`] owns both and
//! reads them once at construction; every change goes through an explicit
//! call that writes the store. The store itself is injected, so tests run
//! against [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use log::{info, warn};

use crate::config::{DashboardConfig, DemoAccount, StorageKeys};
use crate::error::{Result, SharedError};
use crate::models::auth::{AuthenticatedUser, LoginRequest};
use crate::models::settings::Theme;

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage not available: {0}")]
    NotAvailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage quota exceeded")]
    QuotaExceeded,
}

/// String key-value persistence, such as browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError>;
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn locked(
        &self,
    ) -> std::result::Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::NotAvailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.locked()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.locked()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
        self.locked()?.remove(key);
        Ok(())
    }
}

/// Signed-in user and theme preference, persisted through `S`.
#[derive(Debug, Clone)]
pub struct SessionService<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    account: DemoAccount,
    user: Option<AuthenticatedUser>,
    theme: Theme,
}

impl<S: KeyValueStore> SessionService<S> {
    /// Restores the session from `store`. A corrupt user entry is removed
    /// and the session starts signed out; an unreadable theme falls back to
    /// the default.
    pub fn init(store: S, config: &DashboardConfig) -> Self {
        let keys = config.storage.clone();
        let user = restore_user(&store, &keys.user);
        let theme = restore_theme(&store, &keys.theme);
        Self {
            store,
            keys,
            account: config.demo_account.clone(),
            user,
            theme,
        }
    }

    pub fn current_user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Checks `request` against the demo account and, on success, stores
    /// the signed-in user.
    pub fn login(&mut self, request: &LoginRequest) -> Result<&AuthenticatedUser> {
        request.validate_fields()?;
        if !self.account.matches(request) {
            warn!("Rejected sign-in for {}", request.email);
            return Err(SharedError::Unauthorized("Invalid credentials".to_string()));
        }

        let user = self.account.user.clone();
        let serialized = serde_json::to_string(&user)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(&self.keys.user, &serialized)?;
        info!("Signed in as {}", user.email);
        Ok(self.user.insert(user))
    }

    /// Signs out. The in-memory session is cleared even if the store fails.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
        self.store.remove(&self.keys.user)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(&self.keys.theme, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }
}

fn restore_user<S: KeyValueStore>(store: &S, key: &str) -> Option<AuthenticatedUser> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read stored session: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Discarding corrupt stored session: {}", e);
            if let Err(e) = store.remove(key) {
                warn!("Failed to remove corrupt session: {}", e);
            }
            None
        }
    }
}

fn restore_theme<S: KeyValueStore>(store: &S, key: &str) -> Theme {
    match store.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring stored theme: {}", e);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!("Could not read stored theme: {}", e);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    fn demo_login() -> LoginRequest {
        LoginRequest::new("demo@insighta.com", "demo123")
    }

    #[test]
    fn test_fresh_store_starts_signed_out() {
        let config = config();
        let session = SessionService::init(MemoryStore::new(), &config);
        assert!(!session.is_authenticated());
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn test_login_persists_user() {
        let config = config();
        let mut session = SessionService::init(MemoryStore::new(), &config);
        let user = session.login(&demo_login()).unwrap().clone();
        assert_eq!(user.name, "Ephraim Agboola");
        assert!(session.is_authenticated());

        let stored = session.store().get("insighta_user").unwrap().unwrap();
        let restored: AuthenticatedUser = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_session_survives_reload() {
        let config = config();
        let mut first = SessionService::init(MemoryStore::new(), &config);
        first.login(&demo_login()).unwrap();
        first.set_theme(Theme::Dark).unwrap();

        let second = SessionService::init(first.store, &config);
        assert!(second.is_authenticated());
        assert_eq!(second.theme(), Theme::Dark);
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let config = config();
        let mut session = SessionService::init(MemoryStore::new(), &config);
        let err = session
            .login(&LoginRequest::new("demo@insighta.com", "wrong"))
            .unwrap_err();
        assert_eq!(err, SharedError::Unauthorized("Invalid credentials".to_string()));
        assert!(!session.is_authenticated());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_logout_clears_store() {
        let config = config();
        let mut session = SessionService::init(MemoryStore::new(), &config);
        session.login(&demo_login()).unwrap();
        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.store().get("insighta_user").unwrap(), None);
    }

    #[test]
    fn test_corrupt_user_entry_is_discarded() {
        let store = MemoryStore::new().with_entry("insighta_user", "{not json");
        let session = SessionService::init(store, &DashboardConfig::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.store().get("insighta_user").unwrap(), None);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let store = MemoryStore::new().with_entry("insighta_theme", "sepia");
        let session = SessionService::init(store, &DashboardConfig::default());
        assert_eq!(session.theme(), Theme::Light);
    }
}
