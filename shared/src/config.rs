//! Dashboard configuration.
//!
//! [`DashboardConfig::default`] carries the values the dashboard ships with.
//! [`DashboardConfig::from_json`] overlays a partial JSON document on top of
//! those defaults, so a deployment only spells out what it changes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::auth::{AuthenticatedUser, LoginRequest};
use crate::query::PageSize;

/// Local storage keys used by the session service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub user: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: "insighta_user".to_string(),
            theme: "insighta_theme".to_string(),
        }
    }
}

/// The single credential pair the login form accepts, and the profile it
/// signs in as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub user: AuthenticatedUser,
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self {
            email: "demo@insighta.com".to_string(),
            password: "demo123".to_string(),
            user: AuthenticatedUser {
                id: "1".to_string(),
                email: "demo@insighta.com".to_string(),
                name: "Ephraim Agboola".to_string(),
                role: "Admin".to_string(),
                avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=John".to_string()),
            },
        }
    }
}

impl DemoAccount {
    pub fn matches(&self, request: &LoginRequest) -> bool {
        request.email == self.email && request.password == self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub app_name: String,
    pub storage: StorageKeys,
    pub default_page_size: PageSize,
    pub demo_account: DemoAccount,
    /// Simulated sign-in latency.
    pub login_delay_ms: u32,
    /// How long the settings page shows its "saved" banner.
    pub saved_banner_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app_name: "Insighta".to_string(),
            storage: StorageKeys::default(),
            default_page_size: PageSize::DEFAULT,
            demo_account: DemoAccount::default(),
            login_delay_ms: 800,
            saved_banner_ms: 3000,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_yields_defaults() {
        assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_overlay() {
        let config = DashboardConfig::from_json(
            r#"{"default_page_size": 25, "storage": {"theme": "custom_theme"}}"#,
        )
        .unwrap();
        assert_eq!(config.default_page_size.get(), 25);
        assert_eq!(config.storage.theme, "custom_theme");
        assert_eq!(config.storage.user, "insighta_user");
        assert_eq!(config.login_delay_ms, 800);
    }

    #[test]
    fn test_invalid_page_size_is_rejected() {
        assert!(DashboardConfig::from_json(r#"{"default_page_size": 7}"#).is_err());
    }

    #[test]
    fn test_demo_account_matches_exact_pair() {
        let account = DemoAccount::default();
        assert!(account.matches(&LoginRequest::new("demo@insighta.com", "demo123")));
        assert!(!account.matches(&LoginRequest::new("demo@insighta.com", "DEMO123")));
        assert!(!account.matches(&LoginRequest::new("other@insighta.com", "demo123")));
    }
}
