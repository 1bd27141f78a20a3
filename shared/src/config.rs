use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// HTTP Basic credentials sent with every API request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn header_value(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

/// Settings for the browser client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for every API path, e.g. `/api` or `http://localhost:8080/api`
    pub api_base: String,
    pub credentials: Option<BasicCredentials>,
    pub low_stock_threshold: i32,
    pub alert_timeout_ms: u32,
    pub search_debounce_ms: u32,
    pub recent_transactions_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            credentials: None,
            low_stock_threshold: crate::LOW_STOCK_THRESHOLD,
            alert_timeout_ms: 5000,
            search_debounce_ms: 300,
            recent_transactions_limit: 10,
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at build time from `INVENTORY_API_BASE`,
    /// `INVENTORY_API_USER` and `INVENTORY_API_PASSWORD`.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("INVENTORY_API_BASE"),
            option_env!("INVENTORY_API_USER"),
            option_env!("INVENTORY_API_PASSWORD"),
        )
    }

    pub fn from_values(api_base: Option<&str>, username: Option<&str>, password: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|base| !base.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        // A username alone is enough; some deployments use an empty password.
        if let Some(username) = username.filter(|name| !name.is_empty()) {
            config.credentials = Some(BasicCredentials {
                username: username.to_string(),
                password: password.unwrap_or_default().to_string(),
            });
        }

        config
    }

    pub fn auth_header(&self) -> Option<String> {
        self.credentials.as_ref().map(BasicCredentials::header_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.credentials, None);
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.alert_timeout_ms, 5000);
        assert_eq!(config.auth_header(), None);
    }

    #[test]
    fn test_basic_header_value() {
        let credentials = BasicCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        assert_eq!(credentials.header_value(), "Basic YWRtaW46YWRtaW4xMjM=");
    }

    #[test]
    fn test_from_values() {
        let config = ClientConfig::from_values(Some("http://localhost:8080/api/"), Some("ops"), None);
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(
            config.credentials,
            Some(BasicCredentials {
                username: "ops".to_string(),
                password: String::new(),
            })
        );

        let config = ClientConfig::from_values(Some("  "), Some(""), Some("secret"));
        assert_eq!(config, ClientConfig::default());
    }
}
