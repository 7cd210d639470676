//! Common domain types for the ME Frp API.

use serde::{Deserialize, Serialize};

/// Output format for exported proxy configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// TOML, the format of current frpc releases.
    #[default]
    Toml,
    /// JSON
    Json,
    /// YAML
    Yml,
    /// Legacy INI
    Ini,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yml => "yml",
            ConfigFormat::Ini => "ini",
        };
        write!(f, "{}", s)
    }
}

/// Platform-wide service state reported by the system status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceState {
    /// All services operating normally.
    Normal,
    /// Degraded service.
    Degraded,
    /// Offline.
    Offline,
    /// A state this client does not know about.
    Unknown(i32),
}

impl From<i32> for ServiceState {
    fn from(value: i32) -> Self {
        match value {
            0 => ServiceState::Normal,
            1 => ServiceState::Degraded,
            2 => ServiceState::Offline,
            other => ServiceState::Unknown(other),
        }
    }
}

/// Account standing reported in [`UserInfo`](crate::rest::user::UserInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    /// Normal account.
    Normal,
    /// Banned account.
    Banned,
    /// Traffic quota exhausted.
    TrafficExceeded,
    /// A status this client does not know about.
    Unknown(i32),
}

impl From<i32> for AccountStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => AccountStatus::Normal,
            1 => AccountStatus::Banned,
            2 => AccountStatus::TrafficExceeded,
            other => AccountStatus::Unknown(other),
        }
    }
}

/// Pagination parameters for listing endpoints.
///
/// Both values are always sent, including zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    pub page: i32,
    /// Number of entries per page.
    pub page_size: i32,
}

impl Page {
    /// Create pagination parameters.
    pub fn new(page: i32, page_size: i32) -> Self {
        Self { page, page_size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_format_serialization() {
        assert_eq!(serde_json::to_string(&ConfigFormat::Yml).unwrap(), r#""yml""#);
        assert_eq!(ConfigFormat::Ini.to_string(), "ini");
        assert_eq!(ConfigFormat::default(), ConfigFormat::Toml);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceState::from(1), ServiceState::Degraded);
        assert_eq!(ServiceState::from(9), ServiceState::Unknown(9));
        assert_eq!(AccountStatus::from(2), AccountStatus::TrafficExceeded);
    }

    #[test]
    fn test_page_query() {
        let query = serde_urlencoded::to_string(Page::new(2, 20)).unwrap();
        assert_eq!(query, "page=2&pageSize=20");
    }
}
