//! Client configuration.
//!
//! The configuration is an embedded TOML document parsed once on first use.
//! `DASHBOARD_API_URL` set at build time overrides `api.base_url`.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub reports: ReportsConfig,
    pub auth: AuthConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means "same host as the page, on `port`"
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Page size of the query re-issued for CSV export
    pub export_page_size: usize,
    /// 0 disables debouncing of filter changes
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportsConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub cookie_name: String,
    pub cookie_max_age_days: u32,
    pub user_storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            list: ListConfig::default(),
            reports: ReportsConfig::default(),
            auth: AuthConfig::default(),
            notifications: NotificationsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 25, 50],
            export_page_size: 10_000,
            search_debounce_ms: 0,
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self { page_size: 1000 }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            cookie_max_age_days: 7,
            user_storage_key: "dashboard_user".to_string(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { timeout_ms: 4000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[list]
default_page_size = 10
page_size_options = [10, 25, 50]
export_page_size = 10000
search_debounce_ms = 0

[reports]
page_size = 1000

[auth]
cookie_name = "token"
cookie_max_age_days = 7
user_storage_key = "dashboard_user"

[notifications]
timeout_ms = 4000

[logging]
level = "debug"
"#;

/// Parse the embedded configuration and apply build-time overrides
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(url) = option_env!("DASHBOARD_API_URL") {
        config.api.base_url = url.to_string();
    }
    if config.list.page_size_options.is_empty() {
        anyhow::bail!("list.page_size_options must not be empty");
    }
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded configuration, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash
    pub fn resolve_base(&self, protocol: &str, hostname: &str) -> String {
        let configured = self.base_url.trim().trim_end_matches('/');
        if !configured.is_empty() {
            return configured.to_string();
        }
        format!("{}//{}:{}", protocol, hostname, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str("[list]\ndefault_page_size = 25\n").unwrap();
        assert_eq!(config.list.default_page_size, 25);
        assert_eq!(config.list.export_page_size, 10_000);
        assert_eq!(config.auth.cookie_max_age_days, 7);
    }

    #[test]
    fn test_resolve_base() {
        let mut api = ApiConfig::default();
        assert_eq!(api.resolve_base("https:", "admin.local"), "https://admin.local:3000");
        api.base_url = "https://api.example.com/".into();
        assert_eq!(api.resolve_base("http:", "ignored"), "https://api.example.com");
    }

    #[test]
    fn test_log_level() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.log_level(), log::Level::Debug);
        logging.level = "warn".into();
        assert_eq!(logging.log_level(), log::Level::Warn);
        logging.level = "loud".into();
        assert_eq!(logging.log_level(), log::Level::Debug);
    }
}
