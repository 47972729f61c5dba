use std::env;
use std::time::Duration;

use anyhow::Context;
use reqwest::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location of the storefront REST API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_SERVER_BASE_URL: Server origin, `/api` is appended per request
    ///   (default: "http://localhost:8000")
    /// - STOREFRONT_HTTP_TIMEOUT_SECS: Per-request timeout in seconds (default: 30)
    ///
    /// # Errors
    /// Returns error if the base URL cannot be parsed
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("STOREFRONT_SERVER_BASE_URL").ok(),
            env::var("STOREFRONT_HTTP_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> anyhow::Result<Self> {
        let raw = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw)
            .with_context(|| format!("STOREFRONT_SERVER_BASE_URL is not a valid URL: {}", raw))?;

        let timeout_secs = match timeout_secs {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("STOREFRONT_HTTP_TIMEOUT_SECS is not a number: {}", value))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = ApiConfig::from_values(None, None).unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_custom_values() {
        let config = ApiConfig::from_values(
            Some("https://shop.example.com/v2".to_string()),
            Some(" 5 ".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://shop.example.com/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_reject_invalid_base_url() {
        let result = ApiConfig::from_values(Some("not a url".to_string()), None);

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_non_numeric_timeout() {
        let result = ApiConfig::from_values(None, Some("soon".to_string()));

        assert!(result.is_err());
    }
}
