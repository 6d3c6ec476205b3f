use crate::error::GistError;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Default Gemini model used for summaries
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Default Gemini REST endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// gist application configuration
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct AppConfig {
    /// Gemini API key (not required in mock mode)
    pub api_key: Option<String>,

    /// Model identifier sent to the backend and echoed in responses
    pub model: String,

    /// Gemini API base URL
    pub api_base_url: String,

    /// Bypass the live backend and return a placeholder summary
    pub mock_mode: bool,

    /// Timeout for a single backend call, in seconds
    pub backend_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Maximum accepted request body size
    pub max_body_bytes: usize,

    /// Log level
    pub log_level: String,

    /// Log directory; console-only logging when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            mock_mode: false,
            backend_timeout_secs: 60,
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            max_body_bytes: 1024 * 1024,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("mock_mode", &self.mock_mode)
            .field("backend_timeout_secs", &self.backend_timeout_secs)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, GistError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GistError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or(defaults.model),
            api_base_url: get("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            mock_mode: get("MOCK_SUMMARY")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            backend_timeout_secs: parse_number(get("BACKEND_TIMEOUT_SECS"), "BACKEND_TIMEOUT_SECS")?
                .unwrap_or(defaults.backend_timeout_secs),
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_number(get("SERVER_PORT"), "SERVER_PORT")?
                .unwrap_or(defaults.server_port),
            max_body_bytes: parse_number(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES")?
                .unwrap_or(defaults.max_body_bytes),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: get("LOG_DIR").map(PathBuf::from),
        })
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Backend call timeout
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GistError> {
        if !self.mock_mode && self.api_key.is_none() {
            return Err(GistError::config(
                "GEMINI_API_KEY is not set (set MOCK_SUMMARY=1 to run without a backend)",
            ));
        }

        if self.model.is_empty() {
            return Err(GistError::config("Model name cannot be empty"));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(GistError::config(
                "Gemini base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(GistError::config("Server port cannot be 0"));
        }

        if self.backend_timeout_secs == 0 {
            return Err(GistError::config("Backend timeout cannot be 0"));
        }

        if self.max_body_bytes == 0 {
            return Err(GistError::config("Maximum body size cannot be 0"));
        }

        Ok(())
    }
}

/// Interpret a boolean-like environment value
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
) -> Result<Option<T>, GistError> {
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| GistError::config(format!("{} must be a number, got '{}'", key, v)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.model, "gemini-2.5-flash-lite");
        assert!(!config.mock_mode);
        assert_eq!(config.backend_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_from_lookup() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "  secret  "),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_BASE_URL", "http://localhost:9000/v1beta/"),
            ("SERVER_PORT", "9090"),
            ("MOCK_SUMMARY", "1"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.api_base_url, "http://localhost:9000/v1beta");
        assert_eq!(config.server_port, 9090);
        assert!(config.mock_mode);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_bad_number_is_config_error() {
        let err = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, GistError::Config(_)));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::default();
        // No key and no mock mode
        assert!(config.validate().is_err());

        config.mock_mode = true;
        assert!(config.validate().is_ok());

        config.mock_mode = false;
        config.api_key = Some("key".to_string());
        assert!(config.validate().is_ok());

        let mut invalid = config.clone();
        invalid.api_base_url = "ftp://example.com".to_string();
        assert!(invalid.validate().is_err());

        let mut invalid = config.clone();
        invalid.backend_timeout_secs = 0;
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("super-secret".to_string()),
            ..AppConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
