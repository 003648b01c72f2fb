use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_SCHEDULE_PATH: &str = "/schedule/all";
pub const DEFAULT_WEIGHT_CONFIG_PATH: &str = "/weight-config";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

/// Key/value settings read from an optional `KEY=value` file.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// File value first, then the process environment.
    pub fn get_or_env(&self, key: &str) -> Option<String> {
        self.get(key).or_else(|| env::var(key).ok())
    }
}

/// Where the upstream API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub schedule_path: String,
    pub weight_config_path: String,
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            schedule_path: DEFAULT_SCHEDULE_PATH.to_string(),
            weight_config_path: DEFAULT_WEIGHT_CONFIG_PATH.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::from_lookup(|key| config.get_or_env(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base_url = lookup("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);
        let schedule_path = lookup("SCHEDULE_PATH").unwrap_or(defaults.schedule_path);
        let weight_config_path =
            lookup("WEIGHT_CONFIG_PATH").unwrap_or(defaults.weight_config_path);
        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            None => defaults.request_timeout,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    warn!("Ignoring invalid REQUEST_TIMEOUT_SECS {:?}", raw);
                    defaults.request_timeout
                }
            },
        };

        Self {
            base_url,
            schedule_path,
            weight_config_path,
            request_timeout,
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_quotes_exports_and_comments() {
        let config = AppConfig::parse(
            "# upstream\nexport API_BASE_URL=\"http://api.local/v1\"\n\nRUN_MODE='api'\n",
        )
        .unwrap();
        assert_eq!(config.get("API_BASE_URL").as_deref(), Some("http://api.local/v1"));
        assert_eq!(config.get("RUN_MODE").as_deref(), Some("api"));
    }

    #[test]
    fn parse_reports_bad_line_number() {
        let err = AppConfig::parse("A=1\nnot a pair\n").unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn api_config_uses_defaults_when_unset() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.url(&config.schedule_path), "http://localhost:8080/api/v1/schedule/all");
    }

    #[test]
    fn api_config_reads_overrides() {
        let values: HashMap<&str, &str> = HashMap::from([
            ("API_BASE_URL", "http://upstream:9000/api/"),
            ("REQUEST_TIMEOUT_SECS", "0"),
            ("SCHEDULE_PATH", "interviews"),
        ]);
        let config = ApiConfig::from_lookup(|key| values.get(key).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://upstream:9000/api");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.url(&config.schedule_path), "http://upstream:9000/api/interviews");
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let config = ApiConfig::from_lookup(|key| {
            (key == "REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
    }
}
