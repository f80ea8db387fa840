//! Reader configuration and the injected reader context

use crate::error::{ReaderError, Result};
use crate::types::ReaderId;
use std::time::Duration;

/// Base URL used when `QYN_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Request timeout used when `QYN_REQUEST_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection and identity settings for a reading session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Root of the chapter API, without a trailing `/api`
    pub api_base_url: String,

    /// Who is reading; `None` disables read-marking
    pub reader_id: Option<ReaderId>,

    pub request_timeout: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            reader_id: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ReaderConfig {
    /// Build a config from `QYN_API_URL`, `QYN_READER_ID` and
    /// `QYN_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("QYN_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        config.reader_id = lookup("QYN_READER_ID").and_then(|v| ReaderId::parse(v).ok());

        if let Some(secs) = lookup("QYN_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = parse_timeout(&secs)?;
        }

        Ok(config)
    }

    /// The reader context handed to the loader
    pub fn reader_context(&self) -> ReaderContext {
        ReaderContext {
            reader_id: self.reader_id.clone(),
        }
    }
}

/// Parse a timeout given in whole seconds; zero is rejected
pub fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ReaderError::InvalidConfig(
            "request timeout must be at least one second".to_string(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(ReaderError::InvalidConfig(format!(
            "request timeout is not a number of seconds: {}",
            value
        ))),
    }
}

/// Identity of the person reading, provided by the surrounding application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderContext {
    reader_id: Option<ReaderId>,
}

impl ReaderContext {
    /// No known reader; chapters are not marked as read
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_reader(reader_id: ReaderId) -> Self {
        Self {
            reader_id: Some(reader_id),
        }
    }

    pub fn reader_id(&self) -> Option<&ReaderId> {
        self.reader_id.as_ref()
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ReaderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ReaderConfig::default());
        assert!(config.reader_context().reader_id().is_none());
    }

    #[test]
    fn test_values_from_env() {
        let config = ReaderConfig::from_lookup(lookup(&[
            ("QYN_API_URL", "https://novels.example"),
            ("QYN_READER_ID", "42"),
            ("QYN_REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://novels.example");
        assert_eq!(config.reader_id.unwrap().as_str(), "42");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_reader_id_is_absent() {
        let config = ReaderConfig::from_lookup(lookup(&[("QYN_READER_ID", "  ")])).unwrap();
        assert!(config.reader_id.is_none());
    }

    #[test]
    fn test_bad_timeout() {
        assert!(matches!(
            ReaderConfig::from_lookup(lookup(&[("QYN_REQUEST_TIMEOUT_SECS", "soon")])),
            Err(ReaderError::InvalidConfig(_))
        ));
        assert!(parse_timeout("0").is_err());
    }
}
