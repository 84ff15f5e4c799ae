//! Client configuration and account credentials.

use std::env;
use std::time::Duration;

use crate::error::{ProviderError, Result};

/// Default API origin. Every request url must start with it.
pub const DEFAULT_API_ORIGIN: &str = "https://dns.zonehost.example/";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_ORIGIN: &str = "ZONEHOST_API_ORIGIN";
const ENV_CONNECT_TIMEOUT: &str = "ZONEHOST_CONNECT_TIMEOUT_SECS";
const ENV_REQUEST_TIMEOUT: &str = "ZONEHOST_REQUEST_TIMEOUT_SECS";
const ENV_ACCOUNT: &str = "ZONEHOST_ACCOUNT";
const ENV_PASSWORD: &str = "ZONEHOST_PASSWORD";

/// Transport and endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `https://<host>/`, always with a trailing slash.
    pub origin: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_API_ORIGIN.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `ZONEHOST_*` environment variables.
    ///
    /// Unset variables keep their default; malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(origin) = env::var(ENV_ORIGIN) {
            config = config.with_origin(&origin)?;
        }
        if let Some(secs) = env_secs(ENV_CONNECT_TIMEOUT)? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_secs(ENV_REQUEST_TIMEOUT)? {
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the origin. It must be an `https://` url; a missing trailing
    /// slash is added.
    pub fn with_origin(mut self, origin: &str) -> Result<Self> {
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(ProviderError::missing("origin"));
        }
        if !origin.starts_with("https://") || origin.len() <= "https://".len() {
            return Err(ProviderError::invalid("origin", origin));
        }

        self.origin = if origin.ends_with('/') {
            origin.to_string()
        } else {
            format!("{origin}/")
        };
        Ok(self)
    }
}

fn env_secs(key: &str) -> Result<Option<u64>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ProviderError::invalid(key, raw)),
        Err(_) => Ok(None),
    }
}

/// Account name and password.
///
/// Both are sent as plain `NAME` / `PASSWORD` query parameters, which is how
/// the provider's API works. They never appear in `Debug` output, logs or
/// error values.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    account: String,
    secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("secret", &"<REDACTED>")
            .finish()
    }
}

impl Credentials {
    pub fn new(account: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let account = account.into();
        let secret = secret.into();

        if account.trim().is_empty() {
            return Err(ProviderError::missing("account"));
        }
        if secret.is_empty() {
            return Err(ProviderError::missing("secret"));
        }

        Ok(Self { account, secret })
    }

    /// Read `ZONEHOST_ACCOUNT` and `ZONEHOST_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let account = env::var(ENV_ACCOUNT).map_err(|_| ProviderError::missing(ENV_ACCOUNT))?;
        let secret = env::var(ENV_PASSWORD).map_err(|_| ProviderError::missing(ENV_PASSWORD))?;
        Self::new(account, secret)
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.origin, DEFAULT_API_ORIGIN);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn origin_gets_trailing_slash() {
        let config = ClientConfig::default()
            .with_origin("https://dns.test")
            .unwrap();
        assert_eq!(config.origin, "https://dns.test/");
    }

    #[test]
    fn origin_must_be_https() {
        let err = ClientConfig::default()
            .with_origin("http://dns.test/")
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));

        let err = ClientConfig::default().with_origin("https://").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));
    }

    #[test]
    fn empty_credentials_are_missing() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(ProviderError::MissingParameter { ref param }) if param == "account"
        ));
        assert!(matches!(
            Credentials::new("acct", ""),
            Err(ProviderError::MissingParameter { ref param }) if param == "secret"
        ));
    }

    #[test]
    fn secret_not_exposed_in_debug() {
        let credentials = Credentials::new("acct", "secret_value_12345").unwrap();
        let debug_str = format!("{credentials:?}");
        assert!(!debug_str.contains("secret_value_12345"));
        assert!(debug_str.contains("acct"));
    }
}
