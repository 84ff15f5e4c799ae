//! Zonehost HTTP 请求方法

use std::fmt::Write as _;

use crate::error::{AccountFailure, ProviderError, Result};
use crate::utils::log_sanitizer::{redact_credentials, truncate_for_log};

use super::ZonehostProvider;
use super::parse::sentinel;

impl ZonehostProvider {
    /// Build an endpoint url. Credentials come first, then `params` in order,
    /// all values percent-encoded.
    pub(crate) fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{endpoint}?NAME={}&PASSWORD={}",
            self.origin,
            urlencoding::encode(self.credentials.account()),
            urlencoding::encode(self.credentials.secret()),
        );
        for (key, value) in params {
            let _ = write!(url, "&{key}={}", urlencoding::encode(value));
        }
        url
    }

    /// Perform one GET against the provider and return the body.
    ///
    /// The url must start with the configured origin. Trailing newlines are
    /// stripped from the body. The account sentinels `401` (suspended) and
    /// `403` (bad credentials) are turned into `InvalidAccount` for every
    /// endpoint; any other body is returned unchanged.
    pub async fn perform_request(&self, url: &str) -> Result<String> {
        if url.is_empty() {
            return Err(ProviderError::missing("url"));
        }
        if !url.starts_with(&self.origin) {
            return Err(ProviderError::invalid("url", redact_credentials(url)));
        }

        let safe_url = redact_credentials(url);
        log::debug!("GET {safe_url}");

        let response = self.transport.get(url).await.map_err(|e| {
            log::error!("Request failed: {e}");
            ProviderError::RequestFailed {
                url: safe_url.clone(),
                status: None,
                detail: e.detail,
            }
        })?;

        if !response.is_success() {
            log::error!(
                "HTTP {} from {safe_url}: {}",
                response.status,
                truncate_for_log(&response.body)
            );
            return Err(ProviderError::RequestFailed {
                url: safe_url,
                status: Some(response.status),
                detail: format!("HTTP {}", response.status),
            });
        }

        let body = strip_line_ending(&response.body).to_string();

        let account_failure = match sentinel(&body) {
            Some("401") => Some(AccountFailure::Suspended),
            Some("403") => Some(AccountFailure::BadCredentials),
            _ => None,
        };
        if let Some(reason) = account_failure {
            log::warn!("Account {} rejected: {reason}", self.account());
            return Err(ProviderError::InvalidAccount {
                url: safe_url,
                reason,
            });
        }

        Ok(body)
    }
}

/// Drop one trailing `\n` or `\r\n`, nothing more.
fn strip_line_ending(body: &str) -> &str {
    body.strip_suffix('\n')
        .map(|b| b.strip_suffix('\r').unwrap_or(b))
        .unwrap_or(body)
}
