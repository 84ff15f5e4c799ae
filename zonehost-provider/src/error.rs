use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the provider refused the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountFailure {
    /// Sentinel `401`: the account exists but has been suspended.
    Suspended,
    /// Sentinel `403`: account name or password rejected.
    BadCredentials,
}

impl std::fmt::Display for AccountFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Suspended => "suspended",
            Self::BadCredentials => "bad credentials",
        })
    }
}

/// Domain-level failure reported by the provider after a successful HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestFailure {
    DomainLimitExceeded,
    DomainExists,
    DomainBanned,
    InvalidDomainName,
    DomainNotFound,
    NameserverUnreachable,
    NoZoneFile,
    DomainNotInAccount,
    UpdateFailed,
    /// The body matched none of the sentinels the operation knows about.
    UnexpectedResponse,
}

impl std::fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DomainLimitExceeded => "domain limit exceeded",
            Self::DomainExists => "domain already exists",
            Self::DomainBanned => "domain banned",
            Self::InvalidDomainName => "invalid domain name",
            Self::DomainNotFound => "domain not found",
            Self::NameserverUnreachable => "nameserver unreachable",
            Self::NoZoneFile => "no zone file on this server",
            Self::DomainNotInAccount => "domain not in account",
            Self::UpdateFailed => "name server update failed",
            Self::UnexpectedResponse => "unexpected response",
        })
    }
}

/// Error type for every client operation.
///
/// Parameter errors are raised before any request is built. The three
/// request-side variants are raised only after the transport was asked to
/// perform a GET; [`is_request_error`](Self::is_request_error) groups them.
///
/// Urls carried by errors never contain the account password.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProviderError {
    /// A required argument was empty.
    #[error("Missing required parameter '{param}'")]
    MissingParameter { param: String },

    /// An argument was present but malformed.
    #[error("Invalid parameter '{param}': got '{got}'")]
    InvalidParameter { param: String, got: String },

    /// The provider rejected the account.
    #[error("Invalid account: {reason}")]
    InvalidAccount { url: String, reason: AccountFailure },

    /// The HTTP exchange itself failed (network error or non-2xx status).
    #[error("Request to {url} failed: {detail}")]
    RequestFailed {
        url: String,
        status: Option<u16>,
        detail: String,
    },

    /// The provider answered with a sentinel code signalling failure.
    #[error("Request error: {reason}")]
    RequestError {
        url: String,
        /// Sentinel code when the body was a bare code.
        code: Option<String>,
        reason: RequestFailure,
        /// Raw response body, kept for diagnosis.
        response: String,
    },
}

impl ProviderError {
    pub(crate) fn missing(param: &str) -> Self {
        Self::MissingParameter {
            param: param.to_string(),
        }
    }

    pub(crate) fn invalid(param: &str, got: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            got: got.into(),
        }
    }

    /// `MissingParameter` or `InvalidParameter`.
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::InvalidParameter { .. }
        )
    }

    /// Anything raised after the request was handed to the transport.
    ///
    /// An `InvalidAccount` is also a request error.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccount { .. } | Self::RequestFailed { .. } | Self::RequestError { .. }
        )
    }

    /// The provider-reported reason, if any.
    #[must_use]
    pub fn request_failure(&self) -> Option<RequestFailure> {
        match self {
            Self::RequestError { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Whether the error stems from caller input or a known provider answer
    /// rather than a fault. Drives the log level: `warn` when `true`, `error`
    /// otherwise. **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidAccount { .. } => true,
            Self::RequestError { reason, .. } => !matches!(
                reason,
                RequestFailure::UnexpectedResponse
                    | RequestFailure::NameserverUnreachable
                    | RequestFailure::UpdateFailed
            ),
            Self::RequestFailed { .. } => false,
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
