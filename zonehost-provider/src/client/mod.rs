//! Zonehost API client

mod api;
mod error;
mod http;
mod parse;

use std::sync::Arc;

use crate::config::{ClientConfig, Credentials};
use crate::error::{ProviderError, Result};
use crate::http_client::{HttpTransport, ReqwestTransport};

/// Field delimiter inside response lines (ASCII unit separator).
pub(crate) const UNIT_SEPARATOR: char = '\u{1f}';

pub(crate) const ENDPOINT_NEW_DOMAIN: &str = "api_dns_new_domain.asp";
pub(crate) const ENDPOINT_GET_DOMAIN: &str = "api_dns_list_domain.asp";
pub(crate) const ENDPOINT_VIEW_ZONE: &str = "api_dns_viewzone.asp";
pub(crate) const ENDPOINT_LIST_DOMAINS: &str = "api_dns_list.asp";
pub(crate) const ENDPOINT_MODIFY: &str = "api_dns_modify.asp";

/// Zonehost DNS hosting client
///
/// Holds the account credentials and a transport; nothing else. Cloning is
/// cheap and clones share the transport.
#[derive(Clone)]
pub struct ZonehostProvider {
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) credentials: Credentials,
    pub(crate) origin: String,
}

impl std::fmt::Debug for ZonehostProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZonehostProvider")
            .field("credentials", &self.credentials)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Zonehost Provider Builder
pub struct ZonehostProviderBuilder {
    account: String,
    secret: String,
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ZonehostProviderBuilder {
    fn new(account: String, secret: String) -> Self {
        Self {
            account,
            secret,
            config: ClientConfig::default(),
            transport: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom transport instead of reqwest. Timeouts in the config are
    /// then up to the transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<ZonehostProvider> {
        let credentials = Credentials::new(self.account, self.secret)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let transport = ReqwestTransport::new(&self.config).map_err(|e| {
                    ProviderError::RequestFailed {
                        url: self.config.origin.clone(),
                        status: None,
                        detail: e.detail,
                    }
                })?;
                Arc::new(transport)
            }
        };

        Ok(ZonehostProvider {
            transport,
            credentials,
            origin: self.config.origin,
        })
    }
}

impl ZonehostProvider {
    /// Client with the default config and the reqwest transport.
    ///
    /// Fails with `MissingParameter` when either credential is empty. No
    /// request is made.
    pub fn new(account: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::builder(account, secret).build()
    }

    pub fn builder(
        account: impl Into<String>,
        secret: impl Into<String>,
    ) -> ZonehostProviderBuilder {
        ZonehostProviderBuilder::new(account.into(), secret.into())
    }

    /// Client from `ZONEHOST_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::builder(credentials.account(), credentials.secret())
            .config(ClientConfig::from_env()?)
            .build()
    }

    pub fn account(&self) -> &str {
        self.credentials.account()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}
