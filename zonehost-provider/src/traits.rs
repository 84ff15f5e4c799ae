use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AddDomainOptions, DomainRecord, DomainRole, NameServer};

/// Operations of a DNS hosting account.
///
/// Every method issues exactly one request. Argument validation happens
/// before anything is sent.
#[async_trait]
pub trait DnsHosting: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Check that the account name and password are accepted.
    ///
    /// `Ok(false)` when the provider rejects the account name or password.
    async fn validate_credentials(&self) -> Result<bool>;

    /// Register a new domain on the account.
    async fn add_domain(&self, domain: &str, options: AddDomainOptions) -> Result<()>;

    /// Fetch the configuration of one domain.
    async fn get_domain(&self, domain: &str) -> Result<DomainRecord>;

    /// Fetch the raw zone file as served by one name server.
    async fn get_zone(&self, domain: &str, name_server: NameServer) -> Result<String>;

    /// All domains on the account with their role.
    async fn list_domains(&self) -> Result<BTreeMap<String, DomainRole>>;

    /// Replace the configuration of one domain.
    async fn update_domain(&self, domain: &str, record: &DomainRecord) -> Result<()>;
}
