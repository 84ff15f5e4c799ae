//! # zonehost-provider
//!
//! Client for the Zonehost DNS hosting API: register domains, list them,
//! read a domain's configuration or raw zone file, and push record updates.
//!
//! Every operation is one HTTPS GET against an `api_dns_*.asp` endpoint. The
//! provider answers in plain text, either a bare three-digit sentinel code or
//! a small line-oriented format using the ASCII unit separator (`0x1F`)
//! between fields.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonehost_provider::{AddDomainOptions, DnsHosting, NameServer, ZonehostProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = ZonehostProvider::new("account", "password")?;
//!
//!     provider.add_domain("example.com", AddDomainOptions::default()).await?;
//!
//!     for (domain, role) in provider.list_domains().await? {
//!         println!("{domain} ({role:?})");
//!     }
//!
//!     let mut config = provider.get_domain("example.com").await?;
//!     config.ttl = 3600;
//!     provider.update_domain("example.com", &config).await?;
//!
//!     let zone = provider.get_zone("example.com", NameServer::Two).await?;
//!     println!("{zone}");
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials
//!
//! The API takes the account name and password as plain query parameters
//! (`NAME`, `PASSWORD`). This is part of the provider's protocol and cannot be
//! changed client-side; the origin is enforced to be `https://`. The password
//! is redacted from every logged url and every url stored in an error.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::MissingParameter`] / [`ProviderError::InvalidParameter`]
//!   are raised before any request is made
//! - [`ProviderError::InvalidAccount`]: account suspended or credentials rejected
//! - [`ProviderError::RequestFailed`]: network failure or non-2xx status
//! - [`ProviderError::RequestError`]: the provider reported a domain-level failure
//!
//! Nothing is retried.

mod client;
mod config;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ZonehostProvider, ZonehostProviderBuilder};
pub use config::{ClientConfig, Credentials, DEFAULT_API_ORIGIN};
pub use error::{AccountFailure, ProviderError, RequestFailure, Result};
pub use http_client::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use traits::DnsHosting;
pub use types::{
    AddDomainOptions, DomainRecord, DomainRole, MAX_RECORDS, NameServer, RecordType,
    ResourceRecord,
};
pub use utils::domain::is_valid_domain;
