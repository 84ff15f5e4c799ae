//! Zonehost `DnsHosting` trait 实现

use std::collections::BTreeMap;
use std::fmt::Write as _;

use async_trait::async_trait;

use crate::error::{AccountFailure, ProviderError, RequestFailure, Result};
use crate::traits::DnsHosting;
use crate::types::{AddDomainOptions, DomainRecord, DomainRole, NameServer};
use crate::utils::domain::validate_domain;

use super::error::{add_domain_failure, update_failure, zone_failure};
use super::parse::{is_update_success, parse_domain_list, parse_domain_record, sentinel};
use super::{
    ENDPOINT_GET_DOMAIN, ENDPOINT_LIST_DOMAINS, ENDPOINT_MODIFY, ENDPOINT_NEW_DOMAIN,
    ENDPOINT_VIEW_ZONE, ZonehostProvider,
};

impl ZonehostProvider {
    /// Scalars first, then one `S<i>/T<i>/D<i>` triple per record, 1-indexed.
    fn update_url(&self, domain: &str, record: &DomainRecord) -> String {
        let mut url = self.endpoint_url(
            ENDPOINT_MODIFY,
            &[
                ("DOMAIN", domain.to_string()),
                ("HOSTMASTER", record.hostmaster.clone()),
                ("REFRESH", record.refresh.to_string()),
                ("RETRY", record.retry.to_string()),
                ("EXPIRE", record.expire.to_string()),
                ("TTL", record.ttl.to_string()),
                ("SECURE", record.secure.clone()),
            ],
        );
        for (i, rr) in record.records.iter().enumerate() {
            let index = i + 1;
            let _ = write!(
                url,
                "&S{index}={}&T{index}={}&D{index}={}",
                urlencoding::encode(&rr.name),
                rr.record_type,
                urlencoding::encode(&rr.data),
            );
        }
        url
    }

    /// `update_domain` for untyped input such as a JSON or YAML document.
    ///
    /// `null` fails with `MissingParameter`, anything that is not an object
    /// shaped like a [`DomainRecord`] with `InvalidParameter`. Both happen
    /// before a url is built.
    pub async fn update_domain_value(&self, domain: &str, record: &serde_json::Value) -> Result<()> {
        let domain = validate_domain(domain)?;
        let record = DomainRecord::try_from(record)?;
        self.update_domain(domain, &record).await
    }
}

#[async_trait]
impl DnsHosting for ZonehostProvider {
    fn id(&self) -> &'static str {
        "zonehost"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        let url = self.endpoint_url(ENDPOINT_LIST_DOMAINS, &[]);
        match self.perform_request(&url).await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidAccount {
                reason: AccountFailure::BadCredentials,
                ..
            }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn add_domain(&self, domain: &str, options: AddDomainOptions) -> Result<()> {
        let domain = validate_domain(domain)?;

        let url = self.endpoint_url(
            ENDPOINT_NEW_DOMAIN,
            &[
                ("DOMAIN", domain.to_string()),
                ("DYN", options.dyn_flag().to_string()),
                ("TYPE", options.type_flag().to_string()),
            ],
        );
        let body = self.perform_request(&url).await?;

        match sentinel(&body) {
            Some("200") => {
                log::debug!("Domain {domain} added");
                Ok(())
            }
            code => Err(self.request_error(&url, &body, add_domain_failure(code))),
        }
    }

    async fn get_domain(&self, domain: &str) -> Result<DomainRecord> {
        let domain = validate_domain(domain)?;

        let url = self.endpoint_url(ENDPOINT_GET_DOMAIN, &[("DOMAIN", domain.to_string())]);
        let body = self.perform_request(&url).await?;

        if sentinel(&body) == Some("405") {
            return Err(self.request_error(&url, &body, RequestFailure::DomainNotFound));
        }

        parse_domain_record(&body).map_err(|detail| {
            log::error!("Failed to parse domain {domain}: {detail}");
            self.request_error(&url, &body, RequestFailure::UnexpectedResponse)
        })
    }

    async fn get_zone(&self, domain: &str, name_server: NameServer) -> Result<String> {
        let domain = validate_domain(domain)?;

        let url = self.endpoint_url(
            ENDPOINT_VIEW_ZONE,
            &[
                ("DOMAIN", domain.to_string()),
                ("NS", name_server.index().to_string()),
            ],
        );
        let body = self.perform_request(&url).await?;

        match zone_failure(sentinel(&body)) {
            Some(reason) => Err(self.request_error(&url, &body, reason)),
            None => Ok(body),
        }
    }

    async fn list_domains(&self) -> Result<BTreeMap<String, DomainRole>> {
        let url = self.endpoint_url(ENDPOINT_LIST_DOMAINS, &[]);
        let body = self.perform_request(&url).await?;

        let domains = parse_domain_list(&body);
        log::debug!("Account {} has {} domains", self.account(), domains.len());
        Ok(domains)
    }

    async fn update_domain(&self, domain: &str, record: &DomainRecord) -> Result<()> {
        let domain = validate_domain(domain)?;
        record.validate()?;

        let url = self.update_url(domain, record);
        let body = self.perform_request(&url).await?;

        if is_update_success(&body) {
            log::debug!(
                "Domain {domain} updated with {} records",
                record.records.len()
            );
            return Ok(());
        }

        Err(self.request_error(&url, &body, update_failure(sentinel(&body))))
    }
}
