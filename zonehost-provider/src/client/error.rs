//! Zonehost sentinel code mapping

use crate::error::{ProviderError, RequestFailure};
use crate::utils::log_sanitizer::{redact_credentials, truncate_for_log};

use super::ZonehostProvider;
use super::parse::sentinel;

/// `add_domain` failure codes.
pub(crate) fn add_domain_failure(code: Option<&str>) -> RequestFailure {
    match code {
        Some("407") => RequestFailure::DomainLimitExceeded,
        Some("408") => RequestFailure::DomainExists,
        Some("409") => RequestFailure::DomainBanned,
        Some("410") => RequestFailure::InvalidDomainName,
        _ => RequestFailure::UnexpectedResponse,
    }
}

/// `get_zone` failure codes. `None` means the body is the zone file.
pub(crate) fn zone_failure(code: Option<&str>) -> Option<RequestFailure> {
    match code {
        Some("405") => Some(RequestFailure::DomainNotFound),
        Some("450") => Some(RequestFailure::NameserverUnreachable),
        Some("451") => Some(RequestFailure::NoZoneFile),
        _ => None,
    }
}

/// `update_domain` failure codes, once the success sequence is ruled out.
pub(crate) fn update_failure(code: Option<&str>) -> RequestFailure {
    match code {
        Some("405") => RequestFailure::DomainNotInAccount,
        _ => RequestFailure::UpdateFailed,
    }
}

impl ZonehostProvider {
    /// Build a `RequestError` for `body` and log it at the matching level.
    pub(crate) fn request_error(
        &self,
        url: &str,
        body: &str,
        reason: RequestFailure,
    ) -> ProviderError {
        let err = ProviderError::RequestError {
            url: redact_credentials(url),
            code: sentinel(body).map(str::to_string),
            reason,
            response: body.to_string(),
        };

        if err.is_expected() {
            log::warn!("API error: {reason}");
        } else {
            log::error!("API error: {reason}, body: {}", truncate_for_log(body));
        }

        err
    }
}
