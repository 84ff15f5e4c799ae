//! Domain name checks shared by every domain-taking operation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ProviderError, Result};

/// Characters the provider accepts in a domain name.
pub(crate) const DOMAIN_PATTERN: &str = "[A-Za-z0-9_.-]+";

#[allow(clippy::unwrap_used)]
static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DOMAIN_PATTERN}$")).unwrap());

/// Whether `name` is acceptable as a domain.
pub fn is_valid_domain(name: &str) -> bool {
    DOMAIN_RE.is_match(name)
}

/// Validate a domain argument before any request is built.
pub(crate) fn validate_domain(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(ProviderError::missing("domain"));
    }
    if !is_valid_domain(name) {
        return Err(ProviderError::invalid("domain", name));
    }
    Ok(name)
}
