//! Parsers for the provider's plain-text response bodies.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DomainRecord, DomainRole, MAX_RECORDS, RecordType, ResourceRecord};
use crate::utils::domain::DOMAIN_PATTERN;

use super::UNIT_SEPARATOR;

/// Number of scalar lines preceding the records in a domain listing.
const HEADER_LINES: usize = 6;

#[allow(clippy::unwrap_used)]
static DOMAIN_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({DOMAIN_PATTERN}){UNIT_SEPARATOR}([PS])")).unwrap()
});

#[allow(clippy::unwrap_used)]
static UPDATE_OK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)211\s+212\s+213").unwrap());

/// The body as a bare status code (three ASCII digits), if it is one.
pub(crate) fn sentinel(body: &str) -> Option<&str> {
    let code = body.trim();
    (code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit())).then_some(code)
}

/// Parse the `get_domain` body.
///
/// Malformed record lines are skipped. Records past `MAX_RECORDS` are
/// dropped. The error string describes why the header could not be read.
pub(crate) fn parse_domain_record(body: &str) -> Result<DomainRecord, String> {
    // `lines()` would swallow an empty trailing secure line.
    let mut lines = body.split('\n');
    let mut header = Vec::with_capacity(HEADER_LINES);
    for _ in 0..HEADER_LINES {
        match lines.next() {
            Some(line) => header.push(line.trim()),
            None => {
                return Err(format!(
                    "expected {HEADER_LINES} header lines, got {}",
                    header.len()
                ));
            }
        }
    }

    let timer = |index: usize, field: &str| -> Result<u32, String> {
        header[index]
            .parse()
            .map_err(|_| format!("{field} is not a number: '{}'", header[index]))
    };

    let mut record = DomainRecord {
        hostmaster: header[0].to_string(),
        refresh: timer(1, "refresh")?,
        retry: timer(2, "retry")?,
        expire: timer(3, "expire")?,
        ttl: timer(4, "ttl")?,
        secure: header[5].to_string(),
        records: Vec::new(),
    };

    for line in lines.filter(|l| !l.trim().is_empty()) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match parse_record_line(line) {
            Some(rr) => record.records.push(rr),
            None => log::warn!("Skipping malformed record line: {line:?}"),
        }
    }

    if record.records.len() > MAX_RECORDS {
        log::warn!(
            "Provider returned {} records, keeping the first {MAX_RECORDS}",
            record.records.len()
        );
        record.records.truncate(MAX_RECORDS);
    }

    Ok(record)
}

/// `name<US>type<US>data`
fn parse_record_line(line: &str) -> Option<ResourceRecord> {
    let mut fields = line.splitn(3, UNIT_SEPARATOR);
    let name = fields.next()?.trim();
    let record_type: RecordType = fields.next()?.trim().parse().ok()?;
    let data = fields.next()?;

    if name.is_empty() {
        return None;
    }

    Some(ResourceRecord::new(name, record_type, data))
}

/// Every `<domain><US>P|S` pair found anywhere in the body.
pub(crate) fn parse_domain_list(body: &str) -> BTreeMap<String, DomainRole> {
    DOMAIN_ENTRY_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let role = DomainRole::from_flag(&caps[2])?;
            Some((caps[1].to_string(), role))
        })
        .collect()
}

/// The three name servers acknowledged the update.
pub(crate) fn is_update_success(body: &str) -> bool {
    UPDATE_OK_RE.is_match(body)
}
