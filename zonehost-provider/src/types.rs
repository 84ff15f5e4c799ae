use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Maximum number of resource records the provider returns for one domain.
pub const MAX_RECORDS: usize = 20;

// ============ Record Types ============

/// DNS record types the provider accepts.
///
/// Parsed case-insensitively, always rendered uppercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    A6,
    Aaaa,
    Afsdb,
    Cname,
    Dname,
    Hinfo,
    Isdn,
    Mb,
    Mg,
    Minfo,
    Mr,
    Mx,
    Ns,
    Nsap,
    Ptr,
    Rp,
    Rt,
    Soa,
    Srv,
    Txt,
    X25,
}

impl RecordType {
    pub const ALL: [Self; 22] = [
        Self::A,
        Self::A6,
        Self::Aaaa,
        Self::Afsdb,
        Self::Cname,
        Self::Dname,
        Self::Hinfo,
        Self::Isdn,
        Self::Mb,
        Self::Mg,
        Self::Minfo,
        Self::Mr,
        Self::Mx,
        Self::Ns,
        Self::Nsap,
        Self::Ptr,
        Self::Rp,
        Self::Rt,
        Self::Soa,
        Self::Srv,
        Self::Txt,
        Self::X25,
    ];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::A6 => "A6",
            Self::Aaaa => "AAAA",
            Self::Afsdb => "AFSDB",
            Self::Cname => "CNAME",
            Self::Dname => "DNAME",
            Self::Hinfo => "HINFO",
            Self::Isdn => "ISDN",
            Self::Mb => "MB",
            Self::Mg => "MG",
            Self::Minfo => "MINFO",
            Self::Mr => "MR",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Nsap => "NSAP",
            Self::Ptr => "PTR",
            Self::Rp => "RP",
            Self::Rt => "RT",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::X25 => "X25",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProviderError::invalid("record_type", s))
    }
}

// ============ Records ============

/// One DNS record inside a hosted domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Label relative to the zone, or `@` / `*`.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Free-form data, meaning depends on the type.
    pub data: String,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            data: data.into(),
        }
    }
}

/// DNS configuration of one hosted domain.
///
/// Returned by `get_domain` and accepted by `update_domain`.
///
/// The zone-transfer ACL and the `secure` setting are the same value on the
/// wire (the `SECURE` parameter and the sixth line of a listing), so they are
/// one field here. Use [`DomainRecord::transfer_hosts`] for the parsed ACL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// SOA contact mailbox.
    pub hostmaster: String,
    /// SOA refresh, in seconds.
    pub refresh: u32,
    /// SOA retry, in seconds.
    pub retry: u32,
    /// SOA expire, in seconds.
    pub expire: u32,
    /// Default TTL, in seconds.
    pub ttl: u32,
    /// Zone-transfer ACL, sent as `SECURE`: `*` or a space separated IP list.
    /// Also serves as the domain's `secure` setting. May be empty.
    pub secure: String,
    #[serde(default)]
    pub records: Vec<ResourceRecord>,
}

impl DomainRecord {
    /// Hosts allowed to transfer the zone, `None` when anyone may (`*`).
    pub fn transfer_hosts(&self) -> Option<Vec<&str>> {
        let acl = self.secure.trim();
        if acl == "*" {
            None
        } else {
            Some(acl.split_whitespace().collect())
        }
    }

    /// Checks that every field can be carried on one wire line.
    pub(crate) fn validate(&self) -> Result<()> {
        check_wire_field("hostmaster", &self.hostmaster)?;
        check_wire_field("secure", &self.secure)?;

        for (i, record) in self.records.iter().enumerate() {
            let index = i + 1;
            if record.name.trim().is_empty() {
                return Err(ProviderError::invalid(&format!("S{index}"), &record.name));
            }
            check_wire_field(&format!("S{index}"), &record.name)?;
            check_wire_field(&format!("D{index}"), &record.data)?;
        }
        Ok(())
    }
}

fn check_wire_field(param: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r', crate::client::UNIT_SEPARATOR]) {
        return Err(ProviderError::invalid(param, value));
    }
    Ok(())
}

impl TryFrom<&serde_json::Value> for DomainRecord {
    type Error = ProviderError;

    /// Builds a record from untyped input, e.g. a parsed config file.
    ///
    /// `null` is a missing record; anything other than an object, or an
    /// object with the wrong shape, is invalid.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(ProviderError::missing("record")),
            serde_json::Value::Object(_) => serde_json::from_value(value.clone())
                .map_err(|e| ProviderError::invalid("record", e.to_string())),
            other => Err(ProviderError::invalid("record", other.to_string())),
        }
    }
}

// ============ Domain Types ============

/// Role of a domain on the provider's name servers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainRole {
    /// Zone is authored on the provider (`P`).
    #[default]
    Primary,
    /// Zone is transferred from another master (`S`).
    Secondary,
}

impl DomainRole {
    pub(crate) fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "P" => Some(Self::Primary),
            "S" => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Options for `add_domain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDomainOptions {
    pub role: DomainRole,
    /// Allow dynamic DNS updates for the domain.
    pub dynamic: bool,
}

impl AddDomainOptions {
    #[must_use]
    pub fn secondary(mut self) -> Self {
        self.role = DomainRole::Secondary;
        self
    }

    #[must_use]
    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// `TYPE` wire flag.
    pub(crate) fn type_flag(self) -> u8 {
        match self.role {
            DomainRole::Primary => 0,
            DomainRole::Secondary => 1,
        }
    }

    /// `DYN` wire flag.
    pub(crate) fn dyn_flag(self) -> u8 {
        if self.dynamic { 2 } else { 1 }
    }
}

/// One of the provider's three name servers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NameServer {
    #[default]
    One,
    Two,
    Three,
}

impl NameServer {
    pub fn index(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u8> for NameServer {
    type Error = ProviderError;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(ProviderError::invalid("name_server", other.to_string())),
        }
    }
}

impl From<NameServer> for u8 {
    fn from(ns: NameServer) -> Self {
        ns.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DomainRecord {
        DomainRecord {
            hostmaster: "hostmaster.example.com".to_string(),
            refresh: 10800,
            retry: 3600,
            expire: 604_800,
            ttl: 86400,
            secure: "*".to_string(),
            records: vec![ResourceRecord::new("www", RecordType::A, "192.0.2.1")],
        }
    }

    #[test]
    fn record_type_parses_any_case() {
        assert_eq!("cname".parse::<RecordType>().ok(), Some(RecordType::Cname));
        assert_eq!("Aaaa".parse::<RecordType>().ok(), Some(RecordType::Aaaa));
        assert_eq!("x25".parse::<RecordType>().ok(), Some(RecordType::X25));
        assert!("CAA".parse::<RecordType>().is_err());
    }

    #[test]
    fn record_type_display_is_uppercase() {
        assert_eq!(RecordType::Afsdb.to_string(), "AFSDB");
        assert_eq!(RecordType::A6.to_string(), "A6");
    }

    #[test]
    fn record_type_serde_matches_wire() {
        let json = serde_json::to_string(&RecordType::Nsap).unwrap();
        assert_eq!(json, "\"NSAP\"");
    }

    #[test]
    fn name_server_range() {
        assert_eq!(NameServer::try_from(2).ok(), Some(NameServer::Two));
        assert!(NameServer::try_from(0).is_err());
        assert!(NameServer::try_from(4).is_err());
        assert_eq!(NameServer::default().index(), 1);
    }

    #[test]
    fn add_domain_flags() {
        let default = AddDomainOptions::default();
        assert_eq!((default.type_flag(), default.dyn_flag()), (0, 1));

        let opts = AddDomainOptions::default().secondary().dynamic(true);
        assert_eq!((opts.type_flag(), opts.dyn_flag()), (1, 2));
    }

    #[test]
    fn transfer_hosts() {
        let mut record = sample_record();
        assert_eq!(record.transfer_hosts(), None);

        record.secure = "192.0.2.10 192.0.2.11".to_string();
        assert_eq!(
            record.transfer_hosts(),
            Some(vec!["192.0.2.10", "192.0.2.11"])
        );
    }

    #[test]
    fn validate_rejects_empty_record_name() {
        let mut record = sample_record();
        record.records.push(ResourceRecord::new(" ", RecordType::Mx, "10 mx"));

        let err = record.validate().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "S2"));
    }

    #[test]
    fn validate_rejects_separator_in_data() {
        let mut record = sample_record();
        record.records[0].data = "1.2.3.4\u{1f}x".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn from_json_value() {
        let value = serde_json::json!({
            "hostmaster": "hm.example.com",
            "refresh": 1, "retry": 2, "expire": 3, "ttl": 4,
            "secure": "*",
            "records": [{ "name": "@", "type": "MX", "data": "10 mail" }]
        });
        let record = DomainRecord::try_from(&value).unwrap();
        assert_eq!(record.records[0].record_type, RecordType::Mx);
    }

    #[test]
    fn from_json_value_rejects_non_object() {
        let err = DomainRecord::try_from(&serde_json::json!("not a record")).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));

        let err = DomainRecord::try_from(&serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));

        let err = DomainRecord::try_from(&serde_json::Value::Null).unwrap_err();
        assert!(matches!(err, ProviderError::MissingParameter { .. }));
    }
}
