// file: src/models/record.rs
// description: IOC record model matching the ThreatFox export column layout
// reference: https://threatfox.abuse.ch/export/

use serde::{Deserialize, Serialize};

/// Column names of the ThreatFox CSV export, in file order. Fields in a
/// data line are assigned to these names positionally; the export carries
/// no header row the parser can trust.
pub const COLUMN_NAMES: [&str; 14] = [
    "first_seen_utc",
    "ioc_id",
    "ioc_value",
    "ioc_type",
    "threat_type",
    "fk_malware",
    "malware_alias",
    "malware_printable",
    "last_seen_utc",
    "confidence_level",
    "reference",
    "tags",
    "anonymous",
    "reporter",
];

/// One indicator-of-compromise row from the feed. All values are kept
/// textual; the hosting platform infers types from the yielded records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IocRecord {
    pub first_seen_utc: String,
    pub ioc_id: String,
    pub ioc_value: String,
    pub ioc_type: String,
    pub threat_type: String,
    pub fk_malware: String,
    pub malware_alias: String,
    pub malware_printable: String,
    pub last_seen_utc: String,
    pub confidence_level: String,
    pub reference: String,
    pub tags: String,
    pub anonymous: String,
    pub reporter: String,
}

impl IocRecord {
    /// Build a record from raw fields in export order. A short row is
    /// padded with empty values and overflow fields are dropped, so every
    /// record carries exactly the fourteen columns.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = fields.into_iter().map(Into::into);
        let mut next = || iter.next().unwrap_or_default();

        Self {
            first_seen_utc: next(),
            ioc_id: next(),
            ioc_value: next(),
            ioc_type: next(),
            threat_type: next(),
            fk_malware: next(),
            malware_alias: next(),
            malware_printable: next(),
            last_seen_utc: next(),
            confidence_level: next(),
            reference: next(),
            tags: next(),
            anonymous: next(),
            reporter: next(),
        }
    }

    /// Look up a value by its export column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            "first_seen_utc" => Some(&self.first_seen_utc),
            "ioc_id" => Some(&self.ioc_id),
            "ioc_value" => Some(&self.ioc_value),
            "ioc_type" => Some(&self.ioc_type),
            "threat_type" => Some(&self.threat_type),
            "fk_malware" => Some(&self.fk_malware),
            "malware_alias" => Some(&self.malware_alias),
            "malware_printable" => Some(&self.malware_printable),
            "last_seen_utc" => Some(&self.last_seen_utc),
            "confidence_level" => Some(&self.confidence_level),
            "reference" => Some(&self.reference),
            "tags" => Some(&self.tags),
            "anonymous" => Some(&self.anonymous),
            "reporter" => Some(&self.reporter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_full_row() {
        let record = IocRecord::from_fields([
            "2024-01-01 00:00:00",
            "123",
            "1.2.3.4:8080",
            "ip:port",
            "botnet_cc",
            "win.emotet",
            "Heodo",
            "Emotet",
            "2024-01-02 00:00:00",
            "80",
            "https://example.com/ref",
            "tag1,tag2",
            "0",
            "reporterX",
        ]);

        assert_eq!(record.ioc_value, "1.2.3.4:8080");
        assert_eq!(record.malware_printable, "Emotet");
        assert_eq!(record.reporter, "reporterX");
    }

    #[test]
    fn test_from_fields_short_row_pads() {
        let record = IocRecord::from_fields(["2024-01-01", "42"]);

        assert_eq!(record.first_seen_utc, "2024-01-01");
        assert_eq!(record.ioc_id, "42");
        assert_eq!(record.ioc_value, "");
        assert_eq!(record.reporter, "");
    }

    #[test]
    fn test_from_fields_long_row_truncates() {
        let mut fields: Vec<String> = (0..20).map(|i| format!("f{}", i)).collect();
        fields[13] = "last".to_string();

        let record = IocRecord::from_fields(fields);
        assert_eq!(record.reporter, "last");
    }

    #[test]
    fn test_get_by_column_name() {
        let record = IocRecord::from_fields(["a"; 14]);

        for column in COLUMN_NAMES {
            assert_eq!(record.get(column), Some("a"), "missing column {}", column);
        }
        assert_eq!(record.get("no_such_column"), None);
    }

    #[test]
    fn test_serializes_with_all_fourteen_keys() {
        let record = IocRecord::default();
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), COLUMN_NAMES.len());
        for column in COLUMN_NAMES {
            assert!(object.contains_key(column), "missing key {}", column);
        }
    }
}
