//! Record — parsing of raw version-2 flow-log lines.

use crate::proto::protocol_name;

/// Only version-2 records are understood; anything else is skipped.
const SUPPORTED_VERSION: &str = "2";
/// A version-2 record carries at least this many whitespace-separated fields.
const MIN_FIELDS: usize = 14;

const DST_PORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

/// The two fields of a flow record the classifier cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub dst_port: u32,
    /// Canonical lowercase protocol name derived from the numeric id.
    pub protocol: String,
}

/// Parse one raw flow-log line.
///
/// Returns `None` for every malformed line: blank, too few fields, wrong
/// version marker, or non-numeric port / protocol id. Rejection is a skip,
/// never an error.
pub fn parse_record(line: &str) -> Option<FlowRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    if fields[0] != SUPPORTED_VERSION {
        return None;
    }

    let dst_port: u32 = fields[DST_PORT_FIELD].parse().ok()?;
    let protocol_id: i64 = fields[PROTOCOL_FIELD].parse().ok()?;

    Some(FlowRecord {
        dst_port,
        protocol: protocol_name(protocol_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LINE: &str =
        "2 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 443 6 10 100 0 0 ACCEPT OK";

    #[test]
    fn test_parse_valid_record() {
        let record = parse_record(VALID_LINE).unwrap();
        assert_eq!(record.dst_port, 443);
        assert_eq!(record.protocol, "tcp");
    }

    #[test]
    fn test_blank_lines_rejected() {
        assert_eq!(parse_record(""), None);
        assert_eq!(parse_record("   \t  "), None);
    }

    #[test]
    fn test_short_lines_rejected() {
        assert_eq!(parse_record("2 123456 eni-zzz 10.0.0.1"), None);
        // 13 fields: one short of the minimum
        assert_eq!(
            parse_record("2 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 443 6 10 100 0 0 ACCEPT"),
            None
        );
    }

    #[test]
    fn test_version_gate() {
        let v3 = "3 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 443 6 10 100 0 0 ACCEPT OK";
        assert_eq!(parse_record(v3), None);
        let non_numeric =
            "x 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 443 6 10 100 0 0 ACCEPT OK";
        assert_eq!(parse_record(non_numeric), None);
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        let line = "2 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 not_an_int 6 10 100 0 0 ACCEPT OK";
        assert_eq!(parse_record(line), None);
    }

    #[test]
    fn test_non_numeric_protocol_rejected() {
        let line = "2 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 443 tcp 10 100 0 0 ACCEPT OK";
        assert_eq!(parse_record(line), None);
    }

    #[test]
    fn test_unknown_protocol_gets_synthetic_name() {
        let line = "2 123456 eni-zzz 10.0.0.1 1.1.1.1 1024 443 99 10 100 0 0 ACCEPT OK";
        let record = parse_record(line).unwrap();
        assert_eq!(record.protocol, "proto_99");
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        let padded = format!("  {}  ", VALID_LINE);
        let record = parse_record(&padded).unwrap();
        assert_eq!(record.dst_port, 443);
    }

    #[test]
    fn test_extra_fields_accepted() {
        let long = format!("{} extra fields here", VALID_LINE);
        assert!(parse_record(&long).is_some());
    }
}
