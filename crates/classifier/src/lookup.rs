//! Lookup — the (port, protocol) → tag rule index, built once from CSV.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Header names the rule source must provide. Column order is irrelevant
/// and extra columns are ignored.
const PORT_COLUMN: &str = "dstport";
const PROTOCOL_COLUMN: &str = "protocol";
const TAG_COLUMN: &str = "tag";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Failed to read lookup table: {0}")]
    Read(#[from] csv::Error),
    #[error("Failed to open lookup table: {0}")]
    Open(#[from] std::io::Error),
}

/// Immutable rule index mapping (destination port, lowercase protocol name)
/// to a classification tag.
///
/// Built once per run. Malformed rows never fail the load: a row missing a
/// required column or carrying a non-numeric port contributes nothing, and
/// a duplicate key silently overwrites the earlier entry (last write wins).
#[derive(Debug, Default)]
pub struct LookupIndex {
    entries: HashMap<(u32, String), String>,
}

impl LookupIndex {
    /// Load the index from a CSV file on disk.
    ///
    /// The only fatal outcome is the file being unopenable or unreadable;
    /// everything row-level degrades to a skip.
    pub fn from_path(path: &Path) -> Result<Self, LookupError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Build the index from any CSV byte source with a header row.
    pub fn from_reader<R: Read>(source: R) -> Result<Self, LookupError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        // Resolve required columns by name. A header missing one of them
        // makes every row incomplete, so the index simply stays empty.
        let headers = reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h.trim() == name);
        let (port_at, proto_at, tag_at) = match (
            column(PORT_COLUMN),
            column(PROTOCOL_COLUMN),
            column(TAG_COLUMN),
        ) {
            (Some(p), Some(pr), Some(t)) => (p, pr, t),
            _ => return Ok(Self::default()),
        };

        let mut entries = HashMap::new();
        for row in reader.records() {
            // Ragged or non-UTF8 rows are skips, not failures.
            let row = match row {
                Ok(row) => row,
                Err(_) => continue,
            };

            let field = |at: usize| row.get(at).map(str::trim);
            let (port, proto, tag) = match (field(port_at), field(proto_at), field(tag_at)) {
                (Some(port), Some(proto), Some(tag)) => (port, proto, tag),
                _ => continue,
            };

            let port: u32 = match port.parse() {
                Ok(port) => port,
                Err(_) => continue,
            };

            entries.insert((port, proto.to_lowercase()), tag.to_string());
        }

        Ok(Self { entries })
    }

    /// Look up the tag for a (port, protocol-name) pair.
    pub fn get(&self, port: u32, protocol: &str) -> Option<&str> {
        self.entries
            .get(&(port, protocol.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
