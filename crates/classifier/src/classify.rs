//! Classify — single-pass aggregation of parsed records against the index.

use std::collections::HashMap;
use std::io::BufRead;

use thiserror::Error;

use crate::lookup::LookupIndex;
use crate::record::parse_record;

/// Tag applied when no rule matches a record. A rule-supplied tag with the
/// same literal text merges into this bucket; the two are indistinguishable
/// by contract.
pub const UNTAGGED: &str = "Untagged";

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Failed to read flow log: {0}")]
    Read(#[from] std::io::Error),
}

/// Final ordered result of one classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Tag → count, ascending by tag.
    pub tag_counts: Vec<(String, u64)>,
    /// (port, protocol) → count, ascending by port then protocol name.
    pub port_proto_counts: Vec<(u32, String, u64)>,
}

/// One-shot accumulator over a stream of raw flow-log lines.
///
/// Owns the lookup index and both counters for the duration of a run; no
/// shared or global state. Counters only ever grow, and a rejected line
/// touches neither of them.
pub struct Aggregator {
    index: LookupIndex,
    tag_counts: HashMap<String, u64>,
    port_proto_counts: HashMap<(u32, String), u64>,
}

impl Aggregator {
    pub fn new(index: LookupIndex) -> Self {
        Self {
            index,
            tag_counts: HashMap::new(),
            port_proto_counts: HashMap::new(),
        }
    }

    /// Classify one raw line. Returns whether the line was accepted.
    pub fn observe(&mut self, line: &str) -> bool {
        let record = match parse_record(line) {
            Some(record) => record,
            None => return false,
        };

        // The pair counter is unconditional once the record parses; the
        // tagging outcome never feeds back into it.
        *self
            .port_proto_counts
            .entry((record.dst_port, record.protocol.clone()))
            .or_insert(0) += 1;

        let tag = self
            .index
            .get(record.dst_port, &record.protocol)
            .unwrap_or(UNTAGGED);
        *self.tag_counts.entry(tag.to_string()).or_insert(0) += 1;

        true
    }

    /// Drive [`observe`](Self::observe) over every line of a reader, in
    /// order. Only a read failure is fatal; malformed lines are skipped.
    pub fn consume<R: BufRead>(&mut self, reader: R) -> Result<(), ClassifyError> {
        for line in reader.lines() {
            self.observe(&line?);
        }
        Ok(())
    }

    /// Number of lines accepted so far (equals the sum of either counter).
    pub fn accepted(&self) -> u64 {
        self.tag_counts.values().sum()
    }

    /// Consume the aggregator and hand back both counters, ordered for
    /// rendering: tags lexicographic, pairs by port then protocol.
    pub fn finish(self) -> Summary {
        let mut tag_counts: Vec<(String, u64)> = self.tag_counts.into_iter().collect();
        tag_counts.sort();

        let mut port_proto_counts: Vec<(u32, String, u64)> = self
            .port_proto_counts
            .into_iter()
            .map(|((port, proto), count)| (port, proto, count))
            .collect();
        port_proto_counts.sort();

        Summary {
            tag_counts,
            port_proto_counts,
        }
    }
}
