//! Cli — command-line surface of the flowtag binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "flowtag",
    version,
    about = "Classify version-2 flow-log records against a lookup table"
)]
pub struct Cli {
    /// Flow log file (version-2 records, one per line)
    #[arg(value_name = "FLOW_LOG")]
    pub flow_log: PathBuf,

    /// Lookup table CSV (dstport,protocol,tag)
    #[arg(value_name = "LOOKUP_CSV")]
    pub lookup: PathBuf,

    /// Output file for the two aggregate sections
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths() {
        let cli = Cli::parse_from(["flowtag", "logs.txt", "lookup.csv", "out.txt"]);
        assert_eq!(cli.flow_log, PathBuf::from("logs.txt"));
        assert_eq!(cli.lookup, PathBuf::from("lookup.csv"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["flowtag", "a", "b", "c", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
