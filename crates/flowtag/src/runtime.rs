//! Runtime — logging init and the single-pass classification run.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Context;
use classifier::{Aggregator, LookupIndex};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::report;

/// Initialise the tracing / logging subsystem.
///
/// `RUST_LOG` takes precedence; otherwise `-v` bumps the default filter.
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "flowtag=info",
        1 => "flowtag=debug,classifier=debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the lookup table, stream the flow log through the aggregator, and
/// write both aggregate sections to the output file.
///
/// Unopenable or unreadable inputs abort the run; malformed rule rows and
/// log lines are silently skipped by the core.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    let index = LookupIndex::from_path(&args.lookup)
        .with_context(|| format!("loading lookup table {}", args.lookup.display()))?;
    info!("Loaded lookup table: {} entries", index.len());

    let flow_log = File::open(&args.flow_log)
        .with_context(|| format!("opening flow log {}", args.flow_log.display()))?;

    let mut aggregator = Aggregator::new(index);
    aggregator
        .consume(BufReader::new(flow_log))
        .with_context(|| format!("reading flow log {}", args.flow_log.display()))?;
    info!("Classified {} records", aggregator.accepted());

    let summary = aggregator.finish();
    let output = File::create(&args.output)
        .with_context(|| format!("creating output file {}", args.output.display()))?;
    let mut out = BufWriter::new(output);
    report::render(&summary, &mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("writing results to {}", args.output.display()))?;
    info!("Results written to {}", args.output.display());

    Ok(())
}
