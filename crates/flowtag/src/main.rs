use clap::Parser;

mod cli;
mod report;
mod runtime;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    runtime::init_logging(args.verbose);
    runtime::run(&args)
}
