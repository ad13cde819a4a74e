use anyhow::Context;
use clap::Parser;
use lexshape_config::Config;

pub mod cli;
pub mod logging;


use self::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load();

    logging::init(&config.logging)?;

    run(&args, &config)
}

pub fn run(args: &Args, config: &Config) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.mode);

    let summary = lexshape_core::transform(&args.infile, &args.outfile, mode).with_context(|| {
        format!(
            "failed to reshape {} into {}",
            args.infile.display(),
            args.outfile.display()
        )
    })?;

    tracing::info!(
        entries = summary.entries_read,
        records = summary.records_written,
        mode = %summary.mode,
        "Done"
    );
    Ok(())
}
