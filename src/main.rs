// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use tally_lines::args::Args;
use tally_lines::config::Config;
use tally_lines::{logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    let result = tally_lines::run(&config)?;
    presentation::print_results(&result, &config)?;
    Ok(())
}
