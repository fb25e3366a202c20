use std::{error::Error as _, io, process::ExitCode};

use clap::Parser;
use poisson_gauss::pipeline;

mod cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> poisson_gauss::Result<()> {
    let args = cli::Args::parse();
    let mut prompter = cli::Prompter::new(io::stdin().lock(), io::stdout());
    let config = args.into_config(&mut prompter)?;
    log::debug!("running with {config:?}");

    let report = pipeline::run(&config)?;
    print!("\n{report}");
    Ok(())
}
