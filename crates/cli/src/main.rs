use std::process::ExitCode;

use clap::Parser;
use log::debug;
use termlaunch_core::error::Result;
use termlaunch_core::execution::SystemExecutor;
use termlaunch_core::platform::LaunchContext;

use termlaunch_cli::cli_args::Args;
use termlaunch_cli::launch_command::{run, RunOutcome};

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Parsed arguments: {:?}", args);

    match run(&args, LaunchContext::detect, &SystemExecutor)? {
        RunOutcome::Help(help) => print!("{help}"),
        RunOutcome::DryRun(invocation) => {
            println!("Dry run is specified, exiting without launching:\n{invocation}");
        }
        RunOutcome::Launched(result) => println!("{result}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
