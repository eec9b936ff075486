//! The work behind one `termlaunch` invocation.

use clap::CommandFactory;
use log::{debug, info};
use termlaunch_core::error::Result;
use termlaunch_core::execution::{Executor, Invocation};
use termlaunch_core::launcher::{self, LaunchResult};
use termlaunch_core::platform::LaunchContext;

use crate::cli_args::Args;

/// What a run produced, for the caller to print.
#[derive(Debug)]
pub enum RunOutcome {
    /// No command was given; holds the rendered help text.
    Help(String),
    /// Dry run; holds the invocation that would have been run.
    DryRun(Invocation),
    /// The terminal launch was attempted.
    Launched(LaunchResult),
}

/// Runs the launcher for parsed arguments.
///
/// `detect_context` is only called once there is a command to launch, and is
/// given the `--working-directory` override.
///
/// # Errors
///
/// Returns an error if the context cannot be determined or the platform is
/// unsupported.
pub fn run<F, E>(args: &Args, detect_context: F, executor: &E) -> Result<RunOutcome>
where
    F: FnOnce(Option<&str>) -> Result<LaunchContext>,
    E: Executor + ?Sized,
{
    let Some(command) = args.command_text() else {
        debug!("No command given, showing help");
        return Ok(RunOutcome::Help(Args::command().render_help().to_string()));
    };

    let context = detect_context(args.working_directory.as_deref())?;
    let style = args.terminal;

    if args.dry_run {
        info!("Dry run is specified, not launching");
        return launcher::prepare(&command, style, &context).map(RunOutcome::DryRun);
    }

    launcher::launch(&command, style, &context, executor).map(RunOutcome::Launched)
}
