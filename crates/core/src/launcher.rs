use std::fmt::{Display, Formatter};

use log::{debug, info, warn};

use crate::error::Result;
use crate::execution::{Executor, Invocation, LaunchMode, ProcessReport};
use crate::platform::LaunchContext;
use crate::strategy::Strategy;
use crate::style::TerminalStyle;

/// Outcome of the step that opens the terminal.
///
/// This never reflects the user's command, which runs unobserved in the new
/// window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchResult {
    /// The automation call ran to completion.
    Completed(ProcessReport),
    /// A detached console host was started.
    Spawned { pid: u32 },
    /// The automation call could not be run.
    Failed(String),
}

impl LaunchResult {
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Completed(report) => !report.success(),
            Self::Spawned { .. } => false,
            Self::Failed(_) => true,
        }
    }
}

impl Display for LaunchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed(report) => {
                let return_code = report
                    .return_code
                    .map_or_else(|| "none".to_string(), |code| code.to_string());
                write!(
                    f,
                    "stdout: {}\nstderr: {}\nreturn_code: {}",
                    report.stdout.trim(),
                    report.stderr.trim(),
                    return_code
                )
            }
            Self::Spawned { pid } => write!(f, "Windows terminal launched (pid {pid})"),
            Self::Failed(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Resolves the strategy for `style` on the context's platform and builds the
/// invocation, without running anything.
///
/// # Errors
///
/// Returns an error if the platform is unsupported.
pub fn prepare(command: &str, style: TerminalStyle, context: &LaunchContext) -> Result<Invocation> {
    let strategy = Strategy::resolve(&context.platform, style)?;
    debug!("Using {strategy:?} for style `{style}` on `{}`", context.platform);

    let invocation = strategy.build(&context.working_directory_text(), command);
    debug!("Built invocation: {invocation}");

    Ok(invocation)
}

/// Opens a terminal for `style` and runs `command` in it.
///
/// Failures from the executor are reported in the returned
/// [`LaunchResult`] rather than as an error.
///
/// # Errors
///
/// Returns [`crate::error::Error::UnsupportedPlatform`] before anything is
/// spawned if the context's platform is not macOS or Windows.
///
/// # Examples
///
/// ```no_run
/// use termlaunch_core::execution::SystemExecutor;
/// use termlaunch_core::launcher::launch;
/// use termlaunch_core::platform::LaunchContext;
/// use termlaunch_core::style::TerminalStyle;
///
/// let context = LaunchContext::detect(None)?;
/// let result = launch("cargo test", TerminalStyle::System, &context, &SystemExecutor)?;
/// println!("{result}");
/// # Ok::<(), termlaunch_core::error::Error>(())
/// ```
pub fn launch<E: Executor + ?Sized>(
    command: &str,
    style: TerminalStyle,
    context: &LaunchContext,
    executor: &E,
) -> Result<LaunchResult> {
    let invocation = prepare(command, style, context)?;
    info!(
        "Launching `{command}` in {style} terminal from `{}`",
        context.working_directory.display()
    );

    let result = match invocation.mode {
        LaunchMode::Wait => executor
            .run_to_completion(&invocation)
            .map(LaunchResult::Completed),
        LaunchMode::Detached => executor
            .spawn_detached(&invocation)
            .map(|pid| LaunchResult::Spawned { pid }),
    };

    let result = result.unwrap_or_else(|e| LaunchResult::Failed(e.to_string()));
    if result.is_failure() {
        warn!("Opening the terminal did not succeed: {result}");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_display() {
        let result = LaunchResult::Completed(ProcessReport {
            stdout: "tab 1 of window id 42\n".to_string(),
            stderr: String::new(),
            return_code: Some(0),
        });
        assert_eq!(
            result.to_string(),
            "stdout: tab 1 of window id 42\nstderr: \nreturn_code: 0"
        );
        assert!(!result.is_failure());
    }

    #[test]
    fn test_completed_display_trims_output() {
        let result = LaunchResult::Completed(ProcessReport {
            stdout: "\n".to_string(),
            stderr: "\nCode is not running\r\n".to_string(),
            return_code: Some(1),
        });
        assert_eq!(
            result.to_string(),
            "stdout: \nstderr: Code is not running\nreturn_code: 1"
        );
    }

    #[test]
    fn test_completed_without_code() {
        let result = LaunchResult::Completed(ProcessReport::default());
        assert!(result.to_string().ends_with("return_code: none"));
        assert!(result.is_failure());
    }

    #[test]
    fn test_spawned_display() {
        let result = LaunchResult::Spawned { pid: 4242 };
        assert_eq!(result.to_string(), "Windows terminal launched (pid 4242)");
        assert!(!result.is_failure());
    }

    #[test]
    fn test_failed_display() {
        let result = LaunchResult::Failed("no such file".to_string());
        assert_eq!(result.to_string(), "Error: no such file");
        assert!(result.is_failure());
    }
}
