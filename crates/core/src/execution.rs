use std::fmt::{Display, Formatter};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::Result;

/// Whether the launcher waits for the invoked program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Wait for the automation call and capture its output.
    Wait,
    /// Start the process and return straight away; it is never observed again.
    Detached,
}

/// A fully built program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub mode: LaunchMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>, mode: LaunchMode) -> Self {
        Self {
            program: program.into(),
            args,
            mode,
        }
    }

    /// The script handed to the interpreter, i.e. the last argument.
    pub fn script(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        if self.mode == LaunchMode::Detached {
            f.write_str(" (detached)")?;
        }
        Ok(())
    }
}

/// Captured result of an automation call that was waited on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessReport {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was ended by a signal.
    pub return_code: Option<i32>,
}

impl ProcessReport {
    pub fn success(&self) -> bool {
        self.return_code == Some(0)
    }
}

/// Runs invocations on the host.
pub trait Executor {
    /// Runs the invocation to completion, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or waited on.
    fn run_to_completion(&self, invocation: &Invocation) -> Result<ProcessReport>;

    /// Starts the invocation without waiting and returns its process id.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started.
    fn spawn_detached(&self, invocation: &Invocation) -> Result<u32>;
}

/// [`Executor`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_to_completion(&self, invocation: &Invocation) -> Result<ProcessReport> {
        info!("Running `{}`", invocation.program);
        let output = invocation
            .to_command()
            .stdin(Stdio::null())
            .output()?;

        let report = ProcessReport {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            return_code: output.status.code(),
        };
        debug!("`{}` finished with {:?}", invocation.program, report.return_code);

        Ok(report)
    }

    fn spawn_detached(&self, invocation: &Invocation) -> Result<u32> {
        info!("Spawning detached `{}`", invocation.program);
        // The child handle is dropped without waiting.
        let child = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        Ok(child.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let invocation = Invocation::new(
            "osascript",
            vec!["-e".to_string(), "tell application \"Terminal\"".to_string()],
            LaunchMode::Wait,
        );
        assert_eq!(
            invocation.to_string(),
            r#"osascript -e "tell application \"Terminal\"""#
        );
    }

    #[test]
    fn test_display_marks_detached() {
        let invocation = Invocation::new("cmd", vec!["/k".to_string()], LaunchMode::Detached);
        assert_eq!(invocation.to_string(), "cmd /k (detached)");
    }

    #[test]
    fn test_script_is_last_argument() {
        let invocation = Invocation::new(
            "osascript",
            vec!["-e".to_string(), "beep".to_string()],
            LaunchMode::Wait,
        );
        assert_eq!(invocation.script(), Some("beep"));
    }

    #[test]
    fn test_report_success() {
        let mut report = ProcessReport {
            return_code: Some(0),
            ..ProcessReport::default()
        };
        assert!(report.success());
        report.return_code = Some(1);
        assert!(!report.success());
        report.return_code = None;
        assert!(!report.success());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let invocation = Invocation::new(
            "termlaunch-definitely-not-a-program",
            vec![],
            LaunchMode::Wait,
        );
        let result = SystemExecutor.run_to_completion(&invocation);
        assert!(matches!(result, Err(Error::SubProcess(_))));

        let result = SystemExecutor.spawn_detached(&invocation);
        assert!(matches!(result, Err(Error::SubProcess(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_to_completion_captures_output() {
        let invocation = Invocation::new(
            "sh",
            vec!["-c".to_string(), "echo out; echo err >&2; exit 3".to_string()],
            LaunchMode::Wait,
        );
        let report = SystemExecutor.run_to_completion(&invocation).unwrap();
        assert_eq!(report.stdout, "out\n");
        assert_eq!(report.stderr, "err\n");
        assert_eq!(report.return_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_detached_does_not_wait() {
        let invocation = Invocation::new(
            "sh",
            vec!["-c".to_string(), "sleep 5".to_string()],
            LaunchMode::Detached,
        );
        let started = std::time::Instant::now();
        let pid = SystemExecutor.spawn_detached(&invocation).unwrap();
        assert!(pid > 0);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
