//! The (platform, style) dispatch table and the scripts each entry builds.
//!
//! IDE strategies inject keystrokes into whatever window has focus after a
//! fixed delay. The launcher does not check that the editor is running or that
//! the host allows input injection; the Windows script skips the keystrokes
//! when no editor process exists, and other failures only show up in the
//! automation call's output, if at all.

use crate::config::{
    self, APPLESCRIPT_PROGRAM, CONSOLE_HOST_PROGRAM, ENTER_DELAY_MS, FOCUS_DELAY_MS,
    MACOS_TERMINAL_APP, PANEL_DELAY_MS, POWERSHELL_PROGRAM,
};
use crate::error::{Error, Result};
use crate::escape::{applescript_string, powershell_single_quoted};
use crate::execution::{Invocation, LaunchMode};
use crate::platform::Platform;
use crate::style::{IdeApp, TerminalStyle};

/// AppleScript key code for Return.
const APPLESCRIPT_RETURN_KEY_CODE: u8 = 36;

/// How a command gets into a terminal on the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// macOS: new Terminal.app window through `do script`.
    TerminalApp,
    /// Windows: new `cmd` console window started from PowerShell.
    ConsoleHost,
    /// macOS: keystrokes into an editor's integrated terminal.
    MacIde(IdeApp),
    /// Windows: `SendKeys` into an editor's integrated terminal.
    WindowsIde(IdeApp),
}

impl Strategy {
    /// Picks the strategy for a platform and style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] for any host other than macOS
    /// and Windows.
    pub fn resolve(platform: &Platform, style: TerminalStyle) -> Result<Self> {
        let strategy = match (platform, style.ide_app()) {
            (Platform::MacOs, None) => Self::TerminalApp,
            (Platform::MacOs, Some(app)) => Self::MacIde(app),
            (Platform::Windows, None) => Self::ConsoleHost,
            (Platform::Windows, Some(app)) => Self::WindowsIde(app),
            (Platform::Unsupported(name), _) => {
                return Err(Error::unsupported_platform(name.as_str()))
            }
        };

        Ok(strategy)
    }

    /// Builds the invocation that opens the terminal and runs `command` in
    /// `working_directory`.
    pub fn build(self, working_directory: &str, command: &str) -> Invocation {
        match self {
            Self::TerminalApp => terminal_app_invocation(working_directory, command),
            Self::ConsoleHost => console_host_invocation(working_directory, command),
            Self::MacIde(app) => mac_ide_invocation(app, working_directory, command),
            Self::WindowsIde(app) => windows_ide_invocation(app, working_directory, command),
        }
    }
}

/// `cd` into the directory, then run the command. Terminal.app and IDE
/// integrated terminals.
pub fn posix_payload(working_directory: &str, command: &str) -> String {
    format!("cd '{working_directory}' && {command}")
}

/// Change drive and directory, then run the command. `cmd.exe`.
pub fn cmd_payload(working_directory: &str, command: &str) -> String {
    format!("cd /d \"{working_directory}\" && {command}")
}

fn applescript_invocation(script: String) -> Invocation {
    Invocation::new(
        APPLESCRIPT_PROGRAM,
        vec!["-e".to_string(), script],
        LaunchMode::Wait,
    )
}

fn powershell_invocation(script: String, mode: LaunchMode) -> Invocation {
    Invocation::new(
        POWERSHELL_PROGRAM,
        vec![
            "-NoProfile".to_string(),
            "-NonInteractive".to_string(),
            "-Command".to_string(),
            script,
        ],
        mode,
    )
}

fn terminal_app_invocation(working_directory: &str, command: &str) -> Invocation {
    let payload = applescript_string(&posix_payload(working_directory, command));
    let script = format!(
        "tell application \"{MACOS_TERMINAL_APP}\"\n\
         \tactivate\n\
         \tdo script \"{payload}\"\n\
         end tell"
    );

    applescript_invocation(script)
}

fn console_host_invocation(working_directory: &str, command: &str) -> Invocation {
    let payload = powershell_single_quoted(&cmd_payload(working_directory, command));
    let script = format!("Start-Process {CONSOLE_HOST_PROGRAM} -ArgumentList '/k', '{payload}'");

    powershell_invocation(script, LaunchMode::Detached)
}

fn mac_ide_invocation(app: IdeApp, working_directory: &str, command: &str) -> Invocation {
    let payload = applescript_string(&posix_payload(working_directory, command));
    let focus_delay = config::delay_seconds(FOCUS_DELAY_MS);
    let panel_delay = config::delay_seconds(PANEL_DELAY_MS);
    let enter_delay = config::delay_seconds(ENTER_DELAY_MS);
    let script = format!(
        "tell application \"{app_name}\" to activate\n\
         delay {focus_delay}\n\
         tell application \"System Events\"\n\
         \tkeystroke \"`\" using {{control down, shift down}}\n\
         \tdelay {panel_delay}\n\
         \tkeystroke \"{payload}\"\n\
         \tdelay {enter_delay}\n\
         \tkey code {APPLESCRIPT_RETURN_KEY_CODE}\n\
         end tell",
        app_name = app.application_name,
    );

    applescript_invocation(script)
}

fn windows_ide_invocation(app: IdeApp, working_directory: &str, command: &str) -> Invocation {
    let payload = powershell_single_quoted(&posix_payload(working_directory, command));
    let process_name = powershell_single_quoted(app.process_name);
    let script = format!(
        "Add-Type -AssemblyName System.Windows.Forms\n\
         $process = Get-Process -Name '{process_name}' -ErrorAction SilentlyContinue | Select-Object -First 1\n\
         if ($process) {{\n\
         \t$wshell = New-Object -ComObject WScript.Shell\n\
         \t$null = $wshell.AppActivate($process.Id)\n\
         \tStart-Sleep -Milliseconds {FOCUS_DELAY_MS}\n\
         \t[System.Windows.Forms.SendKeys]::SendWait('^+`')\n\
         \tStart-Sleep -Milliseconds {PANEL_DELAY_MS}\n\
         \t[System.Windows.Forms.SendKeys]::SendWait('{payload}')\n\
         \tStart-Sleep -Milliseconds {ENTER_DELAY_MS}\n\
         \t[System.Windows.Forms.SendKeys]::SendWait('{{ENTER}}')\n\
         }} else {{\n\
         \tWrite-Error '{process_name} is not running'\n\
         }}"
    );

    powershell_invocation(script, LaunchMode::Wait)
}
