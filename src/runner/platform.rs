// ABOUTME: Host OS family strategy: shell program, tool invocation and quoting.
// ABOUTME: Chosen once per cycle from configuration, never per call.

use serde::{Deserialize, Serialize};
use std::fmt;

const POSIX_SHELL: (&str, &[&str]) = ("sh", &["-c"]);
const POWERSHELL: (&str, &[&str]) = (
    "powershell",
    &[
        "-NoProfile",
        "-NonInteractive",
        "-NoLogo",
        "-ExecutionPolicy",
        "Bypass",
        "-c",
    ],
);

/// Operating system family of the host running the engine client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// The family this binary was built for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Executable name to search for.
    pub fn executable_name(&self, tool: &str) -> String {
        match self {
            Platform::Windows if !tool.to_ascii_lowercase().ends_with(".exe") => {
                format!("{tool}.exe")
            }
            _ => tool.to_string(),
        }
    }

    /// Shell program and the arguments preceding the command line.
    pub fn shell(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Platform::Posix => POSIX_SHELL,
            Platform::Windows => POWERSHELL,
        }
    }

    /// Full argument vector that runs `command_line` in this platform's shell.
    ///
    /// The shell is spawned directly, so the line is parsed exactly once.
    pub fn shell_argv(&self, command_line: &str) -> (&'static str, Vec<String>) {
        let (program, leading) = self.shell();
        let mut args: Vec<String> = leading.iter().map(|a| a.to_string()).collect();
        args.push(command_line.to_string());
        (program, args)
    }

    /// Leading part of every command line, built from the located tool path.
    pub fn command_prefix(&self, tool_path: &str) -> String {
        let quoted = self.quote(tool_path);
        match self {
            Platform::Windows if quoted != tool_path => {
                // The call operator runs a quoted path as a command.
                format!("& {quoted}")
            }
            _ => quoted,
        }
    }

    /// Quote a single word for the platform shell when it needs it.
    pub fn quote(&self, word: &str) -> String {
        let plain = !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-_./:\\".contains(c));
        if plain {
            return word.to_string();
        }
        match self {
            Platform::Posix => format!("'{}'", word.replace('\'', r"'\''")),
            Platform::Windows => format!("'{}'", word.replace('\'', "''")),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => write!(f, "posix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}
