// ABOUTME: Command runner for the container-engine CLI.
// ABOUTME: Locates the tool once per cycle and runs subcommands with a timeout.

mod command;
mod platform;

pub use command::EngineCommand;
pub use platform::Platform;

use std::sync::Arc;
use std::time::Duration;

use crate::host::{ExecError, Host};

/// Timeout applied to every invocation unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Failures of the runner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{0} executable not found")]
    ToolUnavailable(String),

    #[error("`{command}` timed out after {after:?}")]
    Timeout { command: String, after: Duration },

    #[error("`{command}` exited with status {code:?}: {stderr}")]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{command}` could not be run: {reason}")]
    Spawn { command: String, reason: String },
}

/// Runs engine subcommands through the host using a tool path fixed at
/// construction. Every command line of a cycle starts with the same prefix.
pub struct CommandRunner<H: ?Sized> {
    host: Arc<H>,
    platform: Platform,
    prefix: String,
    timeout: Duration,
}

impl<H: Host + ?Sized> CommandRunner<H> {
    /// Search for `tool` and fix the command syntax for `platform`.
    pub fn locate(
        host: Arc<H>,
        tool: &str,
        platform: Platform,
        timeout: Duration,
    ) -> Result<Self, CommandError> {
        let executable = platform.executable_name(tool);
        let tool_path = host
            .which(&executable)
            .ok_or_else(|| CommandError::ToolUnavailable(executable.clone()))?;
        let prefix = platform.command_prefix(&tool_path.to_string_lossy());

        tracing::debug!(
            tool = %executable,
            path = %tool_path.display(),
            %platform,
            "located engine client"
        );

        Ok(Self {
            host,
            platform,
            prefix,
            timeout,
        })
    }

    /// The exact command line `run` hands to the host.
    pub fn command_line(&self, command: &EngineCommand) -> String {
        format!(
            "{} {}",
            self.prefix,
            command.args(|word| self.platform.quote(word))
        )
    }

    /// Run one subcommand. No retries: the caller decides what a failure costs.
    pub async fn run(&self, command: &EngineCommand) -> Result<String, CommandError> {
        let line = self.command_line(command);
        tracing::debug!(command = %line, timeout = ?self.timeout, "running engine command");

        let result = self.host.exec(&line, self.timeout).await;
        result.map_err(|e| match e {
            ExecError::NotFound(_) => CommandError::ToolUnavailable(line),
            ExecError::TimedOut(after) => CommandError::Timeout {
                command: line,
                after,
            },
            ExecError::NonZeroExit { code, stderr } => CommandError::NonZeroExit {
                command: line,
                code,
                stderr,
            },
            ExecError::Spawn(reason) => CommandError::Spawn {
                command: line,
                reason,
            },
        })
    }
}
