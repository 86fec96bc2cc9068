// ABOUTME: Process-backed Host implementation for running on a real machine.
// ABOUTME: Spawns the platform shell directly with a hard timeout.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::traits::{ExecError, Host};
use crate::runner::Platform;

/// Host backed by the local process table and a map of externally resolved facts.
#[derive(Debug)]
pub struct SystemHost {
    platform: Platform,
    facts: HashMap<String, Value>,
}

impl Default for SystemHost {
    fn default() -> Self {
        Self {
            platform: Platform::host(),
            facts: HashMap::new(),
        }
    }
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shell family used to run command lines. Must match the runner's platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Make an already-resolved fact visible to `lookup_fact`.
    pub fn with_fact(mut self, name: impl Into<String>, value: Value) -> Self {
        self.facts.insert(name.into(), value);
        self
    }

    /// Merge a JSON object of facts, as written by another collector.
    pub fn with_facts(mut self, facts: serde_json::Map<String, Value>) -> Self {
        self.facts.extend(facts);
        self
    }

    fn shell_command(&self, command_line: &str) -> Command {
        let (program, args) = self.platform.shell_argv(command_line);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

#[async_trait]
impl Host for SystemHost {
    fn which(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }

    async fn exec(&self, command_line: &str, timeout: Duration) -> Result<String, ExecError> {
        let child = self
            .shell_command(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ExecError::NotFound(command_line.to_string()),
                _ => ExecError::Spawn(e.to_string()),
            })?;

        // Dropping the wait future on timeout kills the child.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| ExecError::Spawn(e.to_string()))?,
            Err(_) => return Err(ExecError::TimedOut(timeout)),
        };

        if !output.status.success() {
            return Err(ExecError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn lookup_fact(&self, name: &str) -> Option<Value> {
        self.facts.get(name).cloned()
    }
}
