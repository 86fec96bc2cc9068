// ABOUTME: Capability traits consumed from and produced to the host framework.
// ABOUTME: Host covers which/exec/lookup; FactSink receives published values.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::FactName;

/// Primitives the collecting framework lends to the resolvers.
#[async_trait]
pub trait Host: Send + Sync {
    /// Locate an executable on the host, `None` when it is not installed.
    fn which(&self, tool: &str) -> Option<PathBuf>;

    /// Run a full command line and return its stdout.
    ///
    /// Implementations must give up once `timeout` has elapsed.
    async fn exec(&self, command_line: &str, timeout: Duration) -> Result<String, ExecError>;

    /// Read another fact that the framework has already resolved.
    fn lookup_fact(&self, name: &str) -> Option<Value>;
}

/// Receiver for published fact values. `None` means the fact is unset.
pub trait FactSink {
    fn publish(&mut self, name: FactName, value: Option<Value>);
}

impl FactSink for std::collections::BTreeMap<FactName, Option<Value>> {
    fn publish(&mut self, name: FactName, value: Option<Value>) {
        self.insert(name, value);
    }
}

/// Failures of a single `exec` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("command timed out after {0:?}")]
    TimedOut(Duration),

    #[error("command exited with status {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("failed to spawn command: {0}")]
    Spawn(String),
}
