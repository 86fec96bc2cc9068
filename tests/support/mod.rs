// ABOUTME: Test support utilities.
// ABOUTME: Scripted fake host, fixture loading and tracing setup for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use docker_facts::config::Config;
use docker_facts::host::{ExecError, Host};
use docker_facts::runner::Platform;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("docker_facts=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const DOCKER_PATH: &str = "/usr/bin/docker";

/// Read a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

/// POSIX config with the default tool name and timeout.
pub fn posix_config() -> Config {
    Config {
        platform: Platform::Posix,
        ..Config::default()
    }
}

/// Host whose commands answer from a script and whose calls are recorded.
#[derive(Default)]
pub struct FakeHost {
    tools: HashMap<String, PathBuf>,
    responses: HashMap<String, Result<String, ExecError>>,
    facts: HashMap<String, Value>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, Duration)>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with `docker` installed and every fixture command scripted.
    pub fn with_fixtures() -> Self {
        let mut host = Self::new()
            .with_tool("docker", DOCKER_PATH)
            .respond("info --format '{{json .}}'", fixture("docker_info.json"))
            .respond("version --format '{{json .}}'", fixture("docker_version.json"))
            .respond("network ls", fixture("docker_network_list.txt"))
            .respond(
                "swarm join-token worker -q",
                fixture("docker_swarm_worker_token"),
            )
            .respond(
                "swarm join-token manager -q",
                fixture("docker_swarm_manager_token"),
            );
        for name in ["bridge", "app_net", "test_default", "host", "none"] {
            host = host.respond(
                &format!("network inspect {name}"),
                fixture(&format!("docker_network_inspect_{name}.json")),
            );
        }
        host
    }

    pub fn with_tool(mut self, tool: &str, path: &str) -> Self {
        self.tools.insert(tool.to_string(), PathBuf::from(path));
        self
    }

    pub fn without_tool(mut self, tool: &str) -> Self {
        self.tools.remove(tool);
        self
    }

    /// Script the output of `/usr/bin/docker <args>`.
    pub fn respond(self, args: &str, stdout: impl Into<String>) -> Self {
        self.respond_line(&format!("{DOCKER_PATH} {args}"), Ok(stdout.into()))
    }

    /// Script a failure of `/usr/bin/docker <args>`.
    pub fn fail(self, args: &str, error: ExecError) -> Self {
        self.respond_line(&format!("{DOCKER_PATH} {args}"), Err(error))
    }

    /// Script a full command line verbatim.
    pub fn respond_line(mut self, line: &str, result: Result<String, ExecError>) -> Self {
        self.responses.insert(line.to_string(), result);
        self
    }

    pub fn with_fact(mut self, name: &str, value: Value) -> Self {
        self.facts.insert(name.to_string(), value);
        self
    }

    /// Make every exec yield to the scheduler for a while before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(line, _)| line.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Timeouts passed with each call.
    pub fn timeouts(&self) -> Vec<Duration> {
        self.calls.lock().iter().map(|(_, t)| *t).collect()
    }
}

#[async_trait]
impl Host for FakeHost {
    fn which(&self, tool: &str) -> Option<PathBuf> {
        self.tools.get(tool).cloned()
    }

    async fn exec(&self, command_line: &str, timeout: Duration) -> Result<String, ExecError> {
        self.calls.lock().push((command_line.to_string(), timeout));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .get(command_line)
            .cloned()
            .unwrap_or_else(|| {
                Err(ExecError::NonZeroExit {
                    code: Some(1),
                    stderr: format!("unscripted command: {command_line}"),
                })
            })
    }

    fn lookup_fact(&self, name: &str) -> Option<Value> {
        self.facts.get(name).cloned()
    }
}
