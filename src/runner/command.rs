// ABOUTME: The engine subcommands this crate invokes.
// ABOUTME: Their argument shape is a compatibility contract with the engine CLI.

use std::fmt;

use crate::model::SwarmRole;

/// One subcommand of the container-engine CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Info,
    Version,
    NetworkList,
    NetworkInspect(String),
    JoinToken(SwarmRole),
}

impl EngineCommand {
    /// Arguments following the tool, with `quote` applied to free-form words.
    pub fn args(&self, quote: impl Fn(&str) -> String) -> String {
        match self {
            EngineCommand::Info => "info --format '{{json .}}'".to_string(),
            EngineCommand::Version => "version --format '{{json .}}'".to_string(),
            EngineCommand::NetworkList => "network ls".to_string(),
            EngineCommand::NetworkInspect(name) => format!("network inspect {}", quote(name)),
            EngineCommand::JoinToken(role) => format!("swarm join-token {role} -q"),
        }
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args(str::to_string))
    }
}
