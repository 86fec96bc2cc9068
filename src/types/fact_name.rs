// ABOUTME: Names of the facts published to the collecting framework.
// ABOUTME: Parses and displays the wire names used by consumers.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown fact name: '{0}'")]
pub struct UnknownFactName(pub String);

/// A fact owned by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FactName {
    /// Root structure: daemon info, live networks, managed interfaces.
    Docker,
    /// Full client/server version descriptor.
    DockerVersion,
    DockerClientVersion,
    DockerServerVersion,
    DockerWorkerJoinToken,
    DockerManagerJoinToken,
}

impl FactName {
    /// Every published fact, in registration order.
    pub const ALL: [FactName; 6] = [
        FactName::Docker,
        FactName::DockerVersion,
        FactName::DockerClientVersion,
        FactName::DockerServerVersion,
        FactName::DockerWorkerJoinToken,
        FactName::DockerManagerJoinToken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactName::Docker => "docker",
            FactName::DockerVersion => "docker_version",
            FactName::DockerClientVersion => "docker_client_version",
            FactName::DockerServerVersion => "docker_server_version",
            FactName::DockerWorkerJoinToken => "docker_worker_join_token",
            FactName::DockerManagerJoinToken => "docker_manager_join_token",
        }
    }
}

impl fmt::Display for FactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactName {
    type Err = UnknownFactName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FactName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownFactName(s.to_string()))
    }
}
