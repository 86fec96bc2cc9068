// ABOUTME: Fact composer: builds the root fact and its leaf projections.
// ABOUTME: Leaf facts read already-resolved structures and never run commands.

use serde_json::Value;

use crate::correlate::CorrelationOutcome;
use crate::host::FactSink;
use crate::model::{DockerFact, EngineInfo, SwarmRole, SwarmTokens, VersionInfo};
use crate::types::FactName;

const CLIENT_SUFFIX: &str = "-client";
const SERVER_SUFFIX: &str = "-server";

/// Build the root fact.
///
/// Unset only when neither daemon info nor the network listing came back;
/// otherwise whatever parts resolved are present and the rest are left out.
pub fn compose_docker(
    info: Option<EngineInfo>,
    correlation: Option<&CorrelationOutcome>,
) -> Option<DockerFact> {
    if info.is_none() && correlation.is_none() {
        return None;
    }
    let network = correlation.map(|c| c.published().cloned().collect());
    let managed_interfaces = correlation.map(|c| c.managed_interfaces.clone());
    Some(DockerFact {
        info,
        network,
        managed_interfaces,
    })
}

fn with_suffix(version: &str, suffix: &str) -> String {
    if version.ends_with(suffix) {
        version.to_string()
    } else {
        format!("{version}{suffix}")
    }
}

/// Client version leaf, e.g. `17.03.1-ce-client`.
pub fn client_version(version: &VersionInfo) -> String {
    with_suffix(version.client_version(), CLIENT_SUFFIX)
}

/// Server version leaf; unset for a client-only install.
pub fn server_version(version: &VersionInfo) -> Option<String> {
    version
        .server_version()
        .map(|v| with_suffix(v, SERVER_SUFFIX))
}

/// Everything one cycle produced, ready to be queried or published.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedFacts {
    pub docker: Option<DockerFact>,
    pub version: Option<VersionInfo>,
    pub tokens: SwarmTokens,
}

impl ComposedFacts {
    /// Value of one published fact, `None` when unset.
    pub fn value(&self, name: FactName) -> Option<Value> {
        match name {
            FactName::Docker => self.docker.as_ref().map(DockerFact::to_value),
            FactName::DockerVersion => self
                .version
                .as_ref()
                .and_then(|v| serde_json::to_value(v).ok()),
            FactName::DockerClientVersion => {
                self.version.as_ref().map(|v| Value::from(client_version(v)))
            }
            FactName::DockerServerVersion => self
                .version
                .as_ref()
                .and_then(server_version)
                .map(Value::from),
            FactName::DockerWorkerJoinToken => {
                self.tokens.get(SwarmRole::Worker).map(Value::from)
            }
            FactName::DockerManagerJoinToken => {
                self.tokens.get(SwarmRole::Manager).map(Value::from)
            }
        }
    }

    /// Hand every fact to the framework, unset ones included.
    pub fn publish_to(&self, sink: &mut impl FactSink) {
        for name in FactName::ALL {
            sink.publish(name, self.value(name));
        }
    }
}
