// ABOUTME: Typed structures parsed from engine output and composed into facts.
// ABOUTME: Each keeps the fields consumers need plus an opaque bag of the rest.

mod engine;
mod fact;
mod network;
mod swarm;
mod version;

pub use engine::EngineInfo;
pub use fact::DockerFact;
pub use network::{CorrelatedNetwork, Endpoint, Ipam, IpamConfig, NetworkDetail, NetworkSummary};
pub use swarm::{SwarmRole, SwarmTokens};
pub use version::{VersionDetail, VersionInfo};

/// Unrecognised JSON fields carried through unchanged.
pub type Extra = serde_json::Map<String, serde_json::Value>;
