// ABOUTME: Root `docker` fact: daemon info plus live networks.
// ABOUTME: Serialises to the nested mapping consumers query.

use serde_json::Value;
use std::collections::BTreeMap;

use super::{CorrelatedNetwork, EngineInfo, Extra};

/// Key holding the published network sequence.
pub const NETWORK_KEY: &str = "network";
/// Key holding the live interface → network name map.
pub const MANAGED_INTERFACES_KEY: &str = "managed_interfaces";

/// The composed root fact. Absent info fields mean "unknown".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DockerFact {
    pub info: Option<EngineInfo>,
    /// Published networks in listing order; `None` when the listing failed.
    pub network: Option<Vec<CorrelatedNetwork>>,
    /// `None` when the listing failed.
    pub managed_interfaces: Option<BTreeMap<String, String>>,
}

impl DockerFact {
    /// Render as the nested JSON mapping published under `docker`.
    ///
    /// Each network renders as its inspection object, so engine fields keep
    /// the engine's own names. Parts that did not resolve are left out.
    pub fn to_value(&self) -> Value {
        let mut map = self.info.as_ref().map(EngineInfo::to_map).unwrap_or_default();

        if let Some(network) = &self.network {
            let networks = network
                .iter()
                .filter_map(|n| n.detail.as_ref())
                .filter_map(|d| serde_json::to_value(d).ok())
                .collect();
            map.insert(NETWORK_KEY.to_string(), Value::Array(networks));
        }

        if let Some(managed_interfaces) = &self.managed_interfaces {
            let managed: Extra = managed_interfaces
                .iter()
                .map(|(iface, net)| (iface.clone(), Value::from(net.as_str())))
                .collect();
            map.insert(MANAGED_INTERFACES_KEY.to_string(), Value::Object(managed));
        }

        Value::Object(map)
    }
}
