// ABOUTME: Virtual network structures from `network ls` and `network inspect`.
// ABOUTME: CorrelatedNetwork pairs a listing row with its detail and liveness.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Extra;
use crate::types::{ContainerId, NetworkId};

/// One row of the network listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub id: NetworkId,
    pub name: String,
    pub driver: String,
    pub scope: String,
}

/// Address management section of an inspected network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipam {
    #[serde(rename = "Driver", default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    #[serde(rename = "Config", default)]
    pub config: Option<Vec<IpamConfig>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpamConfig {
    #[serde(rename = "Subnet", default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,

    #[serde(rename = "Gateway", default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A container's attachment to a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "IPv4Address", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Full inspection result for one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDetail {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Id")]
    pub id: NetworkId,

    #[serde(rename = "Driver", default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    #[serde(rename = "Scope", default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(rename = "IPAM", default, skip_serializing_if = "Option::is_none")]
    pub ipam: Option<Ipam>,

    #[serde(rename = "Internal", default)]
    pub internal: bool,

    #[serde(rename = "Attachable", default)]
    pub attachable: bool,

    #[serde(rename = "Containers", default)]
    pub containers: Option<BTreeMap<ContainerId, Endpoint>>,

    #[serde(rename = "Options", default)]
    pub options: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Option naming the host-side bridge device explicitly.
pub const BRIDGE_NAME_OPTION: &str = "com.docker.network.bridge.name";

impl NetworkDetail {
    fn first_config(&self) -> Option<&IpamConfig> {
        self.ipam
            .as_ref()
            .and_then(|ipam| ipam.config.as_ref())
            .and_then(|configs| configs.first())
    }

    pub fn subnet(&self) -> Option<&str> {
        self.first_config().and_then(|c| c.subnet.as_deref())
    }

    pub fn gateway(&self) -> Option<&str> {
        self.first_config().and_then(|c| c.gateway.as_deref())
    }

    /// Host interface name declared through the network's options.
    pub fn bridge_name(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.get(BRIDGE_NAME_OPTION))
            .map(String::as_str)
    }
}

/// A listed network with its inspection result and liveness.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedNetwork {
    pub summary: NetworkSummary,
    /// `None` when inspection failed or returned malformed output.
    pub detail: Option<NetworkDetail>,
    pub live: bool,
}

impl CorrelatedNetwork {
    pub fn name(&self) -> &str {
        &self.summary.name
    }

    /// Engine id, preferring the full id from inspection.
    pub fn id(&self) -> &NetworkId {
        self.detail.as_ref().map_or(&self.summary.id, |d| &d.id)
    }
}
