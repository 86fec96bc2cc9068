// ABOUTME: Network correlator: inspects listed networks and decides which are live.
// ABOUTME: A network is live when one of its candidate names is a host interface.

mod interfaces;

pub use interfaces::{INTERFACES_FACT, LiveInterfaces};

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::diagnostics::{Diagnostics, Warning};
use crate::host::Host;
use crate::model::{CorrelatedNetwork, NetworkDetail, NetworkSummary};
use crate::parse::parse_network_detail;
use crate::resolve::{Stage, StageError};
use crate::runner::{CommandRunner, EngineCommand};
use crate::types::NetworkId;

/// Rule deriving a bridge interface name from a network id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeNaming {
    pub prefix: String,
    /// Number of id characters kept after the prefix.
    pub id_length: usize,
}

impl Default for BridgeNaming {
    fn default() -> Self {
        Self {
            prefix: "br-".to_string(),
            id_length: 12,
        }
    }
}

impl BridgeNaming {
    pub fn interface_name(&self, id: &NetworkId) -> String {
        format!("{}{}", self.prefix, id.short(self.id_length))
    }
}

/// Correlation result for one listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorrelationOutcome {
    /// One entry per listed network, in listing order.
    pub networks: Vec<CorrelatedNetwork>,
    /// Live interface name → network name.
    pub managed_interfaces: BTreeMap<String, String>,
    /// Every network was assumed live because interfaces were unknown.
    pub degraded: bool,
}

impl CorrelationOutcome {
    /// Networks surfaced in the published fact: live and successfully inspected.
    pub fn published(&self) -> impl Iterator<Item = &CorrelatedNetwork> {
        self.networks
            .iter()
            .filter(|n| n.live && n.detail.is_some())
    }
}

/// Inspect every listed network, one command each.
///
/// A failed or malformed inspection leaves that network without detail and
/// is recorded in `diagnostics`; the remaining networks are unaffected.
pub async fn inspect_all<H: Host + ?Sized>(
    runner: &CommandRunner<H>,
    summaries: Vec<NetworkSummary>,
    diagnostics: &mut Diagnostics,
) -> Vec<(NetworkSummary, Option<NetworkDetail>)> {
    let mut inspected = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let command = EngineCommand::NetworkInspect(summary.name.clone());
        let detail = match runner.run(&command).await {
            Ok(text) => parse_network_detail(&text).map_err(|source| StageError::Parse {
                stage: Stage::NetworkInspect,
                source,
            }),
            Err(source) => Err(StageError::Command {
                stage: Stage::NetworkInspect,
                source,
            }),
        };
        let detail = match detail {
            Ok(detail) => Some(detail),
            Err(e) => {
                diagnostics.warn(Warning::stage_failed(&e));
                None
            }
        };
        inspected.push((summary, detail));
    }
    inspected
}

/// Matches networks against the live interface set.
pub struct Correlator<'a> {
    naming: &'a BridgeNaming,
    live: &'a LiveInterfaces,
}

impl<'a> Correlator<'a> {
    pub fn new(naming: &'a BridgeNaming, live: &'a LiveInterfaces) -> Self {
        Self { naming, live }
    }

    /// Interface names under which this network could appear on the host.
    pub fn candidates(
        &self,
        summary: &NetworkSummary,
        detail: Option<&NetworkDetail>,
    ) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        names.insert(summary.id.as_str().to_string());
        names.insert(self.naming.interface_name(&summary.id));
        if let Some(detail) = detail {
            names.insert(detail.id.as_str().to_string());
            names.insert(self.naming.interface_name(&detail.id));
            if let Some(bridge) = detail.bridge_name() {
                names.insert(bridge.to_string());
            }
        }
        names
    }

    /// Mark each inspected network live or not, keeping listing order.
    pub fn correlate(
        &self,
        inspected: Vec<(NetworkSummary, Option<NetworkDetail>)>,
        diagnostics: &mut Diagnostics,
    ) -> CorrelationOutcome {
        let degraded = !self.live.is_known();
        if degraded && !inspected.is_empty() {
            diagnostics.warn(Warning::degraded_correlation(format!(
                "interfaces fact unavailable, treating all {} networks as live",
                inspected.len()
            )));
        }

        let mut managed_interfaces = BTreeMap::new();
        let networks = inspected
            .into_iter()
            .map(|(summary, detail)| {
                let matched: Vec<String> = self
                    .candidates(&summary, detail.as_ref())
                    .into_iter()
                    .filter(|name| self.live.contains(name) == Some(true))
                    .collect();
                let live = degraded || !matched.is_empty();
                for iface in matched {
                    managed_interfaces.insert(iface, summary.name.clone());
                }
                tracing::debug!(network = %summary.name, live, "correlated network");
                CorrelatedNetwork {
                    summary,
                    detail,
                    live,
                }
            })
            .collect();

        CorrelationOutcome {
            networks,
            managed_interfaces,
            degraded,
        }
    }
}
