// ABOUTME: Resolution state marker types for the type state pattern.
// ABOUTME: Each state carries what the stages so far have produced.

use crate::compose::ComposedFacts;
use crate::correlate::CorrelationOutcome;
use crate::model::{EngineInfo, NetworkSummary, SwarmTokens, VersionInfo};

/// Fresh cycle, nothing run yet.
/// Available actions: `locate_tool()`
#[derive(Debug, Clone, Copy, Default)]
pub struct NotStarted;

/// Tool lookup done (successfully or not).
/// Available actions: `fetch_info()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolLocated;

/// Available actions: `fetch_version()`
#[derive(Debug, Clone, Default)]
pub struct InfoFetched {
    pub(crate) info: Option<EngineInfo>,
}

/// Available actions: `list_networks()`
#[derive(Debug, Clone, Default)]
pub struct VersionFetched {
    pub(crate) info: Option<EngineInfo>,
    pub(crate) version: Option<VersionInfo>,
}

/// Available actions: `inspect_networks()`
#[derive(Debug, Clone, Default)]
pub struct NetworksListed {
    pub(crate) info: Option<EngineInfo>,
    pub(crate) version: Option<VersionInfo>,
    pub(crate) networks: Option<Vec<NetworkSummary>>,
}

/// Available actions: `fetch_tokens()`
#[derive(Debug, Clone, Default)]
pub struct NetworksInspected {
    pub(crate) info: Option<EngineInfo>,
    pub(crate) version: Option<VersionInfo>,
    pub(crate) correlation: Option<CorrelationOutcome>,
}

/// Available actions: `compose()`
#[derive(Debug, Clone, Default)]
pub struct TokensFetched {
    pub(crate) info: Option<EngineInfo>,
    pub(crate) version: Option<VersionInfo>,
    pub(crate) correlation: Option<CorrelationOutcome>,
    pub(crate) tokens: SwarmTokens,
}

/// Terminal state.
/// Available actions: `facts()`, `into_parts()`
#[derive(Debug, Clone, Default)]
pub struct Composed {
    pub(crate) facts: ComposedFacts,
}

impl InfoFetched {
    pub fn info(&self) -> Option<&EngineInfo> {
        self.info.as_ref()
    }
}

impl VersionFetched {
    pub fn version(&self) -> Option<&VersionInfo> {
        self.version.as_ref()
    }
}

impl NetworksListed {
    pub fn networks(&self) -> Option<&[NetworkSummary]> {
        self.networks.as_deref()
    }
}

impl NetworksInspected {
    pub fn correlation(&self) -> Option<&CorrelationOutcome> {
        self.correlation.as_ref()
    }
}

impl TokensFetched {
    pub fn tokens(&self) -> &SwarmTokens {
        &self.tokens
    }
}
