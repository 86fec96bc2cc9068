// ABOUTME: Per-cycle resolution context with memoized results.
// ABOUTME: Concurrent fact requests share one pipeline run and one set of subprocesses.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::compose::ComposedFacts;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::host::{FactSink, Host};
use crate::types::FactName;

use super::resolution::Resolution;

/// Outcome of one completed pass.
#[derive(Debug, Clone)]
pub struct ResolvedFacts {
    pub facts: ComposedFacts,
    pub diagnostics: Diagnostics,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ResolvedFacts {
    pub fn value(&self, name: FactName) -> Option<Value> {
        self.facts.value(name)
    }

    pub fn publish_to(&self, sink: &mut impl FactSink) {
        self.facts.publish_to(sink);
    }
}

/// Run every stage in order and return the composed facts.
pub async fn run_pipeline<H: Host + ?Sized>(
    host: Arc<H>,
    config: Arc<Config>,
) -> (ComposedFacts, Diagnostics) {
    Resolution::new(host, config)
        .locate_tool()
        .fetch_info()
        .await
        .fetch_version()
        .await
        .list_networks()
        .await
        .inspect_networks()
        .await
        .fetch_tokens()
        .await
        .compose()
        .into_parts()
}

/// One fact-collection cycle.
///
/// The pipeline runs on first access; every later request, concurrent or
/// not, reads the memoized result. Start a new cycle to re-run commands.
pub struct ResolutionCycle<H: ?Sized> {
    host: Arc<H>,
    config: Arc<Config>,
    resolved: OnceCell<Arc<ResolvedFacts>>,
}

impl<H: Host + ?Sized> ResolutionCycle<H> {
    pub fn new(host: Arc<H>, config: Config) -> Self {
        Self {
            host,
            config: Arc::new(config),
            resolved: OnceCell::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.initialized()
    }

    /// Resolve once and share the result.
    pub async fn resolve(&self) -> Arc<ResolvedFacts> {
        let resolved = self
            .resolved
            .get_or_init(|| async {
                let started_at = Utc::now();
                tracing::debug!(%started_at, "starting resolution cycle");
                let (facts, diagnostics) =
                    run_pipeline(Arc::clone(&self.host), Arc::clone(&self.config)).await;
                Arc::new(ResolvedFacts {
                    facts,
                    diagnostics,
                    started_at,
                    finished_at: Utc::now(),
                })
            })
            .await;
        Arc::clone(resolved)
    }

    /// Value of one fact, `None` when unset.
    pub async fn fact(&self, name: FactName) -> Option<Value> {
        self.resolve().await.value(name)
    }

    /// Publish every fact of this cycle to the framework.
    pub async fn publish(&self, sink: &mut impl FactSink) {
        self.resolve().await.publish_to(sink);
    }
}
