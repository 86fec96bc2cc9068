// ABOUTME: Generic resolution struct parameterized by state marker.
// ABOUTME: Holds the host, the cycle's runner and the diagnostics ledger.

use std::sync::Arc;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::runner::CommandRunner;

use super::state::Composed;
use crate::compose::ComposedFacts;

/// One pass through the pipeline, parameterized by its current stage.
///
/// The runner is fixed when the tool is located and reused for every later
/// command of the pass. `None` means the tool is missing and every later
/// stage yields nothing without running anything.
pub struct Resolution<H: ?Sized, S> {
    pub(crate) host: Arc<H>,
    pub(crate) config: Arc<Config>,
    pub(crate) runner: Option<CommandRunner<H>>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) state: S,
}

impl<H: ?Sized, S> Resolution<H, S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tool_available(&self) -> bool {
        self.runner.is_some()
    }
}

impl<H: ?Sized> Resolution<H, Composed> {
    pub fn facts(&self) -> &ComposedFacts {
        &self.state.facts
    }

    pub fn into_parts(self) -> (ComposedFacts, Diagnostics) {
        (self.state.facts, self.diagnostics)
    }
}
