// ABOUTME: Diagnostics accumulator for non-fatal problems during a resolution cycle.
// ABOUTME: Each downgrade to an absent value is recorded here instead of failing the cycle.

use crate::resolve::{Stage, StageError, StageErrorKind};

/// Collects warnings while a cycle runs.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(stage = %warning.stage, kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether network correlation fell back to treating every network as live.
    pub fn is_degraded(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.kind == WarningKind::DegradedCorrelation)
    }
}

/// A non-fatal problem tied to the stage that hit it.
#[derive(Debug, Clone)]
pub struct Warning {
    pub stage: Stage,
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// A stage failure that was converted to an absent value.
    pub fn stage_failed(error: &StageError) -> Self {
        Self {
            stage: error.stage(),
            kind: error.kind().into(),
            message: error.to_string(),
        }
    }

    /// The interfaces fact was missing, so every network counts as live.
    pub fn degraded_correlation(message: impl Into<String>) -> Self {
        Self {
            stage: Stage::NetworkInspect,
            kind: WarningKind::DegradedCorrelation,
            message: message.into(),
        }
    }
}

/// Categories of warnings a cycle can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Engine client not installed; every dependent fact is unset.
    ToolUnavailable,
    CommandTimeout,
    /// The client ran but reported an error, e.g. the daemon is down.
    CommandNonZeroExit,
    CommandSpawn,
    MalformedOutput,
    DegradedCorrelation,
}

impl From<StageErrorKind> for WarningKind {
    fn from(kind: StageErrorKind) -> Self {
        match kind {
            StageErrorKind::ToolUnavailable => WarningKind::ToolUnavailable,
            StageErrorKind::CommandTimeout => WarningKind::CommandTimeout,
            StageErrorKind::CommandNonZeroExit => WarningKind::CommandNonZeroExit,
            StageErrorKind::CommandSpawn => WarningKind::CommandSpawn,
            StageErrorKind::MalformedOutput => WarningKind::MalformedOutput,
        }
    }
}
