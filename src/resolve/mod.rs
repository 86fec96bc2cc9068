// ABOUTME: Resolution orchestrator using the type state pattern.
// ABOUTME: Runs the stages in order and memoizes one cycle's result.

mod cycle;
mod error;
mod resolution;
mod state;
mod transitions;

pub use cycle::{ResolutionCycle, ResolvedFacts, run_pipeline};
pub use error::{CommandSnafu, ParseSnafu, Stage, StageError, StageErrorKind};
pub use resolution::Resolution;
pub use state::{
    Composed, InfoFetched, NetworksInspected, NetworksListed, NotStarted, TokensFetched,
    ToolLocated, VersionFetched,
};

/// Host fact consulted before running `version`.
pub const VERSION_FACT: &str = "docker_version";
