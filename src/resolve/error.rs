// ABOUTME: Stage error types with SNAFU pattern.
// ABOUTME: Unifies command and parse failures for programmatic handling.

use snafu::Snafu;
use std::fmt;

use crate::parse::ParseError;
use crate::runner::CommandError;

/// Pipeline stage that produced a value or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LocateTool,
    Info,
    Version,
    NetworkList,
    NetworkInspect,
    JoinToken,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LocateTool => "locate-tool",
            Stage::Info => "info",
            Stage::Version => "version",
            Stage::NetworkList => "network-list",
            Stage::NetworkInspect => "network-inspect",
            Stage::JoinToken => "join-token",
        };
        f.write_str(name)
    }
}

/// A failure caught at a stage boundary.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StageError {
    #[snafu(display("{stage} command failed: {source}"))]
    Command { stage: Stage, source: CommandError },

    #[snafu(display("{stage} output malformed: {source}"))]
    Parse { stage: Stage, source: ParseError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageErrorKind {
    /// Engine client executable not found.
    ToolUnavailable,
    /// Bounded wait exceeded.
    CommandTimeout,
    /// Client ran and reported an error.
    CommandNonZeroExit,
    /// Command could not be started.
    CommandSpawn,
    /// Output could not be parsed.
    MalformedOutput,
}

impl StageError {
    pub fn stage(&self) -> Stage {
        match self {
            StageError::Command { stage, .. } | StageError::Parse { stage, .. } => *stage,
        }
    }

    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> StageErrorKind {
        match self {
            StageError::Command { source, .. } => match source {
                CommandError::ToolUnavailable(_) => StageErrorKind::ToolUnavailable,
                CommandError::Timeout { .. } => StageErrorKind::CommandTimeout,
                CommandError::NonZeroExit { .. } => StageErrorKind::CommandNonZeroExit,
                CommandError::Spawn { .. } => StageErrorKind::CommandSpawn,
            },
            StageError::Parse { .. } => StageErrorKind::MalformedOutput,
        }
    }
}
