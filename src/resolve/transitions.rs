// ABOUTME: State transition methods for the resolution pipeline.
// ABOUTME: Each consumes self; a failed stage yields an absent value, never an error.

use snafu::ResultExt;
use std::sync::Arc;

use crate::compose::{ComposedFacts, compose_docker};
use crate::config::Config;
use crate::correlate::{Correlator, INTERFACES_FACT, LiveInterfaces, inspect_all};
use crate::diagnostics::{Diagnostics, Warning};
use crate::host::Host;
use crate::model::{SwarmRole, SwarmTokens};
use crate::parse::{
    ParseError, parse_info, parse_network_list, parse_token, parse_version, version_from_value,
};
use crate::runner::{CommandError, CommandRunner, EngineCommand};

use super::VERSION_FACT;
use super::error::{CommandSnafu, ParseSnafu, Stage, StageError};
use super::resolution::Resolution;
use super::state::{
    Composed, InfoFetched, NetworksInspected, NetworksListed, NotStarted, TokensFetched,
    ToolLocated, VersionFetched,
};

// =============================================================================
// Internal Helpers
// =============================================================================

impl<H: Host + ?Sized, S> Resolution<H, S> {
    fn transition<T>(self, state: T) -> Resolution<H, T> {
        Resolution {
            host: self.host,
            config: self.config,
            runner: self.runner,
            diagnostics: self.diagnostics,
            state,
        }
    }

    /// Run one command and parse its output. `None` without a runner.
    async fn try_stage<T>(
        &self,
        stage: Stage,
        command: EngineCommand,
        parse: impl FnOnce(&str) -> Result<T, ParseError>,
    ) -> Option<Result<T, StageError>> {
        let runner = self.runner.as_ref()?;
        let result = match runner.run(&command).await.context(CommandSnafu { stage }) {
            Ok(text) => parse(&text).context(ParseSnafu { stage }),
            Err(e) => Err(e),
        };
        Some(result)
    }

    /// Like `try_stage`, recording any failure as a warning.
    async fn stage<T>(
        &mut self,
        stage: Stage,
        command: EngineCommand,
        parse: impl FnOnce(&str) -> Result<T, ParseError>,
    ) -> Option<T> {
        match self.try_stage(stage, command, parse).await? {
            Ok(value) => {
                tracing::info!(%stage, "stage resolved");
                Some(value)
            }
            Err(e) => {
                self.diagnostics.warn(Warning::stage_failed(&e));
                None
            }
        }
    }
}

// =============================================================================
// Transitions
// =============================================================================

impl<H: Host + ?Sized> Resolution<H, NotStarted> {
    /// Start a fresh pass. Nothing from any earlier pass is reused.
    pub fn new(host: Arc<H>, config: Arc<Config>) -> Self {
        Resolution {
            host,
            config,
            runner: None,
            diagnostics: Diagnostics::default(),
            state: NotStarted,
        }
    }

    /// Find the engine client and fix the command syntax for the pass.
    pub fn locate_tool(mut self) -> Resolution<H, ToolLocated> {
        match CommandRunner::locate(
            Arc::clone(&self.host),
            &self.config.tool,
            self.config.platform,
            self.config.timeout,
        ) {
            Ok(runner) => self.runner = Some(runner),
            Err(source) => {
                let error = StageError::Command {
                    stage: Stage::LocateTool,
                    source,
                };
                self.diagnostics.warn(Warning::stage_failed(&error));
            }
        }
        self.transition(ToolLocated)
    }
}

impl<H: Host + ?Sized> Resolution<H, ToolLocated> {
    pub async fn fetch_info(mut self) -> Resolution<H, InfoFetched> {
        let info = self.stage(Stage::Info, EngineCommand::Info, parse_info).await;
        if let Some(info) = &info {
            tracing::debug!(
                server_version = info.server_version(),
                architecture = info.architecture(),
                ncpu = info.ncpu(),
                "engine info"
            );
        }
        self.transition(InfoFetched { info })
    }
}

impl<H: Host + ?Sized> Resolution<H, InfoFetched> {
    /// Reuse the host's `docker_version` fact when it is already resolved,
    /// otherwise run `version`.
    pub async fn fetch_version(mut self) -> Resolution<H, VersionFetched> {
        let mut version = None;
        if self.tool_available()
            && let Some(value) = self.host.lookup_fact(VERSION_FACT)
        {
            match version_from_value(value) {
                Ok(v) => version = Some(v),
                Err(source) => {
                    let error = StageError::Parse {
                        stage: Stage::Version,
                        source,
                    };
                    self.diagnostics.warn(Warning::stage_failed(&error));
                }
            }
        }
        if version.is_none() {
            version = self
                .stage(Stage::Version, EngineCommand::Version, parse_version)
                .await;
        }

        let info = self.state.info.take();
        self.transition(VersionFetched { info, version })
    }
}

impl<H: Host + ?Sized> Resolution<H, VersionFetched> {
    pub async fn list_networks(mut self) -> Resolution<H, NetworksListed> {
        let networks = self
            .stage(Stage::NetworkList, EngineCommand::NetworkList, |text| {
                Ok(parse_network_list(text))
            })
            .await;

        let VersionFetched { info, version } = std::mem::take(&mut self.state);
        self.transition(NetworksListed {
            info,
            version,
            networks,
        })
    }
}

impl<H: Host + ?Sized> Resolution<H, NetworksListed> {
    /// Inspect each listed network and mark which ones are live.
    pub async fn inspect_networks(mut self) -> Resolution<H, NetworksInspected> {
        let NetworksListed {
            info,
            version,
            networks,
        } = std::mem::take(&mut self.state);

        let correlation = match (self.runner.as_ref(), networks) {
            (Some(runner), Some(summaries)) => {
                let inspected = inspect_all(runner, summaries, &mut self.diagnostics).await;
                let live = match &self.config.interfaces {
                    Some(names) => LiveInterfaces::from_names(names),
                    None => {
                        LiveInterfaces::from_fact(self.host.lookup_fact(INTERFACES_FACT).as_ref())
                    }
                };
                let outcome = Correlator::new(&self.config.bridge, &live)
                    .correlate(inspected, &mut self.diagnostics);
                Some(outcome)
            }
            _ => None,
        };

        self.transition(NetworksInspected {
            info,
            version,
            correlation,
        })
    }
}

impl<H: Host + ?Sized> Resolution<H, NetworksInspected> {
    /// Fetch each join token on its own; one failing leaves the other intact.
    pub async fn fetch_tokens(mut self) -> Resolution<H, TokensFetched> {
        let mut tokens = SwarmTokens::default();
        for role in SwarmRole::ALL {
            let result = self
                .try_stage(Stage::JoinToken, EngineCommand::JoinToken(role), |text| {
                    Ok(parse_token(text))
                })
                .await;
            let token = match result {
                Some(Ok(token)) => token,
                // Not a swarm manager: the usual case, not worth a warning.
                Some(Err(StageError::Command {
                    source: CommandError::NonZeroExit { stderr, .. },
                    ..
                })) => {
                    tracing::debug!(%role, stderr, "no join token");
                    None
                }
                Some(Err(e)) => {
                    self.diagnostics.warn(Warning::stage_failed(&e));
                    None
                }
                None => None,
            };
            tokens.set(role, token);
        }

        let NetworksInspected {
            info,
            version,
            correlation,
        } = std::mem::take(&mut self.state);
        self.transition(TokensFetched {
            info,
            version,
            correlation,
            tokens,
        })
    }
}

impl<H: Host + ?Sized> Resolution<H, TokensFetched> {
    pub fn compose(mut self) -> Resolution<H, Composed> {
        let TokensFetched {
            info,
            version,
            correlation,
            tokens,
        } = std::mem::take(&mut self.state);

        let facts = ComposedFacts {
            docker: compose_docker(info, correlation.as_ref()),
            version,
            tokens,
        };
        tracing::info!(
            warnings = self.diagnostics.warnings().len(),
            tool_available = self.tool_available(),
            "resolution composed"
        );
        self.transition(Composed { facts })
    }
}
