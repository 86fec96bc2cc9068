// ABOUTME: Configuration types and parsing for docker-facts.yml.
// ABOUTME: Engine client name, platform, command timeout and bridge naming.

mod init;

pub use init::init_config;

use crate::correlate::BridgeNaming;
use crate::error::{Error, Result};
use crate::runner::{DEFAULT_TIMEOUT, Platform};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "docker-facts.yml";
pub const CONFIG_FILENAME_ALT: &str = "docker-facts.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".docker-facts/config.yml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Engine client executable to look for.
    pub tool: String,

    /// Command syntax family; defaults to the host's.
    pub platform: Platform,

    /// Bound on every engine command.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    pub bridge: BridgeNaming,

    /// Static interface list used instead of the host's interfaces fact.
    pub interfaces: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            platform: Platform::host(),
            timeout: DEFAULT_TIMEOUT,
            bridge: BridgeNaming::default(),
            interfaces: None,
        }
    }
}

fn default_tool() -> String {
    "docker".to_string()
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults".
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like `discover`, but falls back to defaults when no file exists.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tool.trim().is_empty() {
            return Err(Error::InvalidConfig("tool cannot be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("timeout must be positive".to_string()));
        }
        if self.bridge.id_length == 0 {
            return Err(Error::InvalidConfig(
                "bridge.id_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
