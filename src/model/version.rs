// ABOUTME: Client and server version descriptors reported by `version`.
// ABOUTME: A client-only install has no server section.

use serde::{Deserialize, Serialize};

use super::Extra;

/// Version and build metadata of one side of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionDetail {
    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "ApiVersion", default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(rename = "GitCommit", default, skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<String>,

    #[serde(rename = "GoVersion", default, skip_serializing_if = "Option::is_none")]
    pub go_version: Option<String>,

    #[serde(rename = "Os", default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    #[serde(rename = "Arch", default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    #[serde(rename = "BuildTime", default, skip_serializing_if = "Option::is_none")]
    pub build_time: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Paired client/server descriptors from one `version` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "Client")]
    pub client: VersionDetail,

    #[serde(rename = "Server", default, skip_serializing_if = "Option::is_none")]
    pub server: Option<VersionDetail>,
}

impl VersionInfo {
    pub fn client_version(&self) -> &str {
        &self.client.version
    }

    pub fn server_version(&self) -> Option<&str> {
        self.server.as_ref().map(|s| s.version.as_str())
    }
}
