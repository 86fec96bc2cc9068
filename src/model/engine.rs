// ABOUTME: Daemon attributes reported by `info`.
// ABOUTME: The decoded object is kept as-is; typed accessors read from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Extra;

/// Daemon-reported attributes from one `info` invocation.
///
/// Every field is kept exactly as the engine printed it, explicit `null`s
/// included. Accessors return `None` for a missing field, a `null`, or a
/// value of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineInfo {
    fields: Extra,
}

impl EngineInfo {
    pub fn from_fields(fields: Extra) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn architecture(&self) -> Option<&str> {
        self.text("Architecture")
    }

    pub fn server_version(&self) -> Option<&str> {
        self.text("ServerVersion")
    }

    pub fn ncpu(&self) -> Option<u64> {
        self.get("NCPU").and_then(Value::as_u64)
    }

    /// Top-level fields as a JSON object, unchanged.
    pub fn to_map(&self) -> Extra {
        self.fields.clone()
    }
}
