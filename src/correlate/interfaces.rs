// ABOUTME: The host's live interface names, read from another collector's fact.
// ABOUTME: Accepts the comma-separated string, array and object shapes.

use serde_json::Value;
use std::collections::BTreeSet;

/// Name of the host fact listing active interfaces.
pub const INTERFACES_FACT: &str = "interfaces";

/// Live host interfaces, or `Unknown` when the fact is not resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveInterfaces {
    Known(BTreeSet<String>),
    Unknown,
}

impl LiveInterfaces {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LiveInterfaces::Known(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    /// Interpret the interfaces fact.
    ///
    /// `"br-19a6ebf6f5a5,docker0,eth0,lo"`, `["eth0", "lo"]` and
    /// `{"eth0": {...}, "lo": {...}}` are all understood. Anything else,
    /// including a missing fact, is `Unknown`.
    pub fn from_fact(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(list)) => Self::from_names(list.split(',')),
            Some(Value::Array(items)) => {
                let names: Option<Vec<&str>> = items.iter().map(Value::as_str).collect();
                names.map_or(LiveInterfaces::Unknown, Self::from_names)
            }
            Some(Value::Object(map)) => Self::from_names(map.keys()),
            _ => LiveInterfaces::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, LiveInterfaces::Known(_))
    }

    /// `None` when the set is unknown.
    pub fn contains(&self, name: &str) -> Option<bool> {
        match self {
            LiveInterfaces::Known(set) => Some(set.contains(name)),
            LiveInterfaces::Unknown => None,
        }
    }
}
