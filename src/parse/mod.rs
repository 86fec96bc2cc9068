// ABOUTME: Pure parsers turning raw engine output into typed structures.
// ABOUTME: JSON objects, whitespace tables and bare tokens.

mod info;
mod network;
mod token;
mod version;

pub use info::parse_info;
pub use network::{parse_network_detail, parse_network_list};
pub use token::parse_token;
pub use version::{parse_version, version_from_value};

/// Output that could not be turned into the expected structure.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{what}: empty output")]
    Empty { what: &'static str },

    #[error("{what}: invalid JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{what}: expected {expected}, found {found}")]
    UnexpectedShape {
        what: &'static str,
        expected: &'static str,
        found: String,
    },
}

/// Decode a JSON document after rejecting blank output.
fn decode<T: serde::de::DeserializeOwned>(what: &'static str, text: &str) -> Result<T, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty { what });
    }
    serde_json::from_str(text).map_err(|source| ParseError::Json { what, source })
}

/// Short description of a JSON value's type for error messages.
fn kind_of(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
    .to_string()
}
