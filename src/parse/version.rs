// ABOUTME: Parser for `version --format '{{json .}}'` output.
// ABOUTME: Also accepts an already-decoded version fact from the host.

use serde_json::Value;

use super::{ParseError, decode, kind_of};
use crate::model::VersionInfo;

const WHAT: &str = "engine version";

/// Decode client/server versions. A missing or null `Server` is not an error.
pub fn parse_version(text: &str) -> Result<VersionInfo, ParseError> {
    version_from_value(decode(WHAT, text)?)
}

/// Decode a version structure that was already parsed to JSON elsewhere.
pub fn version_from_value(value: Value) -> Result<VersionInfo, ParseError> {
    if !value.is_object() {
        return Err(ParseError::UnexpectedShape {
            what: WHAT,
            expected: "an object",
            found: kind_of(&value),
        });
    }
    serde_json::from_value(value).map_err(|source| ParseError::Json { what: WHAT, source })
}
