// ABOUTME: Parser for `info --format '{{json .}}'` output.
// ABOUTME: Unknown daemon fields pass through so the fact mirrors the engine.

use serde_json::Value;

use super::{ParseError, decode, kind_of};
use crate::model::EngineInfo;

const WHAT: &str = "engine info";

/// Decode daemon info. The object is kept verbatim, nulls included.
pub fn parse_info(text: &str) -> Result<EngineInfo, ParseError> {
    match decode(WHAT, text)? {
        Value::Object(fields) => Ok(EngineInfo::from_fields(fields)),
        other => Err(ParseError::UnexpectedShape {
            what: WHAT,
            expected: "an object",
            found: kind_of(&other),
        }),
    }
}
