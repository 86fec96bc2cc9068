// ABOUTME: Parsers for `network ls` tables and `network inspect` JSON.
// ABOUTME: Bad rows are skipped; a bad inspect result fails only that network.

use serde_json::Value;

use super::{ParseError, decode, kind_of};
use crate::model::{NetworkDetail, NetworkSummary};
use crate::types::NetworkId;

const WHAT: &str = "network inspect";

/// Columns of `network ls`: NETWORK ID, NAME, DRIVER, SCOPE.
const LIST_COLUMNS: usize = 4;

/// Parse the network listing table.
///
/// The header row is skipped when present, so output already stripped of
/// it parses the same. Rows with fewer than four columns are dropped.
pub fn parse_network_list(text: &str) -> Vec<NetworkSummary> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_header(line))
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < LIST_COLUMNS {
                tracing::debug!(line, "skipping short network listing row");
                return None;
            }
            Some(NetworkSummary {
                id: NetworkId::new(cols[0]),
                name: cols[1].to_string(),
                driver: cols[2].to_string(),
                scope: cols[3].to_string(),
            })
        })
        .collect()
}

fn is_header(line: &str) -> bool {
    line.starts_with("NETWORK ID")
}

/// Decode one network's inspection output.
///
/// The engine prints a one-element array; a bare object is accepted too.
pub fn parse_network_detail(text: &str) -> Result<NetworkDetail, ParseError> {
    let value: Value = decode(WHAT, text)?;
    let object = match value {
        Value::Array(items) => items.into_iter().next().ok_or(ParseError::UnexpectedShape {
            what: WHAT,
            expected: "one network",
            found: "an empty array".to_string(),
        })?,
        other => other,
    };
    if !object.is_object() {
        return Err(ParseError::UnexpectedShape {
            what: WHAT,
            expected: "an object",
            found: kind_of(&object),
        });
    }
    serde_json::from_value(object).map_err(|source| ParseError::Json { what: WHAT, source })
}
