// ABOUTME: Tests for engine output parsers against recorded fixtures.
// ABOUTME: Includes property tests for listing rows and join token trimming.

mod support;

use docker_facts::parse::{
    ParseError, parse_info, parse_network_detail, parse_network_list, parse_token, parse_version,
};
use proptest::prelude::*;
use serde_json::{Value, json};
use support::fixture;

#[test]
fn info_fixture_round_trips() {
    let raw = fixture("docker_info.json");
    let info = parse_info(&raw).unwrap();

    assert_eq!(info.architecture(), Some("x86_64"));
    assert_eq!(info.server_version(), Some("17.03.1-ce"));

    let expected: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(Value::Object(info.to_map()), expected);
}

#[test]
fn info_keeps_explicit_nulls() {
    let info = parse_info(r#"{"ID":null,"KernelVersion":null,"Architecture":"x86_64"}"#).unwrap();

    assert_eq!(
        Value::Object(info.to_map()),
        json!({"ID": null, "KernelVersion": null, "Architecture": "x86_64"})
    );
    assert_eq!(info.architecture(), Some("x86_64"));
}

#[test]
fn info_with_odd_field_types_still_parses() {
    let info = parse_info(r#"{"NCPU":"2","MemTotal":null,"Name":["a"]}"#).unwrap();

    assert_eq!(info.ncpu(), None);
    assert_eq!(info.get("Name"), Some(&json!(["a"])));
}

#[test]
fn version_fixture() {
    let version = parse_version(&fixture("docker_version.json")).unwrap();

    assert_eq!(version.client_version(), "17.03.1-ce");
    assert_eq!(version.server_version(), Some("17.03.1-ce"));
}

#[test]
fn listing_fixture_keeps_order() {
    let networks = parse_network_list(&fixture("docker_network_list.txt"));
    let names: Vec<&str> = networks.iter().map(|n| n.name.as_str()).collect();

    assert_eq!(names, ["bridge", "app_net", "test_default", "host", "none"]);
    assert_eq!(networks[1].id.as_str(), "19a6ebf6f5a5");
    assert_eq!(networks[4].driver, "null");
}

#[test]
fn inspect_fixtures_parse() {
    for name in ["bridge", "app_net", "test_default", "host", "none"] {
        let detail =
            parse_network_detail(&fixture(&format!("docker_network_inspect_{name}.json"))).unwrap();
        assert_eq!(detail.name, name);
    }
}

#[test]
fn inspect_exposes_addressing() {
    let detail = parse_network_detail(&fixture("docker_network_inspect_app_net.json")).unwrap();

    assert_eq!(detail.subnet(), Some("172.18.0.0/16"));
    assert_eq!(detail.gateway(), Some("172.18.0.1"));
    assert!(detail.id.as_str().starts_with("19a6ebf6f5a5"));
}

#[test]
fn default_bridge_declares_its_interface() {
    let detail = parse_network_detail(&fixture("docker_network_inspect_bridge.json")).unwrap();

    assert_eq!(detail.bridge_name(), Some("docker0"));
}

#[test]
fn truncated_inspect_is_json_error() {
    let err = parse_network_detail("[{\"Name\": \"app").unwrap_err();
    assert!(matches!(err, ParseError::Json { .. }));
}

#[test]
fn info_array_is_shape_error() {
    let err = parse_info("[]").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape { .. }));
}

fn listing_row() -> impl Strategy<Value = String> {
    (
        "[0-9a-f]{12}",
        "[a-z][a-z0-9_]{0,15}",
        prop_oneof!["bridge", "host", "null", "overlay"],
        prop_oneof!["local", "swarm"],
        " {1,8}",
    )
        .prop_map(|(id, name, driver, scope, gap)| format!("{id}{gap}{name}{gap}{driver}{gap}{scope}"))
}

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}

/// Objects mixing the engine's well-known keys with arbitrary ones.
fn info_object() -> impl Strategy<Value = serde_json::Map<String, Value>> {
    let key = prop_oneof![
        Just("ID".to_string()),
        Just("Name".to_string()),
        Just("Architecture".to_string()),
        Just("KernelVersion".to_string()),
        Just("ServerVersion".to_string()),
        Just("NCPU".to_string()),
        Just("MemTotal".to_string()),
        "[A-Za-z][A-Za-z0-9]{0,10}",
    ];
    let value = json_leaf().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    });
    prop::collection::btree_map(key, value, 0..10).prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn every_well_formed_row_is_listed(
        rows in prop::collection::vec(listing_row(), 0..12),
        with_header in any::<bool>(),
    ) {
        let mut text = String::new();
        if with_header {
            text.push_str("NETWORK ID          NAME                DRIVER              SCOPE\n");
        }
        for row in &rows {
            text.push_str(row);
            text.push('\n');
        }

        let parsed = parse_network_list(&text);
        prop_assert_eq!(parsed.len(), rows.len());
        for (summary, row) in parsed.iter().zip(&rows) {
            let name = row.split_whitespace().nth(1).unwrap();
            prop_assert_eq!(summary.name.as_str(), name);
        }
    }

    #[test]
    fn short_rows_never_listed(
        tokens in prop::collection::vec("[a-z0-9]{1,8}", 0..4),
    ) {
        let line = tokens.join(" ");
        prop_assert!(parse_network_list(&line).is_empty());
    }

    #[test]
    fn token_loses_trailing_whitespace(
        token in "SWMTKN-1-[a-z0-9]{20,50}-[a-z0-9]{25}",
        after in "[ \t\r\n]{0,3}",
    ) {
        let raw = format!("{token}{after}");
        prop_assert_eq!(parse_token(&raw), Some(token));
    }

    #[test]
    fn token_keeps_leading_characters(
        token in "[a-zA-Z0-9-]{1,40}",
        before in "[ \t]{1,3}",
    ) {
        let raw = format!("{before}{token}\n");
        prop_assert_eq!(parse_token(&raw), Some(format!("{before}{token}")));
    }

    #[test]
    fn info_object_round_trips(fields in info_object()) {
        let expected = Value::Object(fields.clone());
        let text = serde_json::to_string(&expected).unwrap();

        let info = parse_info(&text).unwrap();
        prop_assert_eq!(Value::Object(info.to_map()), expected);
    }

    #[test]
    fn whitespace_token_is_absent(blank in "[ \t\r\n]{0,6}") {
        prop_assert_eq!(parse_token(&blank), None);
    }
}
