// ABOUTME: Compile-fail test verifying compose() requires the join-token stage.
// ABOUTME: This test should fail to compile, validating type-state transitions.

use docker_facts::host::SystemHost;
use docker_facts::resolve::{InfoFetched, Resolution};

fn skip_ahead(resolution: Resolution<SystemHost, InfoFetched>) {
    let _ = resolution.compose(); // ERROR: no method named `compose` found
}

fn main() {}
