// ABOUTME: Compile-fail test verifying facts are only readable once composed.
// ABOUTME: This test should fail to compile, validating type-state transitions.

use docker_facts::host::SystemHost;
use docker_facts::resolve::{Resolution, TokensFetched};

fn peek(resolution: &Resolution<SystemHost, TokensFetched>) {
    let _ = resolution.facts(); // ERROR: no method named `facts` found
}

fn main() {}
