// ABOUTME: Compile-fail test verifying ContainerId and NetworkId are not interchangeable.
// ABOUTME: This test should fail to compile, validating type safety.

use docker_facts::types::{ContainerId, NetworkId};

fn takes_container_id(_id: ContainerId) {}

fn main() {
    let network_id = NetworkId::new("19a6ebf6f5a5");
    takes_container_id(network_id); // ERROR: expected ContainerId, found NetworkId
}
