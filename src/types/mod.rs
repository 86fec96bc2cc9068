// ABOUTME: Type-safe identifiers and validated domain names.
// ABOUTME: Phantom-typed ids keep network and container ids apart at compile time.

mod fact_name;
mod id;

pub use fact_name::{FactName, UnknownFactName};
pub use id::{ContainerId, NetworkId};
