// ABOUTME: Seam to the surrounding fact-collection framework.
// ABOUTME: Executable lookup, bounded command execution, fact lookup and publishing.

mod system;
mod traits;

pub use system::SystemHost;
pub use traits::{ExecError, FactSink, Host};
