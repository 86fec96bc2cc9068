// ABOUTME: Swarm join secrets scoped by node role.
// ABOUTME: Either token may be absent on its own.

use serde::Serialize;
use std::fmt;

/// Role a joining node is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwarmRole {
    Worker,
    Manager,
}

impl SwarmRole {
    pub const ALL: [SwarmRole; 2] = [SwarmRole::Worker, SwarmRole::Manager];
}

impl fmt::Display for SwarmRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmRole::Worker => write!(f, "worker"),
            SwarmRole::Manager => write!(f, "manager"),
        }
    }
}

/// Join tokens; `None` when the node is not a manager or the command failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwarmTokens {
    pub worker: Option<String>,
    pub manager: Option<String>,
}

impl SwarmTokens {
    pub fn get(&self, role: SwarmRole) -> Option<&str> {
        match role {
            SwarmRole::Worker => self.worker.as_deref(),
            SwarmRole::Manager => self.manager.as_deref(),
        }
    }

    pub fn set(&mut self, role: SwarmRole, token: Option<String>) {
        match role {
            SwarmRole::Worker => self.worker = token,
            SwarmRole::Manager => self.manager = token,
        }
    }
}
