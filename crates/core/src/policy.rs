//! Persistence policy metadata
//!
//! Classifies how a group's snapshot is expected to be flushed. The policy
//! is carried as plain metadata; the scheduler that acts on it (periodic
//! flush, flush-on-write) lives in the host application.

use serde::{Deserialize, Serialize};

/// How a group's snapshot should be flushed by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persistence {
    /// Never flushed automatically
    #[default]
    None,
    /// Flushed on a periodic schedule
    Cyclic,
    /// Flushed after each committed write
    OnWrite,
}

impl std::fmt::Display for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Persistence::None => write!(f, "none"),
            Persistence::Cyclic => write!(f, "cyclic"),
            Persistence::OnWrite => write!(f, "on-write"),
        }
    }
}
