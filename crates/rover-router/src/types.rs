use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Nearest reachable exit for one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestExit {
    /// Label of the closest exit room.
    pub exit: String,
    /// Shortest weighted distance to it.
    pub distance: u64,
}

impl NearestExit {
    pub fn new(exit: impl Into<String>, distance: u64) -> Self {
        Self {
            exit: exit.into(),
            distance,
        }
    }
}

/// Routing result for a whole map: one entry per room, `None` where no
/// exit is reachable.
pub type ExitMap = HashMap<String, Option<NearestExit>>;
