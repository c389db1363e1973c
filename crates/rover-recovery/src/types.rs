use serde::{Deserialize, Serialize};

/// One repair move in an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Drop one observed token while staying put (spurious reading).
    Delete,
    /// Take a transition and consume one token; free when the token names
    /// the room entered, one edit when it was garbled.
    Match,
    /// Take a transition without consuming a token (missed reading).
    Insert,
}

/// A recovered walk and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Room labels along the walk, in travel order. The implicit origin
    /// room is omitted unless the walk re-enters it.
    pub path: Vec<String>,
    /// Total edits: deletions, insertions, and garbled matches.
    pub cost: u64,
    /// Repair moves in trace order; matches `path` but also records
    /// deletions, which emit no room.
    pub moves: Vec<MoveKind>,
}
