//! Built-in command vocabulary for priming dictionaries.

use crate::trie::PatternTrie;

/// Primitive command tokens a rover's firmware emits, in code order.
pub const STANDARD_VOCABULARY: [&str; 12] = [
    "MOVE", "FORWARD", "BACKWARD", "TURN", "LEFT", "RIGHT", "STOP", "SCAN", "GRAB", "DROP",
    "WAIT", "BEEP",
];

/// A dictionary primed with the standard vocabulary at codes `0..12`.
pub fn standard_trie() -> PatternTrie {
    PatternTrie::with_primitives(&STANDARD_VOCABULARY)
}
