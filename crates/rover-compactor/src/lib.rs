//! Rover Compactor — adaptive dictionary compression for command streams.
//!
//! A [`PatternTrie`] holds the evolving token-pattern dictionary. [`compress`]
//! runs an LZW-style growth rule over a batch of command sequences: emitting
//! codes for patterns the dictionary already knows while registering the
//! patterns it sees for the first time, so repetitive command traffic
//! compresses better the longer the dictionary lives.

pub mod encoder;
pub mod trie;
pub mod vocab;

pub use encoder::{compress, compress_stats, CompressionStats};
pub use trie::{Code, PatternTrie};
pub use vocab::{standard_trie, STANDARD_VOCABULARY};
