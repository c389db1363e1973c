//! LZW-style batch encoder for command streams.

use crate::trie::{Code, PatternTrie};
use rover_core::{Result, RoverError};
use tracing::debug;

/// Statistics for one compression run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Tokens consumed across the whole batch.
    pub tokens_in: usize,
    /// Codewords emitted.
    pub codes_out: usize,
    /// Patterns newly registered in the dictionary.
    pub patterns_added: usize,
}

impl CompressionStats {
    /// Emitted codes per input token. 1.0 means no pairing happened;
    /// an empty batch also reports 1.0.
    pub fn ratio(&self) -> f64 {
        if self.tokens_in == 0 {
            return 1.0;
        }
        self.codes_out as f64 / self.tokens_in as f64
    }
}

/// Compress a batch of command sequences against a shared dictionary.
///
/// Sequences are scanned left to right. When the current token and its
/// successor already form a coded pair, that pair's code is emitted, both
/// tokens are consumed, and the pair extended by the following token is
/// registered under a fresh code. Otherwise the token's single-token code
/// is emitted and the current pair is registered under a fresh code. The
/// dictionary carries over from sequence to sequence, so patterns learned
/// early in the batch compress later runs.
///
/// Every token must already have a coded single-token entry; otherwise
/// `RoverError::UnknownToken` is returned before the dictionary or the
/// output is touched.
pub fn compress(trie: &mut PatternTrie, sequences: &[Vec<String>]) -> Result<Vec<Code>> {
    compress_stats(trie, sequences).map(|(codes, _)| codes)
}

/// Like [`compress`], but also reports run statistics.
pub fn compress_stats(
    trie: &mut PatternTrie,
    sequences: &[Vec<String>],
) -> Result<(Vec<Code>, CompressionStats)> {
    // Validate the whole batch up front so a failed run leaves the
    // dictionary exactly as it was. Compression only ever registers
    // multi-token patterns, so single-token codes can't appear mid-run.
    for sequence in sequences {
        for token in sequence {
            if trie.code_of(&[token]).is_none() {
                return Err(RoverError::UnknownToken {
                    token: token.clone(),
                });
            }
        }
    }

    let mut codes = Vec::new();
    let mut patterns_added = 0usize;
    for sequence in sequences {
        let mut i = 0;
        while i < sequence.len() {
            let pair_code = sequence
                .get(i + 1)
                .and_then(|next| trie.code_of(&[&sequence[i], next]));
            match pair_code {
                Some(code) => {
                    codes.push(code);
                    if i + 2 < sequence.len() {
                        let fresh = trie.mint_code();
                        if trie.insert(&[&sequence[i], &sequence[i + 1], &sequence[i + 2]], fresh)
                        {
                            patterns_added += 1;
                        }
                    }
                    i += 2;
                }
                None => {
                    let code = trie.code_of(&[&sequence[i]]).ok_or_else(|| {
                        RoverError::UnknownToken {
                            token: sequence[i].clone(),
                        }
                    })?;
                    codes.push(code);
                    if i + 1 < sequence.len() {
                        let fresh = trie.mint_code();
                        if trie.insert(&[&sequence[i], &sequence[i + 1]], fresh) {
                            patterns_added += 1;
                        }
                    }
                    i += 1;
                }
            }
        }
    }

    let stats = CompressionStats {
        tokens_in: sequences.iter().map(Vec::len).sum(),
        codes_out: codes.len(),
        patterns_added,
    };
    debug!(
        "compressed {} tokens into {} codes, {} new patterns",
        stats.tokens_in, stats.codes_out, stats.patterns_added
    );
    Ok((codes, stats))
}
