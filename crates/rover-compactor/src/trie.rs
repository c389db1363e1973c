//! Arena-backed pattern trie: the adaptive dictionary behind command compression.

use serde::{Deserialize, Serialize};

/// Numeric codeword assigned to a stored pattern.
pub type Code = u32;

/// One token node in the dictionary arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PatternNode {
    token: String,
    code: Option<Code>,
    children: Vec<usize>,
}

impl PatternNode {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            code: None,
            children: Vec::new(),
        }
    }
}

/// Prefix dictionary mapping command-token sequences to numeric codes.
///
/// Nodes live in one arena and reference their children by index; node 0 is
/// a synthetic root whose children are the single-token entries. A token
/// appears at most once among one node's children, every child lookup scans
/// the full child list, and nodes are never removed. Re-inserting an
/// existing sequence overwrites its code without adding nodes.
///
/// The trie also tracks the next unassigned code: inserting a sequence at
/// code `c` raises the counter past `c`, so codes minted afterwards never
/// collide with earlier assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternTrie {
    nodes: Vec<PatternNode>,
    next_code: Code,
}

impl PatternTrie {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            nodes: vec![PatternNode::new("")],
            next_code: 0,
        }
    }

    /// Create a dictionary primed with single-token entries at codes
    /// `0..tokens.len()`, in slice order.
    pub fn with_primitives(tokens: &[&str]) -> Self {
        let mut trie = Self::new();
        for (i, token) in tokens.iter().enumerate() {
            trie.insert(&[*token], i as Code);
        }
        trie
    }

    /// Insert a token sequence, overwriting the terminal node's code.
    ///
    /// Nodes missing along the path are created; an empty sequence is a
    /// no-op. Interior nodes created on the way carry no code until some
    /// insertion terminates on them. Returns whether the terminal was
    /// previously uncoded, distinguishing a new pattern from a relabel.
    pub fn insert(&mut self, tokens: &[impl AsRef<str>], code: Code) -> bool {
        if tokens.is_empty() {
            return false;
        }
        let mut node = 0;
        for token in tokens {
            let token = token.as_ref();
            node = match self.child(node, token) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(PatternNode::new(token));
                    self.nodes[node].children.push(child);
                    child
                }
            };
        }
        let fresh = self.nodes[node].code.is_none();
        self.nodes[node].code = Some(code);
        self.next_code = self.next_code.max(code.saturating_add(1));
        fresh
    }

    /// Code stored at the terminal of `tokens`, if the full path exists
    /// and has one. Interior-only nodes and the empty sequence yield `None`.
    pub fn code_of(&self, tokens: &[impl AsRef<str>]) -> Option<Code> {
        let node = self.walk(tokens)?;
        if node == 0 {
            return None;
        }
        self.nodes[node].code
    }

    /// Whether the full token path exists, coded or not.
    pub fn contains(&self, tokens: &[impl AsRef<str>]) -> bool {
        match self.walk(tokens) {
            Some(node) => node != 0,
            None => false,
        }
    }

    /// Next code `mint_code` would hand out.
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// Claim the next unassigned code, advancing the counter.
    pub fn mint_code(&mut self) -> Code {
        let code = self.next_code;
        self.next_code += 1;
        code
    }

    /// Number of token nodes (the synthetic root does not count).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of coded patterns.
    pub fn pattern_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.code.is_some()).count()
    }

    /// All coded patterns with their codes, in depth-first insertion order.
    pub fn coded_patterns(&self) -> Vec<(Vec<String>, Code)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect(0, &mut prefix, &mut out);
        out
    }

    fn collect(&self, node: usize, prefix: &mut Vec<String>, out: &mut Vec<(Vec<String>, Code)>) {
        if let Some(code) = self.nodes[node].code {
            out.push((prefix.clone(), code));
        }
        for &child in &self.nodes[node].children {
            prefix.push(self.nodes[child].token.clone());
            self.collect(child, prefix, out);
            prefix.pop();
        }
    }

    fn walk(&self, tokens: &[impl AsRef<str>]) -> Option<usize> {
        let mut node = 0;
        for token in tokens {
            node = self.child(node, token.as_ref())?;
        }
        Some(node)
    }

    fn child(&self, node: usize, token: &str) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].token == token)
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}
