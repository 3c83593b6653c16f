mod vertex_error;

pub use vertex_error::VertexError;

use crate::model::value::Value;
use crate::util::hash::compute_vertex_hash;
use itertools::Itertools;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// an immutable, sorted-key record identifying a single search state.
///
/// keys are de-duplicated and sorted lexicographically at construction
/// time, so every later lookup is a binary search and every equality check
/// walks both key lists in lockstep. a vertex either computes its own
/// structural hash from its sorted pairs, or carries a caller-supplied
/// "identity hash" that overrides structural equality entirely -- this is
/// how a provider collapses logically-equivalent states (e.g. geographic
/// coordinates snapped to a grid cell) onto one search node.
#[derive(Debug, Clone)]
pub struct Vertex {
    pairs: Vec<(String, Value)>,
    hash: u64,
    identity_hash: bool,
}

impl Vertex {
    /// builds a vertex from unordered pairs, computing its structural hash.
    ///
    /// duplicate keys are resolved by keeping the first occurrence in
    /// input order and discarding the rest; this is a deliberate,
    /// documented choice and is never last-wins.
    pub fn new(pairs: Vec<(String, Value)>) -> Self {
        let sorted = Self::sort_and_dedup(pairs);
        let hash = compute_vertex_hash(&sorted);
        Vertex {
            pairs: sorted,
            hash,
            identity_hash: false,
        }
    }

    /// builds a vertex whose equality and hashing are entirely determined
    /// by `hash`, ignoring its field contents for comparison purposes.
    pub fn with_identity_hash(pairs: Vec<(String, Value)>, hash: u64) -> Self {
        let sorted = Self::sort_and_dedup(pairs);
        Vertex {
            pairs: sorted,
            hash,
            identity_hash: true,
        }
    }

    fn sort_and_dedup(mut pairs: Vec<(String, Value)>) -> Vec<(String, Value)> {
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs.dedup_by(|a, b| a.0 == b.0);
        pairs
    }

    pub fn key_count(&self) -> usize {
        self.pairs.len()
    }

    /// returns the key at `index` in sorted order, or `None` if out of range.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.pairs.get(index).map(|(k, _)| k.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.binary_search_by(|(k, _)| k.as_str().cmp(key)).is_ok()
    }

    /// looks up a value by key via binary search, returning an owned copy.
    pub fn get(&self, key: &str) -> Result<Value, VertexError> {
        self.pairs
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .map(|idx| self.pairs[idx].1.clone())
            .map_err(|_| VertexError::KeyNotFound(key.to_string()))
    }

    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    pub fn has_identity_hash(&self) -> bool {
        self.identity_hash
    }

    pub fn pairs(&self) -> &[(String, Value)] {
        &self.pairs
    }
}

impl PartialEq for Vertex {
    /// compares hashes first (a mismatch is a guaranteed inequality, and
    /// covers the identity-hash-override case), then pair count, then
    /// walks the sorted key/value lists in lockstep.
    fn eq(&self, other: &Self) -> bool {
        if self.hash != other.hash {
            return false;
        }
        if self.pairs.len() != other.pairs.len() {
            return false;
        }
        self.pairs
            .iter()
            .zip(other.pairs.iter())
            .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    /// delegates to the stored structural/identity hash so that
    /// `HashMap`/`HashSet` bucket placement agrees with [`PartialEq`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.pairs.iter().map(|(k, v)| format!("{k}: {v}")).join(", ");
        write!(f, "Vertex#{:016x}{{{fields}}}", self.hash)
    }
}
