mod edge_error;
mod edge_list;

pub use edge_error::EdgeError;
pub use edge_list::EdgeList;

use crate::model::value::Value;
use crate::model::vertex::Vertex;

/// whether an edge's target vertex is its own independent copy or one
/// still borrowed from whatever provider produced it.
///
/// Rust's ownership model already frees a vertex exactly once, when its
/// last owner is dropped, so this flag carries no manual-memory-
/// management weight; it survives purely as
/// a *semantic* record of provenance (provider-owned vs. engine/path
/// owned) that the engine and planner consult when deciding whether to
/// forward an edge by value or deep-clone it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOwnership {
    /// the edge's target vertex is this edge's own, independent copy
    /// (cache entries and path edges are always `Owned`).
    Owned,
    /// the edge's target vertex was produced by a provider and has not
    /// yet been deep-copied into owned storage.
    ProviderOwned,
}

/// a transition from an implicit source vertex (the one being expanded)
/// to a target vertex, carrying a fixed-length cost vector (element 0 is
/// the scalar cost the planner relaxes on) and optional sorted metadata.
#[derive(Debug, Clone)]
pub struct Edge {
    target: Vertex,
    cost: Vec<f64>,
    metadata: Vec<(String, Value)>,
    ownership: TargetOwnership,
}

impl Edge {
    /// builds an edge to `target` with the given cost vector. `cost` must
    /// have at least one element (the scalar cost the planner consumes).
    pub fn new(target: Vertex, cost: Vec<f64>) -> Result<Edge, EdgeError> {
        if cost.is_empty() {
            return Err(EdgeError::InvalidArgument(
                "edge cost vector must have at least one element".to_string(),
            ));
        }
        Ok(Edge {
            target,
            cost,
            metadata: Vec::new(),
            ownership: TargetOwnership::ProviderOwned,
        })
    }

    pub fn target(&self) -> &Vertex {
        &self.target
    }

    pub fn into_target(self) -> Vertex {
        self.target
    }

    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// the scalar cost consumed by the planner: `cost()[0]`.
    pub fn scalar_cost(&self) -> f64 {
        self.cost[0]
    }

    pub fn ownership(&self) -> TargetOwnership {
        self.ownership
    }

    pub fn set_ownership(&mut self, ownership: TargetOwnership) {
        self.ownership = ownership;
    }

    pub fn metadata_get(&self, key: &str) -> Result<Value, EdgeError> {
        self.metadata
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .map(|idx| self.metadata[idx].1.clone())
            .map_err(|_| EdgeError::KeyNotFound(key.to_string()))
    }

    pub fn metadata_set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.metadata.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(idx) => self.metadata[idx].1 = value,
            Err(idx) => self.metadata.insert(idx, (key, value)),
        }
    }

    pub fn metadata_remove(&mut self, key: &str) -> Option<Value> {
        self.metadata
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|idx| self.metadata.remove(idx).1)
    }

    /// an edge that owns an independent, deep copy of its target vertex
    /// and metadata -- what every path edge and cache entry is built from.
    pub fn clone_owned(&self) -> Edge {
        Edge {
            target: self.target.clone(),
            cost: self.cost.clone(),
            metadata: self.metadata.clone(),
            ownership: TargetOwnership::Owned,
        }
    }
}

impl PartialEq for Edge {
    /// structural equality over target, cost, and metadata. ownership
    /// provenance is bookkeeping, not edge identity, so it is excluded.
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && self.cost == other.cost && self.metadata == other.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(id: i64) -> Vertex {
        Vertex::new(vec![("id".to_string(), Value::Int(id))])
    }

    #[test]
    fn rejects_empty_cost_vector() {
        assert!(Edge::new(vertex(1), vec![]).is_err());
    }

    #[test]
    fn clone_owned_deep_copies_target_and_metadata() {
        let mut e = Edge::new(vertex(1), vec![1.0]).unwrap();
        e.metadata_set("road_class", Value::String("primary".to_string()));
        let cloned = e.clone_owned();
        assert_eq!(cloned.target(), e.target());
        assert_eq!(cloned.metadata_get("road_class").unwrap(), Value::String("primary".to_string()));
        assert_eq!(cloned.ownership(), TargetOwnership::Owned);
    }

    #[test]
    fn metadata_get_missing_key_is_key_not_found() {
        let e = Edge::new(vertex(1), vec![1.0]).unwrap();
        assert!(matches!(e.metadata_get("missing"), Err(EdgeError::KeyNotFound(_))));
    }

    #[test]
    fn equality_ignores_ownership_flag() {
        let mut a = Edge::new(vertex(1), vec![1.0]).unwrap();
        let mut b = a.clone();
        a.set_ownership(TargetOwnership::Owned);
        b.set_ownership(TargetOwnership::ProviderOwned);
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_equality_is_structural() {
        let mut a = Edge::new(vertex(1), vec![1.0]).unwrap();
        let mut b = Edge::new(vertex(1), vec![1.0]).unwrap();
        a.metadata_set("k", Value::Int(1));
        assert_ne!(a, b);
        b.metadata_set("k", Value::Int(1));
        assert_eq!(a, b);
    }
}
