mod reverse_cost;

pub use reverse_cost::ReverseCost;

use crate::model::vertex::Vertex;
use priority_queue::PriorityQueue as ExternalPriorityQueue;

/// a binary min-heap over `(vertex, cost)` pairs with decrease-key, as a
/// thin wrapper around the external `priority_queue` crate's heap rather
/// than a hand-rolled one, with [`ReverseCost`] inverting its native
/// max-heap ordering.
pub struct PriorityQueue {
    inner: ExternalPriorityQueue<Vertex, ReverseCost>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            inner: ExternalPriorityQueue::new(),
        }
    }

    /// inserts `vertex` with `cost`, or overwrites its existing priority if
    /// already present.
    pub fn insert(&mut self, vertex: Vertex, cost: f64) {
        self.inner.push(vertex, ReverseCost::from(cost));
    }

    pub fn extract_min(&mut self) -> Option<(Vertex, f64)> {
        self.inner.pop().map(|(v, c)| (v, c.into_f64()))
    }

    /// lowers `vertex`'s priority to `new_cost`, returning `true` on
    /// success. returns `false` if `vertex` is absent or `new_cost` is not
    /// strictly less than the current priority.
    pub fn decrease_key(&mut self, vertex: &Vertex, new_cost: f64) -> bool {
        match self.inner.get_priority(vertex) {
            Some(&current) if ReverseCost::from(new_cost) > current => {
                self.inner.change_priority(vertex, ReverseCost::from(new_cost));
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.inner.get(vertex).is_some()
    }

    pub fn peek_min(&self) -> Option<(&Vertex, f64)> {
        self.inner.peek().map(|(v, c)| (v, c.into_f64()))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn size(&self) -> usize {
        self.inner.len()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        PriorityQueue::new()
    }
}
