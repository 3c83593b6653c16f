//! synthetic edge providers shared by integration-style tests.

use crate::model::edge::{Edge, EdgeList};
use crate::model::provider::ProviderError;
use crate::model::value::Value;
use crate::model::vertex::Vertex;

/// a vertex identified by integer grid coordinates `(x, y)`.
pub fn grid_vertex(x: i64, y: i64) -> Vertex {
    Vertex::new(vec![("x".to_string(), Value::Int(x)), ("y".to_string(), Value::Int(y))])
}

/// emits unit-cost edges to the 4-connected neighbors of `v` that fall
/// within a `size`x`size` grid anchored at the origin.
pub fn grid_4_neighbor_provider(size: i64) -> impl Fn(&Vertex, &mut EdgeList) -> Result<(), ProviderError> {
    move |v: &Vertex, out: &mut EdgeList| -> Result<(), ProviderError> {
        let x = v.get("x")?.as_int()?;
        let y = v.get("y")?.as_int()?;
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if (0..size).contains(&nx) && (0..size).contains(&ny) {
                out.push(Edge::new(grid_vertex(nx, ny), vec![1.0])?);
            }
        }
        Ok(())
    }
}

/// a vertex identified by a single integer `id`.
pub fn chain_vertex(id: i64) -> Vertex {
    Vertex::new(vec![("id".to_string(), Value::Int(id))])
}

/// emits a single unit-cost edge from `{id: n}` to `{id: n + 1}` as long as
/// `n < max_id`.
pub fn linear_chain_provider(max_id: i64) -> impl Fn(&Vertex, &mut EdgeList) -> Result<(), ProviderError> {
    move |v: &Vertex, out: &mut EdgeList| -> Result<(), ProviderError> {
        let id = v.get("id")?.as_int()?;
        if id < max_id {
            out.push(Edge::new(chain_vertex(id + 1), vec![1.0])?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_provider_respects_bounds() {
        let provider = grid_4_neighbor_provider(10);
        let mut out = EdgeList::new();
        provider(&grid_vertex(0, 0), &mut out).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn chain_provider_stops_at_max_id() {
        let provider = linear_chain_provider(10);
        let mut out = EdgeList::new();
        provider(&chain_vertex(10), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
