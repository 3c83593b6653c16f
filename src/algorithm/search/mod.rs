mod search_error;

pub use search_error::SearchError;

use crate::algorithm::arena::{Arena, ArenaError};
use crate::algorithm::closed_set::ClosedSet;
use crate::algorithm::queue::PriorityQueue;
use crate::engine::Engine;
use crate::model::edge::{Edge, EdgeList};
use crate::model::path::Path;
use crate::model::vertex::Vertex;

use std::collections::HashMap;
use std::time::Instant;

/// a rough per-node accounting unit charged to the search arena. the arena
/// does not actually back node storage (the node table is a plain
/// `HashMap`, the idiomatic stand-in for pointer-chased, hash-indexed
/// probing), but every first-visit to a vertex still charges the arena so
/// `peak_usage` reflects a real, search-proportional quantity rather than
/// staying at zero.
const NODE_SIZE_ESTIMATE: usize = 64;

/// charges one node's worth of accounting space to `arena`, failing if
/// doing so would push `arena`'s usage past `max_memory_limit` (`0` means
/// unlimited, matching [`EngineConfig::max_memory_limit`](crate::engine::EngineConfig::max_memory_limit)).
fn charge_node(arena: &mut Arena, max_memory_limit: usize) -> Result<(), ArenaError> {
    arena.alloc(NODE_SIZE_ESTIMATE);
    let used = arena.current_usage();
    if max_memory_limit > 0 && used > max_memory_limit as u64 {
        return Err(ArenaError::MemoryLimitExceeded {
            limit: max_memory_limit as u64,
            used,
        });
    }
    Ok(())
}

struct DijkstraNode {
    best_cost: f64,
    /// the predecessor vertex and the edge used to reach this node from it.
    /// `None` only for the start vertex.
    parent: Option<(Vertex, Edge)>,
}

/// runs Dijkstra's algorithm from `start` against `engine`, stopping at the
/// first popped vertex satisfying `goal`.
///
/// `timeout_seconds` overrides the engine's configured default when
/// present; `0` (from either source) disables the timeout check entirely.
/// creates one [`Arena`] for the duration of this search and lets it drop
/// on return, matching the "one arena per search, torn down on
/// completion" lifecycle.
pub fn plan(
    engine: &mut Engine,
    start: Vertex,
    goal: impl Fn(&Vertex) -> bool,
    timeout_seconds: Option<u64>,
) -> Result<Path, SearchError> {
    let start_time = Instant::now();
    let timeout = timeout_seconds.unwrap_or(engine.config().default_timeout_seconds);

    if goal(&start) {
        log::debug!("start vertex already satisfies the goal predicate");
        engine.record_search_stats(1, 0, start_time.elapsed().as_secs_f64(), 0);
        return Ok(Path::empty());
    }

    let mut arena = Arena::new(engine.config().default_arena_size);
    let mut nodes: HashMap<Vertex, DijkstraNode> = HashMap::new();
    let mut queue = PriorityQueue::new();
    let mut closed = ClosedSet::new();

    nodes.insert(
        start.clone(),
        DijkstraNode {
            best_cost: 0.0,
            parent: None,
        },
    );
    charge_node(&mut arena, engine.config().max_memory_limit)?;
    queue.insert(start, 0.0);

    let mut vertices_expanded: u64 = 0;

    while let Some((current, current_cost)) = queue.extract_min() {
        if timeout > 0 && start_time.elapsed().as_secs_f64() > timeout as f64 {
            log::warn!("search exceeded its {timeout}s timeout after {vertices_expanded} expansions");
            engine.record_search_stats(
                vertices_expanded,
                0,
                start_time.elapsed().as_secs_f64(),
                arena.stats().peak_usage,
            );
            return Err(SearchError::Timeout);
        }

        if closed.contains(&current) {
            continue;
        }
        closed.add(&current);
        vertices_expanded += 1;

        if goal(&current) {
            let path = reconstruct_path(&nodes, &current);
            log::debug!(
                "search completed: {} vertices expanded, path of {} edges, cost {}",
                vertices_expanded,
                path.num_edges(),
                path.total_cost()
            );
            engine.record_search_stats(
                vertices_expanded,
                path.num_edges() as u64,
                start_time.elapsed().as_secs_f64(),
                arena.stats().peak_usage,
            );
            return Ok(path);
        }

        let mut edges = EdgeList::new();
        engine.expand(&current, &mut edges)?;

        for edge in edges.iter() {
            let target = edge.target();
            if closed.contains(target) {
                continue;
            }
            let tentative_cost = current_cost + edge.scalar_cost();
            let existing_cost = nodes.get(target).map(|n| n.best_cost);
            let is_new = existing_cost.is_none();
            let improves = match existing_cost {
                Some(best) => tentative_cost < best,
                None => true,
            };
            if !improves {
                continue;
            }

            nodes.insert(
                target.clone(),
                DijkstraNode {
                    best_cost: tentative_cost,
                    parent: Some((current.clone(), edge.clone_owned())),
                },
            );

            if is_new {
                charge_node(&mut arena, engine.config().max_memory_limit)?;
                queue.insert(target.clone(), tentative_cost);
            } else if !queue.decrease_key(target, tentative_cost) {
                // already extracted from the queue under a worse cost;
                // reinsert since it is not yet closed.
                queue.insert(target.clone(), tentative_cost);
            }
        }
    }

    log::debug!("search exhausted the open set without reaching the goal");
    engine.record_search_stats(
        vertices_expanded,
        0,
        start_time.elapsed().as_secs_f64(),
        arena.stats().peak_usage,
    );
    Err(SearchError::NoPathFound)
}

/// walks parent pointers from `goal` back to the start vertex, collecting
/// owned edges along the way, then reverses them into start-to-goal order.
fn reconstruct_path(nodes: &HashMap<Vertex, DijkstraNode>, goal: &Vertex) -> Path {
    let mut edges = Vec::new();
    let mut current = goal.clone();
    while let Some(DijkstraNode {
        parent: Some((parent_vertex, edge)),
        ..
    }) = nodes.get(&current)
    {
        edges.push(edge.clone_owned());
        current = parent_vertex.clone();
    }
    edges.reverse();
    let total_cost: f64 = edges.iter().map(|e| e.scalar_cost()).sum();
    Path::new(edges, total_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use crate::model::provider::ProviderError;
    use crate::model::value::Value;

    fn init_test_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    fn grid_vertex(x: i64, y: i64) -> Vertex {
        Vertex::new(vec![("x".to_string(), Value::Int(x)), ("y".to_string(), Value::Int(y))])
    }

    fn grid_4_neighbor_provider(v: &Vertex, out: &mut EdgeList) -> Result<(), ProviderError> {
        let x = v.get("x")?.as_int()?;
        let y = v.get("y")?.as_int()?;
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (x + dx, y + dy);
            if (0..10).contains(&nx) && (0..10).contains(&ny) {
                out.push(Edge::new(grid_vertex(nx, ny), vec![1.0])?);
            }
        }
        Ok(())
    }

    fn chain_vertex(id: i64) -> Vertex {
        Vertex::new(vec![("id".to_string(), Value::Int(id))])
    }

    fn linear_chain_provider(v: &Vertex, out: &mut EdgeList) -> Result<(), ProviderError> {
        let id = v.get("id")?.as_int()?;
        if id < 10 {
            out.push(Edge::new(chain_vertex(id + 1), vec![1.0])?);
        }
        Ok(())
    }

    #[test]
    fn start_equal_to_goal_returns_empty_path() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("grid", grid_4_neighbor_provider).unwrap();
        let path = plan(&mut engine, grid_vertex(0, 0), |v| v == &grid_vertex(0, 0), None).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.total_cost(), 0.0);
    }

    #[test]
    fn grid_4_shortest_path_scenario() {
        init_test_logger();
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("grid", grid_4_neighbor_provider).unwrap();
        let path = plan(&mut engine, grid_vertex(0, 0), |v| v == &grid_vertex(3, 0), None).unwrap();
        assert_eq!(path.num_edges(), 3);
        approx::assert_relative_eq!(path.total_cost(), 3.0);
    }

    #[test]
    fn l_shape_scenario() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("grid", grid_4_neighbor_provider).unwrap();
        let path = plan(&mut engine, grid_vertex(0, 0), |v| v == &grid_vertex(2, 2), None).unwrap();
        assert_eq!(path.num_edges(), 4);
        approx::assert_relative_eq!(path.total_cost(), 4.0);
    }

    #[test]
    fn unreachable_goal_returns_no_path_found() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("grid", grid_4_neighbor_provider).unwrap();
        let result = plan(&mut engine, grid_vertex(0, 0), |v| v == &grid_vertex(-5, -5), None);
        assert!(matches!(result, Err(SearchError::NoPathFound)));
    }

    #[test]
    fn linear_chain_scenario() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("chain", linear_chain_provider).unwrap();
        let path = plan(&mut engine, chain_vertex(0), |v| v == &chain_vertex(8), None).unwrap();
        assert_eq!(path.num_edges(), 8);
        approx::assert_relative_eq!(path.total_cost(), 8.0);
        assert_eq!(engine.stats().vertices_expanded, 9);
    }

    #[test]
    fn exceeding_max_memory_limit_aborts_the_search() {
        let mut cfg = EngineConfig::default();
        cfg.max_memory_limit = NODE_SIZE_ESTIMATE;
        let mut engine = Engine::new(cfg);
        engine.register("chain", linear_chain_provider).unwrap();
        let result = plan(&mut engine, chain_vertex(0), |v| v == &chain_vertex(8), None);
        assert!(matches!(result, Err(SearchError::Arena(ArenaError::MemoryLimitExceeded { .. }))));
    }

    #[test]
    fn path_edges_reconstruct_in_start_to_goal_order() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("chain", linear_chain_provider).unwrap();
        let path = plan(&mut engine, chain_vertex(0), |v| v == &chain_vertex(3), None).unwrap();
        let ids: Vec<i64> = path
            .edges()
            .iter()
            .map(|e| e.target().get("id").unwrap().as_int().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
