use serde::{Deserialize, Serialize};

/// aggregate counters spanning both expansion bookkeeping (edges
/// generated, provider invocations, cache traffic) and the last completed
/// search (vertices expanded, path length, wall-clock planning time).
///
/// `cache_hits`/`cache_misses`/`cache_puts` are reset to zero by any
/// provider-registry mutation, matching the cache invalidation it forces;
/// the remaining counters are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    pub vertices_expanded: u64,
    pub edges_generated: u64,
    pub providers_called: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_puts: u64,
    pub peak_memory_bytes: u64,
    pub path_length: u64,
    pub planning_time_seconds: f64,
}
