mod engine_config;
mod engine_error;
mod engine_stats;

pub use engine_config::{EngineConfig, EngineConfigError};
pub use engine_error::EngineError;
pub use engine_stats::EngineStats;

use crate::algorithm::cache::EdgeCache;
use crate::model::edge::EdgeList;
use crate::model::provider::EdgeProvider;
use crate::model::vertex::Vertex;

struct ProviderEntry {
    name: String,
    provider: Box<dyn EdgeProvider>,
    enabled: bool,
}

/// the provider registry, edge cache, and statistics shared across
/// consecutive searches run against the same graph.
///
/// an `Engine` is not safe to share across concurrently running searches;
/// callers needing parallelism use one engine per thread (see the
/// concurrency model).
pub struct Engine {
    providers: Vec<ProviderEntry>,
    cache: Option<EdgeCache>,
    config: EngineConfig,
    stats: EngineStats,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let cache = if config.enable_edge_caching {
            Some(EdgeCache::new())
        } else {
            None
        };
        Engine {
            providers: Vec::new(),
            cache,
            config,
            stats: EngineStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// directly updates the search-level counters (`vertices_expanded`,
    /// `path_length`, `planning_time_seconds`, `peak_memory_bytes`) that
    /// only the planner, not expansion itself, can observe.
    pub(crate) fn record_search_stats(
        &mut self,
        vertices_expanded: u64,
        path_length: u64,
        planning_time_seconds: f64,
        peak_memory_bytes: u64,
    ) {
        self.stats.vertices_expanded = vertices_expanded;
        self.stats.path_length = path_length;
        self.stats.planning_time_seconds = planning_time_seconds;
        self.stats.peak_memory_bytes = peak_memory_bytes;
    }

    /// registers a named provider, rejecting duplicate names. any mutation
    /// to the provider registry invalidates the cache.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: impl EdgeProvider + 'static,
    ) -> Result<(), EngineError> {
        let name = name.into();
        if self.providers.iter().any(|p| p.name == name) {
            return Err(EngineError::InvalidArgument(format!(
                "provider '{name}' is already registered"
            )));
        }
        self.providers.push(ProviderEntry {
            name,
            provider: Box::new(provider),
            enabled: true,
        });
        self.invalidate_cache();
        Ok(())
    }

    pub fn unregister(&mut self, name: &str) -> Result<(), EngineError> {
        let before = self.providers.len();
        self.providers.retain(|p| p.name != name);
        if self.providers.len() == before {
            return Err(EngineError::InvalidArgument(format!(
                "provider '{name}' is not registered"
            )));
        }
        self.invalidate_cache();
        Ok(())
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), EngineError> {
        let found = self
            .providers
            .iter_mut()
            .find(|p| p.name == name)
            .map(|entry| entry.enabled = enabled)
            .is_some();
        if !found {
            return Err(EngineError::InvalidArgument(format!(
                "provider '{name}' is not registered"
            )));
        }
        self.invalidate_cache();
        Ok(())
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        let was_enabled = self.config.enable_edge_caching;
        self.config = config;
        if self.config.enable_edge_caching && !was_enabled {
            self.cache = Some(EdgeCache::new());
        } else if !self.config.enable_edge_caching && was_enabled {
            self.cache = None;
        }
        self.invalidate_cache();
    }

    fn invalidate_cache(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
        self.stats.cache_hits = 0;
        self.stats.cache_misses = 0;
        self.stats.cache_puts = 0;
    }

    /// expands `vertex`: on a cache hit, appends a deep clone of the
    /// cached edges to `out`. on a miss, polls every enabled provider in
    /// registration order, forwarding each provider's edges into `out` and
    /// discarding (without aborting) any provider that fails, then caches
    /// the aggregate result if caching is enabled. `out` is cleared first.
    pub fn expand(&mut self, vertex: &Vertex, out: &mut EdgeList) -> Result<(), EngineError> {
        out.clear();

        if let Some(cache) = &self.cache {
            if let Some(mut cached) = cache.get(vertex) {
                out.append(&mut cached);
                self.stats.cache_hits += 1;
                self.stats.edges_generated += out.len() as u64;
                return Ok(());
            }
        }
        if self.cache.is_some() {
            self.stats.cache_misses += 1;
        }

        for entry in self.providers.iter().filter(|p| p.enabled) {
            let mut produced = EdgeList::new();
            if entry.provider.generate_edges(vertex, &mut produced).is_ok() {
                self.stats.providers_called += 1;
                out.append(&mut produced);
            }
        }

        if let Some(cache) = &mut self.cache {
            cache.put(vertex, out);
            self.stats.cache_puts += 1;
        }
        self.stats.edges_generated += out.len() as u64;

        Ok(())
    }

    /// breadth-first warm-up of the cache from `seeds`, expanding via
    /// `provider_name` only, for up to `max_depth` levels or until
    /// `max_vertices` distinct vertices have been visited, whichever comes
    /// first. requires caching to be enabled. returns the number of
    /// vertices visited.
    pub fn precache_subgraph(
        &mut self,
        provider_name: &str,
        seeds: &[Vertex],
        max_depth: usize,
        max_vertices: usize,
    ) -> Result<usize, EngineError> {
        if self.cache.is_none() {
            return Err(EngineError::InvalidArgument(
                "edge caching is not enabled".to_string(),
            ));
        }
        if seeds.is_empty() {
            return Err(EngineError::InvalidArgument(
                "seed list is empty".to_string(),
            ));
        }
        let provider_idx = self
            .providers
            .iter()
            .position(|p| p.name == provider_name)
            .ok_or_else(|| {
                EngineError::InvalidArgument(format!("provider '{provider_name}' is not registered"))
            })?;

        let mut visited: Vec<Vertex> = Vec::new();
        let mut frontier: Vec<Vertex> = seeds.to_vec();
        let mut depth = 0usize;

        while !frontier.is_empty() && depth < max_depth && visited.len() < max_vertices {
            let mut next_frontier = Vec::new();
            for vertex in frontier {
                if visited.len() >= max_vertices {
                    break;
                }
                if visited.contains(&vertex) {
                    continue;
                }
                visited.push(vertex.clone());

                let mut edges = EdgeList::new();
                let generated = self.providers[provider_idx].enabled
                    && self.providers[provider_idx]
                        .provider
                        .generate_edges(&vertex, &mut edges)
                        .is_ok();
                if generated {
                    if let Some(cache) = &mut self.cache {
                        cache.put(&vertex, &edges);
                    }
                    for edge in edges.iter() {
                        next_frontier.push(edge.target().clone());
                    }
                }
            }
            frontier = next_frontier;
            depth += 1;
        }

        Ok(visited.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::edge::Edge;
    use crate::model::provider::ProviderError;
    use crate::model::value::Value;

    fn vertex(id: i64) -> Vertex {
        Vertex::new(vec![("id".to_string(), Value::Int(id))])
    }

    fn successor_provider(v: &Vertex, out: &mut EdgeList) -> Result<(), ProviderError> {
        let id = v.get("id")?.as_int()?;
        out.push(Edge::new(vertex(id + 1), vec![1.0])?);
        Ok(())
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("chain", successor_provider).unwrap();
        let err = engine.register("chain", successor_provider).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn expand_without_caching_never_touches_cache_stats() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("chain", successor_provider).unwrap();

        let mut out = EdgeList::new();
        engine.expand(&vertex(0), &mut out).unwrap();
        assert_eq!(out.len(), 1);

        let stats = engine.stats();
        assert_eq!(stats.providers_called, 1);
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.cache_misses, 0);
        assert_eq!(stats.cache_puts, 0);
    }

    #[test]
    fn cache_hit_accounting_matches_scenario_five() {
        let mut cfg = EngineConfig::default();
        cfg.enable_edge_caching = true;
        let mut engine = Engine::new(cfg);
        engine.register("chain", successor_provider).unwrap();

        let mut out = EdgeList::new();
        engine.expand(&vertex(0), &mut out).unwrap();
        engine.expand(&vertex(0), &mut out).unwrap();

        let stats = engine.stats();
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.cache_puts, 1);
        assert_eq!(stats.providers_called, 1);
    }

    #[test]
    fn cache_invalidation_on_provider_change_matches_scenario_six() {
        let mut cfg = EngineConfig::default();
        cfg.enable_edge_caching = true;
        let mut engine = Engine::new(cfg);
        engine.register("chain", successor_provider).unwrap();

        let mut out = EdgeList::new();
        engine.expand(&vertex(0), &mut out).unwrap();
        engine.expand(&vertex(0), &mut out).unwrap();

        engine.register("chain2", successor_provider).unwrap();
        let stats = engine.stats();
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.cache_misses, 0);
        assert_eq!(stats.cache_puts, 0);

        engine.expand(&vertex(0), &mut out).unwrap();
        let stats = engine.stats();
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.cache_puts, 1);
    }

    #[test]
    fn expand_on_all_providers_failing_still_puts_an_empty_list() {
        let failing = |_: &Vertex, _: &mut EdgeList| -> Result<(), ProviderError> {
            Err(ProviderError::InvalidArgument("always fails".to_string()))
        };
        let mut cfg = EngineConfig::default();
        cfg.enable_edge_caching = true;
        let mut engine = Engine::new(cfg);
        engine.register("failing", failing).unwrap();

        let mut out = EdgeList::new();
        engine.expand(&vertex(0), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(engine.stats().cache_puts, 1);
    }

    #[test]
    fn precache_requires_caching_enabled() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.register("chain", successor_provider).unwrap();
        let err = engine
            .precache_subgraph("chain", &[vertex(0)], 2, 10)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn precache_visits_breadth_first_up_to_bounds() {
        let mut cfg = EngineConfig::default();
        cfg.enable_edge_caching = true;
        let mut engine = Engine::new(cfg);
        engine.register("chain", successor_provider).unwrap();

        let visited = engine
            .precache_subgraph("chain", &[vertex(0)], 3, 100)
            .unwrap();
        assert_eq!(visited, 3);

        let mut out = EdgeList::new();
        engine.expand(&vertex(0), &mut out).unwrap();
        assert_eq!(engine.stats().cache_hits, 1);
    }
}
