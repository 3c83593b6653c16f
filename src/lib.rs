//! Core data structures and search algorithms for a multi-modal,
//! provider-driven shortest-path planning engine.
//!
//! The graph here is never materialized: an [`engine::Engine`] holds a
//! registry of [`model::provider::EdgeProvider`] implementations that, given
//! a [`model::vertex::Vertex`], emit its outgoing edges on demand. Dijkstra's
//! algorithm in [`algorithm::search`] drives expansion through the engine
//! (optionally backed by an [`algorithm::cache::EdgeCache`]), tracking the
//! open frontier in an [`algorithm::queue::PriorityQueue`] and visited state
//! in an [`algorithm::closed_set::ClosedSet`], with per-search scratch
//! memory drawn from an [`algorithm::arena::Arena`].

pub mod algorithm;
pub mod engine;
pub mod model;
pub mod testing;
pub mod util;
