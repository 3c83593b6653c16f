mod provider_error;

pub use provider_error::ProviderError;

use crate::model::edge::EdgeList;
use crate::model::vertex::Vertex;

/// the boundary contract between the engine and a user-supplied edge
/// generator. a provider, given a vertex, appends its outgoing edges to
/// `out_edges` and returns `Ok(())`, or returns `Err` if it cannot
/// produce edges for this vertex -- a recoverable, per-provider failure
/// that never aborts the overall expansion (see [`Engine::expand`]).
///
/// implementations must not mutate `vertex`, must append to `out_edges`
/// only (never clear or reorder what is already there), and must be
/// idempotent: calling `generate_edges` repeatedly with an
/// equals-identical vertex must produce logically equivalent output,
/// since the engine may call a provider many times across a search and
/// across searches.
///
/// [`Engine::expand`]: crate::engine::Engine::expand
pub trait EdgeProvider: Send + Sync {
    fn generate_edges(
        &self,
        vertex: &Vertex,
        out_edges: &mut EdgeList,
    ) -> Result<(), ProviderError>;
}

impl<F> EdgeProvider for F
where
    F: Fn(&Vertex, &mut EdgeList) -> Result<(), ProviderError> + Send + Sync,
{
    fn generate_edges(
        &self,
        vertex: &Vertex,
        out_edges: &mut EdgeList,
    ) -> Result<(), ProviderError> {
        self(vertex, out_edges)
    }
}
