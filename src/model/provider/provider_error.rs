use crate::model::edge::EdgeError;
use crate::model::value::ValueError;
use crate::model::vertex::VertexError;

/// an error raised by an [`EdgeProvider`] while generating edges for a
/// vertex. a provider failure is recoverable at the engine: the failing
/// provider's partial output is discarded, but other providers still run
/// and the search continues.
///
/// [`EdgeProvider`]: super::EdgeProvider
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    VertexFailure(#[from] VertexError),
    #[error(transparent)]
    EdgeFailure(#[from] EdgeError),
    #[error(transparent)]
    ValueFailure(#[from] ValueError),
}
