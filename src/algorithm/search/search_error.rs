use crate::algorithm::arena::ArenaError;
use crate::engine::EngineError;

/// the terminal error returned by [`plan`](super::plan).
///
/// provider failures are intentionally absent here: the engine swallows
/// them at expansion time (a failing provider simply contributes no
/// edges rather than raising a hard error), so they never surface past
/// [`Engine::expand`](crate::engine::Engine::expand).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Arena(#[from] ArenaError),
    #[error("search exceeded its timeout")]
    Timeout,
    #[error("no path exists from the start vertex to a goal-satisfying vertex")]
    NoPathFound,
}
