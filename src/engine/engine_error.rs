#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
