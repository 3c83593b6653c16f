#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VertexError {
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
