use std::fmt::Display;

/// errors raised while constructing, comparing, or copying a [`Value`].
///
/// [`Value`]: super::Value
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// the set of type tags a [`Value`] can carry, used in error messages and
/// in the hash fold so that differently-typed values never collide.
///
/// [`Value`]: super::Value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTag {
    Int,
    Float,
    String,
    Bool,
    IntArray,
    FloatArray,
    StringArray,
    BoolArray,
}

impl Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueTag::Int => "int",
            ValueTag::Float => "float",
            ValueTag::String => "string",
            ValueTag::Bool => "bool",
            ValueTag::IntArray => "int[]",
            ValueTag::FloatArray => "float[]",
            ValueTag::StringArray => "string[]",
            ValueTag::BoolArray => "bool[]",
        };
        write!(f, "{s}")
    }
}
