mod value_error;

pub use value_error::{ValueError, ValueTag};

use derive_more::From;
use serde::{Deserialize, Serialize};

/// a tagged scalar or array, used for [`Vertex`] fields and [`Edge`]
/// metadata. equality and cloning are always structural/deep: there is no
/// shared or pointer-identity storage to alias.
///
/// `From` is derived per-variant (each holds a distinct inner type), so
/// callers can write `Value::from(5i64)` instead of `Value::Int(5)`.
///
/// [`Vertex`]: crate::model::vertex::Vertex
/// [`Edge`]: crate::model::edge::Edge
#[derive(Debug, Clone, PartialEq, From, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    #[serde(rename = "int")]
    Int(i64),
    #[serde(rename = "float")]
    Float(f64),
    #[serde(rename = "string")]
    String(String),
    #[serde(rename = "bool")]
    Bool(bool),
    #[serde(rename = "int_array")]
    IntArray(Vec<i64>),
    #[serde(rename = "float_array")]
    FloatArray(Vec<f64>),
    #[serde(rename = "string_array")]
    StringArray(Vec<String>),
    #[serde(rename = "bool_array")]
    BoolArray(Vec<bool>),
}

impl Value {
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Int(_) => ValueTag::Int,
            Value::Float(_) => ValueTag::Float,
            Value::String(_) => ValueTag::String,
            Value::Bool(_) => ValueTag::Bool,
            Value::IntArray(_) => ValueTag::IntArray,
            Value::FloatArray(_) => ValueTag::FloatArray,
            Value::StringArray(_) => ValueTag::StringArray,
            Value::BoolArray(_) => ValueTag::BoolArray,
        }
    }

    pub fn as_int(&self) -> Result<i64, ValueError> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(ValueError::TypeMismatch {
                expected: ValueTag::Int.to_string(),
                found: other.tag().to_string(),
            }),
        }
    }

    pub fn as_float(&self) -> Result<f64, ValueError> {
        match self {
            Value::Float(v) => Ok(*v),
            other => Err(ValueError::TypeMismatch {
                expected: ValueTag::Float.to_string(),
                found: other.tag().to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(v) => Ok(v.as_str()),
            other => Err(ValueError::TypeMismatch {
                expected: ValueTag::String.to_string(),
                found: other.tag().to_string(),
            }),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(v) => Ok(*v),
            other => Err(ValueError::TypeMismatch {
                expected: ValueTag::Bool.to_string(),
                found: other.tag().to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::Bool(v) => write!(f, "{v}"),
            Value::IntArray(v) => write!(f, "{v:?}"),
            Value::FloatArray(v) => write!(f, "{v:?}"),
            Value::StringArray(v) => write!(f, "{v:?}"),
            Value::BoolArray(v) => write!(f, "{v:?}"),
        }
    }
}
