//! FNV-1a folding used to derive a [`Vertex`] structural hash from its
//! sorted key/value pairs.
//!
//! [`Vertex`]: crate::model::vertex::Vertex
use crate::model::value::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// a standalone FNV-1a digest over a byte slice, starting fresh from the
/// offset basis each call.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn type_tag_discriminant(value: &Value) -> u32 {
    match value {
        Value::Int(_) => 0,
        Value::Float(_) => 1,
        Value::String(_) => 2,
        Value::Bool(_) => 3,
        Value::IntArray(_) => 4,
        Value::FloatArray(_) => 5,
        Value::StringArray(_) => 6,
        Value::BoolArray(_) => 7,
    }
}

fn value_bytes(value: &Value, hash: &mut u64) {
    match value {
        Value::Int(v) => *hash ^= fnv1a(&v.to_le_bytes()),
        Value::Float(v) => *hash ^= fnv1a(&v.to_le_bytes()),
        Value::Bool(v) => *hash ^= fnv1a(&[u8::from(*v)]),
        Value::String(v) => *hash ^= fnv1a(v.as_bytes()),
        Value::IntArray(arr) => {
            *hash ^= fnv1a(&(arr.len() as u64).to_le_bytes());
            let mut buf = Vec::with_capacity(arr.len() * 8);
            for v in arr {
                buf.extend_from_slice(&v.to_le_bytes());
            }
            *hash ^= fnv1a(&buf);
        }
        Value::FloatArray(arr) => {
            *hash ^= fnv1a(&(arr.len() as u64).to_le_bytes());
            let mut buf = Vec::with_capacity(arr.len() * 8);
            for v in arr {
                buf.extend_from_slice(&v.to_le_bytes());
            }
            *hash ^= fnv1a(&buf);
        }
        Value::BoolArray(arr) => {
            *hash ^= fnv1a(&(arr.len() as u64).to_le_bytes());
            let buf: Vec<u8> = arr.iter().map(|b| u8::from(*b)).collect();
            *hash ^= fnv1a(&buf);
        }
        Value::StringArray(arr) => {
            *hash ^= fnv1a(&(arr.len() as u64).to_le_bytes());
            for s in arr {
                *hash ^= fnv1a(s.as_bytes());
            }
        }
    }
}

/// folds the FNV-1a digest of each `(key, typed value)` pair, in the order
/// given, into a single 64-bit structural hash. Callers must pass pairs
/// already sorted by key, since the hash is sensitive to pair order.
///
/// returns 0 for an empty pair list.
pub fn compute_vertex_hash(pairs: &[(String, Value)]) -> u64 {
    if pairs.is_empty() {
        return 0;
    }
    let mut hash = FNV_OFFSET_BASIS;
    for (key, value) in pairs {
        hash ^= fnv1a(key.as_bytes());
        hash = hash.wrapping_mul(FNV_PRIME);

        hash ^= fnv1a(&type_tag_discriminant(value).to_le_bytes());
        hash = hash.wrapping_mul(FNV_PRIME);

        value_bytes(value, &mut hash);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pairs_hash_to_zero() {
        assert_eq!(compute_vertex_hash(&[]), 0);
    }

    #[test]
    fn hash_is_deterministic() {
        let pairs = vec![
            ("id".to_string(), Value::Int(7)),
            ("name".to_string(), Value::String("stop".to_string())),
        ];
        assert_eq!(compute_vertex_hash(&pairs), compute_vertex_hash(&pairs));
    }

    #[test]
    fn hash_is_sensitive_to_value_type() {
        let as_int = vec![("k".to_string(), Value::Int(1))];
        let as_float = vec![("k".to_string(), Value::Float(1.0))];
        assert_ne!(compute_vertex_hash(&as_int), compute_vertex_hash(&as_float));
    }

    #[test]
    fn hash_is_sensitive_to_key_order() {
        let a = vec![
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Int(2)),
        ];
        let b = vec![
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(1)),
        ];
        assert_ne!(compute_vertex_hash(&a), compute_vertex_hash(&b));
    }
}
