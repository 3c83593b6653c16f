use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// an error loading an [`EngineConfig`] from a JSON document on disk.
#[derive(thiserror::Error, Debug)]
pub enum EngineConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// tunable engine behavior, deserializable from a JSON configuration
/// document or built directly in Rust.
///
/// `enable_concurrent_expansion` and `max_worker_threads` are accepted for
/// forward compatibility but have no effect: this engine's scheduling
/// model is single-threaded cooperative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_arena_size: usize,
    pub max_memory_limit: usize,
    pub default_timeout_seconds: u64,
    pub enable_concurrent_expansion: bool,
    pub max_worker_threads: usize,
    pub enable_edge_caching: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_arena_size: 1024 * 1024,
            max_memory_limit: 0,
            default_timeout_seconds: 30,
            enable_concurrent_expansion: false,
            max_worker_threads: 1,
            enable_edge_caching: false,
        }
    }
}

impl EngineConfig {
    /// loads a config from a JSON document at `path`, falling back to
    /// [`Default`] for any field the document omits.
    pub fn from_json_file(path: &Path) -> Result<EngineConfig, EngineConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| EngineConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| EngineConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.default_arena_size, 1024 * 1024);
        assert_eq!(cfg.default_timeout_seconds, 30);
        assert!(!cfg.enable_edge_caching);
    }

    #[test]
    fn partial_json_fills_remaining_fields_from_default() {
        let json = r#"{ "enable_edge_caching": true }"#;
        let cfg: EngineConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.enable_edge_caching);
        assert_eq!(cfg.default_timeout_seconds, 30);
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = EngineConfig {
            enable_edge_caching: true,
            default_timeout_seconds: 5,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn loads_from_a_json_file_on_disk() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("engine.json");
        std::fs::write(&config_path, r#"{ "enable_edge_caching": true, "default_timeout_seconds": 5 }"#).unwrap();

        let cfg = EngineConfig::from_json_file(&config_path).unwrap();
        assert!(cfg.enable_edge_caching);
        assert_eq!(cfg.default_timeout_seconds, 5);
        assert_eq!(cfg.default_arena_size, EngineConfig::default().default_arena_size);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist.json");
        assert!(matches!(
            EngineConfig::from_json_file(&missing),
            Err(EngineConfigError::Io { .. })
        ));
    }
}
