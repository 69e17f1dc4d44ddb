use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::ranking::{DEFAULT_MAX_COUNT, DEFAULT_PARALLEL_THRESHOLD};
use crate::errors::RelatedError;

/// Runtime configuration for the ranker.
///
/// Scoring weights are not configurable; see `constants::scoring`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Upper bound on the number of related records returned.
    pub max_count: usize,
    /// Candidate count at which scoring runs on the rayon pool.
    ///
    /// Output is identical either way; this only trades thread overhead for
    /// throughput on large corpora.
    pub parallel_threshold: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RankerConfig {
    /// Default configuration with a different result bound.
    pub fn with_max_count(max_count: usize) -> Self {
        Self {
            max_count,
            ..Self::default()
        }
    }

    /// Parse a JSON configuration document. Missing fields take defaults;
    /// unknown fields are rejected.
    pub fn from_json_str(raw: &str) -> Result<Self, RelatedError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RelatedError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = RankerConfig::default();
        assert_eq!(config.max_count, 5);
        assert_eq!(config.parallel_threshold, 512);
        assert_eq!(RankerConfig::with_max_count(3).max_count, 3);
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let config = RankerConfig::from_json_str(r#"{"max_count": 8}"#).unwrap();
        assert_eq!(config.max_count, 8);
        assert_eq!(config.parallel_threshold, 512);
        assert_eq!(
            RankerConfig::from_json_str("{}").unwrap(),
            RankerConfig::default()
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RankerConfig::from_json_str(r#"{"max_count": 8, "half_life": 90}"#)
            .unwrap_err();
        assert!(matches!(err, RelatedError::Json(_)));
        assert!(err.to_string().contains("half_life"));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = RankerConfig::from_json_str(r#"{"max_count": -1}"#).unwrap_err();
        assert!(matches!(err, RelatedError::Json(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ranker.json");
        fs::write(&path, r#"{"max_count": 2, "parallel_threshold": 1}"#).unwrap();
        let config = RankerConfig::load(&path).unwrap();
        assert_eq!(
            config,
            RankerConfig {
                max_count: 2,
                parallel_threshold: 1,
            }
        );

        let missing = RankerConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, RelatedError::Io(_)));
    }
}
