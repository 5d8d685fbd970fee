//! Versioned JSON blob boundary.
//!
//! Free-form user payloads (onboarding answers, ikigai answers, generated
//! plans) are persisted as `{"schema_version": N, "data": {...}}` and
//! validated when read back. An absent, malformed, or newer-versioned blob
//! reads as the typed default. The read boundary never throws and never
//! hopefully casts a loose shape into a struct.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tracing::warn;

/// Current schema version written by this build.
pub const SCHEMA_VERSION: i64 = 1;

/// Wraps a payload in the versioned envelope for persistence.
pub fn write_versioned<T: Serialize>(data: &T) -> Value {
    json!({
        "schema_version": SCHEMA_VERSION,
        "data": data,
    })
}

/// Reads a payload out of the versioned envelope.
/// Returns `T::default()` (with a warning) for anything that does not
/// validate: missing envelope, missing/newer version, or a payload that
/// fails strict deserialization.
pub fn read_versioned<T: DeserializeOwned + Default>(blob: Option<&Value>) -> T {
    let Some(blob) = blob else {
        return T::default();
    };

    let version = blob.get("schema_version").and_then(Value::as_i64);
    match version {
        Some(v) if v <= SCHEMA_VERSION => {}
        Some(v) => {
            warn!("Stored blob has schema_version {v}, newer than {SCHEMA_VERSION}; using default");
            return T::default();
        }
        None => {
            warn!("Stored blob is missing schema_version; using default");
            return T::default();
        }
    }

    let Some(data) = blob.get("data") else {
        warn!("Stored blob is missing data payload; using default");
        return T::default();
    };

    match serde_json::from_value::<T>(data.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored blob failed validation, using default: {e}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        answers: Vec<String>,
        done: bool,
    }

    #[test]
    fn test_round_trip() {
        let sample = Sample {
            answers: vec!["a".to_string(), "b".to_string()],
            done: true,
        };
        let blob = write_versioned(&sample);
        assert_eq!(blob["schema_version"], SCHEMA_VERSION);
        let back: Sample = read_versioned(Some(&blob));
        assert_eq!(back, sample);
    }

    #[test]
    fn test_absent_blob_yields_default() {
        let back: Sample = read_versioned(None);
        assert_eq!(back, Sample::default());
    }

    #[test]
    fn test_malformed_blob_yields_default() {
        let blob = json!({"totally": "unrelated"});
        let back: Sample = read_versioned(Some(&blob));
        assert_eq!(back, Sample::default());
    }

    #[test]
    fn test_missing_version_yields_default() {
        let blob = json!({"data": {"answers": ["a"], "done": true}});
        let back: Sample = read_versioned(Some(&blob));
        assert_eq!(back, Sample::default());
    }

    #[test]
    fn test_newer_version_yields_default() {
        let blob = json!({"schema_version": SCHEMA_VERSION + 1, "data": {"answers": ["a"], "done": true}});
        let back: Sample = read_versioned(Some(&blob));
        assert_eq!(back, Sample::default());
    }

    #[test]
    fn test_wrong_payload_shape_yields_default() {
        let blob = json!({"schema_version": SCHEMA_VERSION, "data": {"answers": "not-an-array"}});
        let back: Sample = read_versioned(Some(&blob));
        assert_eq!(back, Sample::default());
    }
}
