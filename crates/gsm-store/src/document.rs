//! Whole-file JSON document helpers shared by the stores.

use crate::{Result, StoreError};

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and deserialize a document, or return the default when the file
/// does not exist yet.
pub(crate) fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize and rewrite a document in place.
pub(crate) fn write(path: &Path, value: &impl Serialize) -> Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    std::fs::write(path, contents).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Shallow-merge the keys of a JSON object patch into a serializable
/// value, yielding the patched deserialization.
pub(crate) fn merge_patch<T>(current: &T, patch: &serde_json::Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut value = serde_json::to_value(current).map_err(from_json)?;

    if let (Some(target), Some(source)) = (value.as_object_mut(), patch.as_object()) {
        for (key, val) in source {
            target.insert(key.clone(), val.clone());
        }
    }

    serde_json::from_value(value).map_err(from_json)
}

fn from_json(source: serde_json::Error) -> StoreError {
    StoreError::Json {
        path: std::path::PathBuf::new(),
        source,
    }
}
