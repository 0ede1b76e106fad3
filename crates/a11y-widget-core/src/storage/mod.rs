//! Persisted settings storage.
//!
//! Settings live as one JSON blob under [`STORAGE_KEY`]. Reading is forgiving:
//! a missing, unreadable or malformed blob is the same as no blob. Writing is
//! best effort: failures are logged at debug level and otherwise ignored.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;

use crate::error::Result;
use crate::models::SettingsRecord;

/// Key the settings blob is stored under.
pub const STORAGE_KEY: &str = "accessibility-widget-state-v1";

/// Raw blob storage for the settings record.
pub trait SettingsStore: Send {
    /// Load the stored blob, `None` when nothing has been stored.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored blob.
    fn save(&self, raw: &str) -> Result<()>;

    /// Remove the stored blob.
    fn clear(&self) -> Result<()>;
}

/// Read the persisted blob as a JSON object.
///
/// Returns `None` for anything that is not a stored JSON object.
pub fn read_persisted(store: &dyn SettingsStore) -> Option<Value> {
    let raw = match store.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(error) => {
            tracing::debug!("Failed to read persisted settings: {}", error);
            return None;
        }
    };

    if raw.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            tracing::debug!("Ignoring persisted settings that are not an object");
            None
        }
        Err(error) => {
            tracing::debug!("Ignoring corrupt persisted settings: {}", error);
            None
        }
    }
}

/// Write `record` to `store`, returning whether the write succeeded.
pub fn persist(store: &dyn SettingsStore, record: &SettingsRecord) -> bool {
    let result = record
        .to_json()
        .map_err(crate::Error::from)
        .and_then(|raw| store.save(&raw));
    match result {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!("Failed to persist settings: {}", error);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextSize;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn read_persisted_accepts_objects_only() {
        let store = MemoryStore::new();
        assert_eq!(read_persisted(&store), None);

        for raw in ["", "   ", "not json", "null", "42", "[1,2]", "\"text\""] {
            store.save(raw).unwrap();
            assert_eq!(read_persisted(&store), None, "{raw}");
        }

        store.save(r#"{"textSize":"large"}"#).unwrap();
        assert_eq!(read_persisted(&store), Some(json!({ "textSize": "large" })));
    }

    #[test]
    fn read_persisted_swallows_load_errors() {
        let store = MemoryStore::unavailable();
        assert_eq!(read_persisted(&store), None);
    }

    #[test]
    fn persist_writes_full_record() {
        let store = MemoryStore::new();
        let record = SettingsRecord {
            text_size: TextSize::Large,
            ..SettingsRecord::default()
        };
        assert!(persist(&store, &record));

        let stored: Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
        assert_eq!(stored["textSize"], "large");
        assert_eq!(stored.as_object().map(serde_json::Map::len), Some(9));
    }

    #[test]
    fn persist_reports_failure_without_panicking() {
        let store = MemoryStore::unavailable();
        assert!(!persist(&store, &SettingsRecord::default()));
    }
}
