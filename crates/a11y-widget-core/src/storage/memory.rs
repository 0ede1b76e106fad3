//! In-memory settings store.

use std::sync::{Arc, Mutex, PoisonError};

use super::SettingsStore;
use crate::error::{Error, Result};

/// Settings store backed by shared memory.
///
/// Clones share the same slot, so a test can keep a clone and inspect what a
/// widget persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `raw`.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        *store.lock() = Some(raw.into());
        store
    }

    /// Store whose every operation fails, like storage disabled by the user.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Current raw blob.
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::Storage("storage is unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.raw())
    }

    fn save(&self, raw: &str) -> Result<()> {
        self.check_available()?;
        *self.lock() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.check_available()?;
        *self.lock() = None;
        Ok(())
    }
}
