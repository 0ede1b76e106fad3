//! Single-instance guard for widgets.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::{ensure_presentation_capable, WidgetHandle, WidgetOptions, WidgetState};
use crate::error::Result;
use crate::storage::SettingsStore;
use crate::widget::Host;

/// Tracks the active widget so a page never ends up with two.
///
/// Only a weak reference is held: the slot frees itself once every handle is
/// dropped, even if the widget was never destroyed.
#[derive(Default)]
pub struct WidgetRegistry {
    active: Mutex<Option<Weak<Mutex<WidgetState>>>>,
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("active", &self.active().map(|handle| handle.id()))
            .finish()
    }
}

static GLOBAL: WidgetRegistry = WidgetRegistry::new();

impl WidgetRegistry {
    pub const fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Handle of the active, not yet destroyed widget.
    pub fn active(&self) -> Option<WidgetHandle> {
        let slot = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .and_then(Weak::upgrade)
            .map(WidgetHandle::from_inner)
            .filter(|handle| !handle.is_destroyed())
    }

    /// Initialize a widget, or return the one that is already active.
    ///
    /// When a widget is already active, `options`, `host` and `store` are
    /// dropped unused.
    pub fn init<H, S>(&self, options: &WidgetOptions, host: H, store: S) -> Result<WidgetHandle>
    where
        H: Host + 'static,
        S: SettingsStore + 'static,
    {
        ensure_presentation_capable(&host)?;

        let mut slot = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot
            .as_ref()
            .and_then(Weak::upgrade)
            .map(WidgetHandle::from_inner)
            .filter(|handle| !handle.is_destroyed())
        {
            tracing::debug!(id = %existing.id(), "accessibility widget already initialized");
            return Ok(existing);
        }

        let state = WidgetState::start(options, Box::new(host), Box::new(store))?;
        let inner = Arc::new(Mutex::new(state));
        *slot = Some(Arc::downgrade(&inner));
        Ok(WidgetHandle::from_inner(inner))
    }
}
