//! The widget instance and its handle.
//!
//! A widget owns the in-memory settings record for its page. Every change
//! runs through one routine: normalize the input, merge it, re-apply the full
//! record to the host root, then persist it.

mod controls;
mod host;
mod registry;

pub use controls::{controls, option_label, ControlDescriptor, ControlKind, ControlOption, PANEL_ORDER};
pub use host::{Announcement, Host, InMemoryHost, PanelView, SharedTarget};
pub use registry::WidgetRegistry;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::effects::{apply, clear_effects};
use crate::error::{Error, Result};
use crate::locale::{Locale, LocaleStrings};
use crate::models::{PartialSettingsPatch, SettingsRecord};
use crate::normalize::{normalize, normalize_patch};
use crate::storage::{persist, read_persisted, SettingsStore};
use crate::util::normalize_text_option;

/// Body class set while the host prefers a dark color scheme.
pub const HOST_DARK_CLASS: &str = "accessibility-widget-host-dark";

/// How long the startup announcement stays in the live region.
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_secs(2);

/// Initialization options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Locale code; unknown codes fall back to the default locale.
    #[serde(default)]
    pub locale: Option<String>,
    /// Id of the container to mount into; the body when absent or unknown.
    #[serde(default)]
    pub target: Option<String>,
}

impl WidgetOptions {
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Where the widget panel is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MountPoint {
    /// The page body (default).
    Body,
    /// A host container, by id.
    Container(String),
}

impl MountPoint {
    fn resolve(target: Option<&str>, host: &dyn Host) -> Self {
        match normalize_text_option(target) {
            Some(id) if host.has_container(&id) => Self::Container(id),
            Some(id) => {
                tracing::debug!(container = %id, "mount target not found, using body");
                Self::Body
            }
            None => Self::Body,
        }
    }
}

/// A key press delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ctrl_alt(mut self) -> Self {
        self.ctrl = true;
        self.alt = true;
        self
    }

    /// Ctrl + Alt + A, in either case.
    pub fn is_panel_shortcut(&self) -> bool {
        self.ctrl && self.alt && self.key.eq_ignore_ascii_case("a")
    }

    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// Initialization needs a host that can present; nothing else works without one.
pub(crate) fn ensure_presentation_capable(host: &dyn Host) -> Result<()> {
    if host.is_presentation_capable() {
        Ok(())
    } else {
        Err(Error::Environment(
            "the host has no document to present to".to_string(),
        ))
    }
}

/// Outcome of a settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Nothing valid to apply, or the widget is destroyed.
    Ignored,
    /// Applied to the page and written to storage.
    Saved,
    /// Applied to the page, but the storage write failed.
    Unsaved,
}

impl Update {
    const fn from_persisted(saved: bool) -> Self {
        if saved {
            Self::Saved
        } else {
            Self::Unsaved
        }
    }

    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn is_saved(self) -> bool {
        matches!(self, Self::Saved)
    }
}

pub(crate) struct WidgetState {
    id: Uuid,
    locale: Locale,
    mount: MountPoint,
    settings: SettingsRecord,
    panel_open: bool,
    destroyed: bool,
    host: Box<dyn Host>,
    store: Box<dyn SettingsStore>,
}

impl WidgetState {
    pub(crate) fn start(
        options: &WidgetOptions,
        host: Box<dyn Host>,
        store: Box<dyn SettingsStore>,
    ) -> Result<Self> {
        let locale = Locale::resolve(options.locale.as_deref());
        let mount = MountPoint::resolve(options.target.as_deref(), host.as_ref());

        let persisted = read_persisted(store.as_ref()).unwrap_or(Value::Null);
        let settings = normalize(&persisted);

        let mut state = Self {
            id: Uuid::now_v7(),
            locale,
            mount,
            settings,
            panel_open: false,
            destroyed: false,
            host,
            store,
        };

        state.sync_host_theme();
        apply(&state.settings, state.host.root());
        state.host.mount(&state.mount);
        state.render_panel();
        state
            .host
            .announce(locale.strings().aria_announcement, ANNOUNCEMENT_TTL);

        tracing::info!(
            id = %state.id,
            locale = locale.code(),
            mount = ?state.mount,
            "accessibility widget initialized"
        );
        Ok(state)
    }

    fn strings(&self) -> &'static LocaleStrings {
        self.locale.strings()
    }

    /// Replace the record, re-apply it, and persist it. Returns whether the
    /// write reached storage.
    fn update(&mut self, record: SettingsRecord) -> bool {
        self.settings = record;
        apply(&self.settings, self.host.root());
        persist(self.store.as_ref(), &self.settings)
    }

    fn set_open(&mut self, open: bool) {
        self.panel_open = open;
        self.render_panel();
    }

    fn render_panel(&mut self) {
        let strings = self.strings();
        let view = PanelView {
            open: self.panel_open,
            toggle_label: if self.panel_open {
                strings.close_label
            } else {
                strings.open_label
            },
            title: strings.panel_title,
            footer: strings.footer_lines(),
        };
        self.host.render_panel(&view);
    }

    fn sync_host_theme(&mut self) {
        let dark = self.host.prefers_dark();
        let body = self.host.body();
        if dark {
            body.add_class(HOST_DARK_CLASS);
        } else {
            body.remove_class(HOST_DARK_CLASS);
        }
    }

    fn teardown(&mut self) {
        self.panel_open = false;
        self.host.unmount();
        clear_effects(self.host.root());
        self.host.body().remove_class(HOST_DARK_CLASS);
        self.destroyed = true;
        tracing::info!(id = %self.id, "accessibility widget destroyed");
    }
}

/// Handle to an initialized widget.
///
/// Clones refer to the same widget. After [`destroy`](Self::destroy) every
/// mutating call is ignored.
///
/// Dropping the last handle without calling `destroy` frees the registry slot
/// but leaves the applied classes and properties on the host.
#[derive(Clone)]
pub struct WidgetHandle {
    inner: Arc<Mutex<WidgetState>>,
}

impl std::fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("WidgetHandle")
            .field("id", &state.id)
            .field("locale", &state.locale)
            .field("destroyed", &state.destroyed)
            .finish_non_exhaustive()
    }
}

impl PartialEq for WidgetHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for WidgetHandle {}

impl WidgetHandle {
    pub(crate) const fn from_inner(inner: Arc<Mutex<WidgetState>>) -> Self {
        Self { inner }
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` on a live widget; `None` once destroyed.
    fn with_live<T>(&self, f: impl FnOnce(&mut WidgetState) -> T) -> Option<T> {
        let mut state = self.lock();
        if state.destroyed {
            tracing::debug!(id = %state.id, "ignoring call on destroyed widget");
            return None;
        }
        Some(f(&mut state))
    }

    pub fn id(&self) -> Uuid {
        self.lock().id
    }

    pub fn locale(&self) -> Locale {
        self.lock().locale
    }

    pub fn strings(&self) -> &'static LocaleStrings {
        self.lock().strings()
    }

    pub fn mount_point(&self) -> MountPoint {
        self.lock().mount.clone()
    }

    pub fn is_open(&self) -> bool {
        self.lock().panel_open
    }

    pub fn is_destroyed(&self) -> bool {
        self.lock().destroyed
    }

    pub fn open(&self) {
        self.with_live(|state| state.set_open(true));
    }

    pub fn close(&self) {
        self.with_live(|state| state.set_open(false));
    }

    pub fn toggle(&self) {
        self.with_live(|state| {
            let open = !state.panel_open;
            state.set_open(open);
        });
    }

    /// Copy of the current settings.
    pub fn get_state(&self) -> SettingsRecord {
        self.lock().settings
    }

    /// Merge the valid fields of `candidate` into the settings.
    ///
    /// A candidate without any valid field changes nothing and writes
    /// nothing.
    pub fn set_state(&self, candidate: &Value) -> Update {
        let patch = normalize_patch(candidate);
        self.apply_patch(&patch)
    }

    /// Merge an already validated patch. Empty patches are ignored.
    pub fn apply_patch(&self, patch: &PartialSettingsPatch) -> Update {
        if patch.is_empty() {
            return Update::Ignored;
        }
        self.with_live(|state| state.update(state.settings.merge(patch)))
            .map_or(Update::Ignored, Update::from_persisted)
    }

    /// Restore and persist the default settings.
    pub fn reset(&self) -> Update {
        self.with_live(|state| state.update(SettingsRecord::default()))
            .map_or(Update::Ignored, Update::from_persisted)
    }

    /// Dispatch a key press. Returns whether the widget consumed it.
    pub fn handle_key(&self, input: &KeyInput) -> bool {
        self.with_live(|state| {
            if input.is_panel_shortcut() {
                let open = !state.panel_open;
                state.set_open(open);
                true
            } else if input.is_escape() && state.panel_open {
                state.set_open(false);
                true
            } else {
                false
            }
        })
        .unwrap_or(false)
    }

    /// Notify the widget that the host color scheme preference changed.
    pub fn color_scheme_changed(&self) {
        self.with_live(WidgetState::sync_host_theme);
    }

    /// Localized descriptors of the panel controls.
    pub fn controls(&self) -> Vec<ControlDescriptor> {
        controls(self.strings())
    }

    /// Remove the panel, stop listening, and undo every presentation effect.
    /// Stored settings are kept.
    pub fn destroy(&self) {
        self.with_live(WidgetState::teardown);
    }
}

/// Initialize a widget through the process-wide registry.
pub fn init_widget<H, S>(options: &WidgetOptions, host: H, store: S) -> Result<WidgetHandle>
where
    H: Host + 'static,
    S: SettingsStore + 'static,
{
    WidgetRegistry::global().init(options, host, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{class, property};
    use crate::models::{ColorFilter, ContrastLevel, LineHeight, MagnifierLevel, TextSize};
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn start(options: &WidgetOptions, host: &InMemoryHost, store: &MemoryStore) -> WidgetHandle {
        WidgetRegistry::new()
            .init(options, host.clone(), store.clone())
            .unwrap()
    }

    fn stored(store: &MemoryStore) -> Value {
        serde_json::from_str(&store.raw().unwrap()).unwrap()
    }

    #[test]
    fn init_applies_persisted_settings() {
        let host = InMemoryHost::new();
        let store = MemoryStore::with_raw(r#"{"textSize":"xl","magnifier":"150","bogus":1}"#);
        let widget = start(&WidgetOptions::default(), &host, &store);

        assert_eq!(
            widget.get_state(),
            SettingsRecord {
                text_size: TextSize::ExtraLarge,
                magnifier: MagnifierLevel::Large,
                ..SettingsRecord::default()
            }
        );
        let root = host.root_state();
        assert!(root.has_class(class::TEXT_XL));
        assert_eq!(root.property(property::MAGNIFIER_SCALE), Some("1.5"));
    }

    #[test]
    fn corrupt_storage_starts_from_defaults() {
        let host = InMemoryHost::new();
        let store = MemoryStore::with_raw("{not json");
        let widget = start(&WidgetOptions::default(), &host, &store);
        assert_eq!(widget.get_state(), SettingsRecord::default());
        assert_eq!(host.root_state().property(property::FILTER), Some("none"));
    }

    #[test]
    fn legacy_boolean_line_height_is_migrated_on_load() {
        let host = InMemoryHost::new();
        let store = MemoryStore::with_raw(r#"{"lineHeight":true}"#);
        let widget = start(&WidgetOptions::default(), &host, &store);
        assert_eq!(widget.get_state().line_height, LineHeight::Relaxed);
        assert!(host.root_state().has_class(class::LINE_HEIGHT_1_5));
    }

    #[test]
    fn headless_host_is_an_environment_error() {
        let result = WidgetRegistry::new().init(
            &WidgetOptions::default(),
            InMemoryHost::headless(),
            MemoryStore::new(),
        );
        assert!(matches!(result, Err(Error::Environment(_))));
    }

    #[test]
    fn headless_host_fails_even_with_an_active_widget() {
        let registry = WidgetRegistry::new();
        let _active = registry
            .init(&WidgetOptions::default(), InMemoryHost::new(), MemoryStore::new())
            .unwrap();

        let result = registry.init(
            &WidgetOptions::default(),
            InMemoryHost::headless(),
            MemoryStore::new(),
        );
        assert!(matches!(result, Err(Error::Environment(_))));
    }

    #[test]
    fn set_state_merges_applies_and_persists() {
        let host = InMemoryHost::new();
        let store = MemoryStore::new();
        let widget = start(&WidgetOptions::default(), &host, &store);

        let update = widget.set_state(&json!({
            "highContrast": true,
            "contrastAdjust": "150",
            "textSize": "bogus",
        }));
        assert_eq!(update, Update::Saved);

        let state = widget.get_state();
        assert!(state.high_contrast);
        assert_eq!(state.contrast_adjust, ContrastLevel::Strong);
        assert_eq!(state.text_size, TextSize::Default);

        let root = host.root_state();
        assert!(root.has_class(class::FILTERED));
        assert_eq!(
            root.property(property::FILTER),
            Some("contrast(1.35) saturate(1.2) contrast(1.5)")
        );
        assert_eq!(stored(&store)["contrastAdjust"], "150");
    }

    #[test]
    fn set_state_without_valid_fields_is_a_no_op() {
        let host = InMemoryHost::new();
        let store = MemoryStore::new();
        let widget = start(&WidgetOptions::default(), &host, &store);

        assert_eq!(
            widget.set_state(&json!({ "textSize": "huge", "unknown": true })),
            Update::Ignored
        );
        assert_eq!(widget.set_state(&json!(null)), Update::Ignored);
        assert_eq!(widget.set_state(&json!("highContrast")), Update::Ignored);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn get_state_returns_a_copy() {
        let host = InMemoryHost::new();
        let widget = start(&WidgetOptions::default(), &host, &MemoryStore::new());
        let mut snapshot = widget.get_state();
        snapshot.reduce_motion = true;
        assert!(!widget.get_state().reduce_motion);
    }

    #[test]
    fn storage_failures_do_not_block_updates() {
        let host = InMemoryHost::new();
        let store = MemoryStore::unavailable();
        let widget = start(&WidgetOptions::default(), &host, &store);

        let update = widget.set_state(&json!({ "colorFilter": "grayscale" }));
        assert!(update.is_applied());
        assert!(!update.is_saved());
        assert_eq!(widget.get_state().color_filter, ColorFilter::Grayscale);
        assert_eq!(
            host.root_state().property(property::FILTER),
            Some("grayscale(100%)")
        );
    }

    #[test]
    fn reset_reports_unsaved_defaults() {
        let host = InMemoryHost::new();
        let widget = start(&WidgetOptions::default(), &host, &MemoryStore::unavailable());
        widget.set_state(&json!({ "highlightLinks": true }));

        assert_eq!(widget.reset(), Update::Unsaved);
        assert_eq!(widget.get_state(), SettingsRecord::default());
        assert!(!host.root_state().has_class(class::HIGHLIGHT_LINKS));
    }

    #[test]
    fn reset_restores_and_persists_defaults() {
        let host = InMemoryHost::new();
        let store = MemoryStore::with_raw(r#"{"dyslexiaFriendly":true,"magnifier":"125"}"#);
        let widget = start(&WidgetOptions::default(), &host, &store);

        assert_eq!(widget.reset(), Update::Saved);

        assert_eq!(widget.get_state(), SettingsRecord::default());
        assert!(!host.root_state().has_class(class::DYSLEXIA));
        assert_eq!(host.root_state().property(property::MAGNIFIER_SCALE), None);
        assert_eq!(stored(&store)["magnifier"], "default");
    }

    #[test]
    fn destroy_removes_every_effect_and_the_panel() {
        let host = InMemoryHost::new().with_dark_scheme(true);
        let store = MemoryStore::new();
        let widget = start(&WidgetOptions::default(), &host, &store);
        widget.set_state(&json!({
            "highContrast": true,
            "textSize": "large",
            "lineHeight": "2",
            "colorFilter": "sepia",
            "reduceMotion": true,
            "contrastAdjust": "125",
            "magnifier": "150",
            "dyslexiaFriendly": true,
            "highlightLinks": true,
        }));
        assert!(host.body_state().has_class(HOST_DARK_CLASS));

        widget.destroy();

        assert!(widget.is_destroyed());
        assert!(host.root_state().is_empty());
        assert!(host.body_state().is_empty());
        assert_eq!(host.mounted(), None);
        assert!(store.raw().is_some());
    }

    #[test]
    fn destroyed_widget_ignores_further_calls() {
        let host = InMemoryHost::new();
        let widget = start(&WidgetOptions::default(), &host, &MemoryStore::new());
        widget.destroy();

        assert_eq!(widget.set_state(&json!({ "highlightLinks": true })), Update::Ignored);
        widget.open();
        assert!(!widget.handle_key(&KeyInput::new("a").with_ctrl_alt()));
        assert_eq!(widget.reset(), Update::Ignored);
        widget.color_scheme_changed();

        assert!(!widget.is_open());
        assert!(host.root_state().is_empty());
    }

    #[test]
    fn open_close_render_localized_labels() {
        let host = InMemoryHost::new();
        let widget = start(&WidgetOptions::default().with_locale("en"), &host, &MemoryStore::new());

        assert_eq!(host.panel().map(|view| view.toggle_label), Some("Open accessibility options"));
        widget.open();
        assert!(widget.is_open());
        assert_eq!(
            host.panel().map(|view| view.toggle_label),
            Some("Close accessibility options")
        );
        widget.close();
        assert!(!widget.is_open());
        widget.toggle();
        assert!(widget.is_open());
    }

    #[test]
    fn panel_footer_carries_shortcut_and_storage_notice() {
        let host = InMemoryHost::new();
        start(&WidgetOptions::default().with_locale("en"), &host, &MemoryStore::new());

        assert_eq!(
            host.panel().map(|view| view.footer),
            Some([
                "Keyboard shortcut: Ctrl + Alt + A",
                "Settings are saved in this browser."
            ])
        );
    }

    #[test]
    fn keyboard_shortcut_toggles_and_escape_closes() {
        let host = InMemoryHost::new();
        let widget = start(&WidgetOptions::default(), &host, &MemoryStore::new());

        assert!(widget.handle_key(&KeyInput::new("A").with_ctrl_alt()));
        assert!(widget.is_open());
        assert!(!widget.handle_key(&KeyInput::new("a")));
        assert!(widget.handle_key(&KeyInput::new("Escape")));
        assert!(!widget.is_open());
        assert!(!widget.handle_key(&KeyInput::new("Escape")));
    }

    #[test]
    fn unknown_locale_and_target_fall_back() {
        let host = InMemoryHost::new().with_container("sidebar");
        let widget = start(
            &WidgetOptions::default().with_locale("fr").with_target("missing"),
            &host,
            &MemoryStore::new(),
        );
        assert_eq!(widget.locale(), Locale::Tr);
        assert_eq!(widget.mount_point(), MountPoint::Body);
        assert_eq!(host.mounted(), Some(MountPoint::Body));
        assert_eq!(
            host.announcements()[0].message,
            Locale::Tr.strings().aria_announcement
        );
        assert_eq!(host.announcements()[0].ttl, ANNOUNCEMENT_TTL);
    }

    #[test]
    fn known_target_is_used_as_mount_point() {
        let host = InMemoryHost::new().with_container("sidebar");
        let widget = start(
            &WidgetOptions::default().with_target(" sidebar "),
            &host,
            &MemoryStore::new(),
        );
        assert_eq!(widget.mount_point(), MountPoint::Container("sidebar".to_string()));
    }

    #[test]
    fn color_scheme_changes_follow_the_host() {
        let host = InMemoryHost::new();
        let widget = start(&WidgetOptions::default(), &host, &MemoryStore::new());
        assert!(!host.body_state().has_class(HOST_DARK_CLASS));

        host.set_prefers_dark(true);
        widget.color_scheme_changed();
        assert!(host.body_state().has_class(HOST_DARK_CLASS));

        widget.destroy();
        widget.color_scheme_changed();
        assert!(!host.body_state().has_class(HOST_DARK_CLASS));
    }

    #[test]
    fn registry_returns_the_active_instance() {
        let registry = WidgetRegistry::new();
        let host = InMemoryHost::new();
        let first = registry
            .init(&WidgetOptions::default(), host.clone(), MemoryStore::new())
            .unwrap();
        let second = registry
            .init(
                &WidgetOptions::default().with_locale("en"),
                InMemoryHost::new(),
                MemoryStore::new(),
            )
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.locale(), Locale::Tr);
        assert_eq!(registry.active(), Some(first.clone()));

        first.destroy();
        assert_eq!(registry.active(), None);

        let third = registry
            .init(&WidgetOptions::default(), InMemoryHost::new(), MemoryStore::new())
            .unwrap();
        assert_ne!(third, first);
    }

    #[test]
    fn dropping_handles_frees_the_slot_but_keeps_effects() {
        let registry = WidgetRegistry::new();
        let host = InMemoryHost::new();
        let widget = registry
            .init(
                &WidgetOptions::default(),
                host.clone(),
                MemoryStore::with_raw(r#"{"reduceMotion":true}"#),
            )
            .unwrap();
        drop(widget);

        assert_eq!(registry.active(), None);
        assert!(host.root_state().has_class(class::REDUCE_MOTION));
    }

    #[test]
    fn global_registry_is_shared() {
        let widget = init_widget(&WidgetOptions::default(), InMemoryHost::new(), MemoryStore::new())
            .unwrap();
        let again = init_widget(&WidgetOptions::default(), InMemoryHost::new(), MemoryStore::new())
            .unwrap();
        assert_eq!(widget, again);
        assert_eq!(WidgetRegistry::global().active(), Some(widget.clone()));
        widget.destroy();
    }
}
