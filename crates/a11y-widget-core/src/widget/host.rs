//! Host page interface.
//!
//! Everything the widget needs from the page it runs on: the root element it
//! styles, the body it marks with the host theme, a place to mount its panel,
//! and a live region for announcements.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

use super::MountPoint;
use crate::effects::{InMemoryTarget, PresentationTarget};

/// What the host shows for the toggle button and panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub open: bool,
    pub toggle_label: &'static str,
    pub title: &'static str,
    /// Footer lines: the keyboard shortcut hint and the storage notice.
    pub footer: [&'static str; 2],
}

/// A message handed to the host's polite live region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub ttl: Duration,
}

/// The page the widget is attached to.
pub trait Host: Send {
    /// Whether there is a document to present to at all.
    fn is_presentation_capable(&self) -> bool {
        true
    }

    /// Root element class list and custom properties.
    fn root(&mut self) -> &mut dyn PresentationTarget;

    /// Body element, used for the host theme marker.
    fn body(&mut self) -> &mut dyn PresentationTarget;

    /// Whether the user agent currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Whether a container with `id` exists and can host the panel.
    fn has_container(&self, id: &str) -> bool;

    fn mount(&mut self, point: &MountPoint);

    fn unmount(&mut self);

    fn render_panel(&mut self, view: &PanelView);

    /// Announce `message`; the host removes it after `ttl`.
    fn announce(&mut self, message: &str, ttl: Duration);
}

/// A presentation target shared between a host and its observers.
#[derive(Debug, Clone, Default)]
pub struct SharedTarget(Arc<Mutex<InMemoryTarget>>);

impl SharedTarget {
    /// Copy of the current state.
    pub fn snapshot(&self) -> InMemoryTarget {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryTarget> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PresentationTarget for SharedTarget {
    fn add_class(&mut self, class: &str) {
        self.lock().add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.lock().remove_class(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.lock().set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        self.lock().remove_property(name);
    }
}

#[derive(Debug, Default)]
struct PageState {
    headless: bool,
    prefers_dark: bool,
    containers: BTreeSet<String>,
    mounted: Option<MountPoint>,
    panel: Option<PanelView>,
    announcements: Vec<Announcement>,
}

/// In-memory page used by tests and the CLI.
///
/// Clones observe the same page, so a caller can hand one clone to a widget
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    root: SharedTarget,
    body: SharedTarget,
    page: Arc<Mutex<PageState>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with no document; initialization on it fails.
    pub fn headless() -> Self {
        let host = Self::default();
        host.page().headless = true;
        host
    }

    #[must_use]
    pub fn with_container(self, id: impl Into<String>) -> Self {
        self.page().containers.insert(id.into());
        self
    }

    #[must_use]
    pub fn with_dark_scheme(self, prefers_dark: bool) -> Self {
        self.set_prefers_dark(prefers_dark);
        self
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.page().prefers_dark = prefers_dark;
    }

    pub fn root_state(&self) -> InMemoryTarget {
        self.root.snapshot()
    }

    pub fn body_state(&self) -> InMemoryTarget {
        self.body.snapshot()
    }

    pub fn mounted(&self) -> Option<MountPoint> {
        self.page().mounted.clone()
    }

    pub fn panel(&self) -> Option<PanelView> {
        self.page().panel
    }

    pub fn announcements(&self) -> Vec<Announcement> {
        self.page().announcements.clone()
    }

    fn page(&self) -> MutexGuard<'_, PageState> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Host for InMemoryHost {
    fn is_presentation_capable(&self) -> bool {
        !self.page().headless
    }

    fn root(&mut self) -> &mut dyn PresentationTarget {
        &mut self.root
    }

    fn body(&mut self) -> &mut dyn PresentationTarget {
        &mut self.body
    }

    fn prefers_dark(&self) -> bool {
        self.page().prefers_dark
    }

    fn has_container(&self, id: &str) -> bool {
        self.page().containers.contains(id)
    }

    fn mount(&mut self, point: &MountPoint) {
        self.page().mounted = Some(point.clone());
    }

    fn unmount(&mut self) {
        let mut page = self.page();
        page.mounted = None;
        page.panel = None;
    }

    fn render_panel(&mut self, view: &PanelView) {
        self.page().panel = Some(*view);
    }

    fn announce(&mut self, message: &str, ttl: Duration) {
        self.page().announcements.push(Announcement {
            message: message.to_string(),
            ttl,
        });
    }
}
