//! a11y-widget-core - Core library for the accessibility widget
//!
//! This crate holds the settings schema, the normalizer that turns arbitrary
//! stored or caller-supplied JSON into validated settings, and the applier
//! that maps settings onto a presentation surface. Hosts (browser bindings,
//! the CLI, tests) plug in through the [`PresentationTarget`],
//! [`SettingsStore`] and [`Host`] traits.

pub mod effects;
pub mod error;
pub mod locale;
pub mod models;
pub mod normalize;
pub mod schema;
pub mod storage;
pub mod util;
pub mod widget;

pub use effects::{
    apply, clear_effects, compose_filter, derive_effects, EffectSet, InMemoryTarget,
    PresentationTarget,
};
pub use error::{Error, Result};
pub use locale::{Locale, LocaleStrings};
pub use models::{
    ColorFilter, ContrastLevel, LineHeight, MagnifierLevel, PartialSettingsPatch, SettingsRecord,
    TextSize,
};
pub use normalize::{normalize, normalize_patch, normalize_with, NormalizeMode, Normalized};
pub use schema::{SettingField, SettingValue};
pub use storage::{FileStore, MemoryStore, SettingsStore, STORAGE_KEY};
pub use widget::{
    init_widget, Host, InMemoryHost, KeyInput, MountPoint, Update, WidgetHandle, WidgetOptions,
    WidgetRegistry,
};
