//! Data models for the accessibility widget

mod patch;
mod settings;

pub use patch::PartialSettingsPatch;
pub use settings::{
    Choice, ColorFilter, ContrastLevel, LineHeight, MagnifierLevel, SettingsRecord, TextSize,
};
