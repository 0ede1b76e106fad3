pub mod common;
pub mod completions;
pub mod config;
pub mod css;
pub mod options;
pub mod reset;
pub mod set;
pub mod show;
