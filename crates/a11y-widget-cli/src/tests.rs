use std::path::{Path, PathBuf};

use a11y_widget_core::effects::{class, property};
use a11y_widget_core::{
    Locale, MagnifierLevel, SettingField, SettingsRecord, TextSize, STORAGE_KEY,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::cli::CompletionShell;
use crate::cli_config::CliConfig;
use crate::commands::common::{
    build_candidate, format_state_lines, open_session, parse_assignment, SessionOptions,
};
use crate::commands::completions::render_completions;
use crate::commands::config::update_config;
use crate::commands::css::root_presentation;
use crate::commands::options::format_control_lines;
use crate::commands::reset::reset_settings;
use crate::commands::set::apply_settings;
use crate::error::CliError;

fn session_in(dir: &Path) -> SessionOptions {
    SessionOptions {
        state_path: dir.join(format!("{STORAGE_KEY}.json")),
        locale: Locale::En,
    }
}

fn assignments(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|item| (*item).to_string()).collect()
}

#[test]
fn parse_assignment_reads_json_and_plain_values() {
    assert_eq!(
        parse_assignment("highContrast=true").unwrap(),
        (SettingField::HighContrast, Value::Bool(true))
    );
    assert_eq!(
        parse_assignment("textSize=large").unwrap(),
        (SettingField::TextSize, json!("large"))
    );
    assert_eq!(
        parse_assignment(" lineHeight = \"2\" ").unwrap(),
        (SettingField::LineHeight, json!("2"))
    );
}

#[test]
fn parse_assignment_keeps_numeric_text_for_selects() {
    assert_eq!(
        parse_assignment("magnifier=125").unwrap(),
        (SettingField::Magnifier, json!("125"))
    );
    assert_eq!(
        parse_assignment("reduceMotion=1").unwrap(),
        (SettingField::ReduceMotion, json!(1))
    );
}

#[test]
fn parse_assignment_rejects_malformed_input() {
    assert!(matches!(
        parse_assignment("highContrast"),
        Err(CliError::InvalidAssignment(_))
    ));
    assert!(matches!(
        parse_assignment("=true"),
        Err(CliError::InvalidAssignment(_))
    ));
    assert!(matches!(
        parse_assignment("fontFamily=serif"),
        Err(CliError::UnknownSetting(key)) if key == "fontFamily"
    ));
}

#[test]
fn build_candidate_prefers_raw_patch() {
    let candidate = build_candidate(&[], Some(r#"{"magnifier":"150"}"#)).unwrap();
    assert_eq!(candidate, json!({ "magnifier": "150" }));
}

#[test]
fn build_candidate_requires_input() {
    assert!(matches!(build_candidate(&[], None), Err(CliError::EmptyPatch)));
    assert!(matches!(
        build_candidate(&[], Some("{not json")),
        Err(CliError::Serialization(_))
    ));
}

#[test]
fn set_persists_valid_fields_and_show_reads_them_back() {
    let dir = tempfile::tempdir().unwrap();
    let options = session_in(dir.path());

    let record = apply_settings(
        &options,
        &assignments(&["textSize=xl", "magnifier=125", "colorFilter=purple"]),
        None,
    )
    .unwrap()
    .unwrap();
    assert_eq!(record.text_size, TextSize::ExtraLarge);
    assert_eq!(record.magnifier, MagnifierLevel::Medium);

    let session = open_session(&options).unwrap();
    assert_eq!(session.handle.get_state(), record);

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(&options.state_path).unwrap()).unwrap();
    assert_eq!(stored["textSize"], json!("xl"));
    assert_eq!(stored["colorFilter"], json!("none"));
}

#[test]
fn set_without_valid_fields_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let options = session_in(dir.path());

    let applied = apply_settings(&options, &[], Some(r#"{"textSize":"huge"}"#)).unwrap();
    assert_eq!(applied, None);
    assert!(!options.state_path.exists());
}

#[test]
fn reset_restores_defaults_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = session_in(dir.path());
    apply_settings(&options, &assignments(&["highContrast=true"]), None).unwrap();

    reset_settings(&options).unwrap();

    let session = open_session(&options).unwrap();
    assert_eq!(session.handle.get_state(), SettingsRecord::default());
}

/// A state path whose parent is a regular file, so every write fails.
fn blocked_session(dir: &Path) -> SessionOptions {
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    SessionOptions {
        state_path: blocker.join("state.json"),
        locale: Locale::En,
    }
}

#[test]
fn set_fails_when_the_state_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let options = blocked_session(dir.path());

    let result = apply_settings(&options, &assignments(&["highContrast=true"]), None);
    assert!(matches!(result, Err(CliError::NotSaved(path)) if path == options.state_path));

    let session = open_session(&options).unwrap();
    assert!(!session.handle.get_state().high_contrast);
}

#[test]
fn reset_fails_when_the_state_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let options = blocked_session(dir.path());

    assert!(matches!(
        reset_settings(&options),
        Err(CliError::NotSaved(_))
    ));
}

#[test]
fn set_without_valid_fields_succeeds_on_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let options = blocked_session(dir.path());

    let applied = apply_settings(&options, &[], Some(r#"{"magnifier":"300"}"#)).unwrap();
    assert_eq!(applied, None);
}

#[test]
fn malformed_state_file_reads_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let options = session_in(dir.path());
    std::fs::write(&options.state_path, "not json").unwrap();

    let session = open_session(&options).unwrap();
    assert_eq!(session.handle.get_state(), SettingsRecord::default());
}

#[test]
fn css_reflects_stored_settings() {
    let dir = tempfile::tempdir().unwrap();
    let options = session_in(dir.path());
    apply_settings(
        &options,
        &assignments(&["highContrast=true", "magnifier=150"]),
        None,
    )
    .unwrap();

    let root = root_presentation(&options).unwrap();
    assert!(root.has_class(class::HIGH_CONTRAST));
    assert!(root.has_class(class::MAGNIFIER_ACTIVE));
    assert_eq!(root.property(property::MAGNIFIER_SCALE), Some("1.5"));
    assert!(root.to_css().starts_with("/* class=\""));
}

#[test]
fn state_lines_follow_panel_order_with_labels() {
    let lines = format_state_lines(&SettingsRecord::default(), Locale::En.strings());
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("highContrast"));
    assert!(lines[0].contains("off"));
    assert!(lines[2].contains("default (Default)"));
}

#[test]
fn control_lines_mark_current_values() {
    let record = SettingsRecord {
        text_size: TextSize::Large,
        ..SettingsRecord::default()
    };
    let controls = a11y_widget_core::widget::controls(Locale::En.strings());
    let lines = format_control_lines(&controls, &record);

    assert!(lines.iter().any(|line| line.starts_with("  * large")));
    assert!(lines.iter().any(|line| line.starts_with("  [ ] true|false")));
}

#[test]
fn update_config_validates_locale() {
    let updated = update_config(CliConfig::default(), Some(" EN "), None, false).unwrap();
    assert_eq!(updated.locale.as_deref(), Some("en"));

    assert!(matches!(
        update_config(CliConfig::default(), Some("de"), None, false),
        Err(CliError::Config(_))
    ));
}

#[test]
fn update_config_sets_and_clears_state_path() {
    let with_path = update_config(
        CliConfig::default(),
        None,
        Some(PathBuf::from("/tmp/state.json")),
        false,
    )
    .unwrap();
    assert_eq!(with_path.state_path, Some(PathBuf::from("/tmp/state.json")));

    let cleared = update_config(with_path, None, None, true).unwrap();
    assert_eq!(cleared.state_path, None);
}

#[test]
fn completions_use_binary_name() {
    for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
        let script = String::from_utf8(render_completions(shell)).unwrap();
        assert!(script.contains("a11y-widget"));
    }
}

#[test]
fn locale_footer_lists_shortcut_then_storage_notice() {
    assert_eq!(
        Locale::Tr.strings().footer_lines(),
        ["Klavye kısayolu: Ctrl + Alt + A", "Ayarlar bu tarayıcıda saklanır."]
    );
}
