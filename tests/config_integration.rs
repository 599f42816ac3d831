// SPDX-License-Identifier: MPL-2.0
//! Integration tests for loading `settings.toml`.

use rating_card::config::{self, Config, LOAD_WARNING};
use rating_card::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults_without_warning() {
    let dir = tempdir().expect("temp dir");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn partial_file_fills_missing_sections_with_defaults() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"Dark\"\n\n[submission]\nsuccess_probability = 1.0\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert!((config.success_probability() - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.submit_delay(), Duration::from_millis(1000));
    assert_eq!(config.success_toast_duration(), Duration::from_secs(2));
    assert_eq!(config.error_toast_duration(), Duration::from_secs(4));
}

#[test]
fn out_of_range_values_are_clamped() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[submission]\ndelay_ms = 999999\nsuccess_probability = 7.5\n\n\
         [diagnostics]\nbuffer_capacity = 5\n",
    )
    .expect("write settings");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config.submit_delay(), Duration::from_millis(10_000));
    assert!((config.success_probability() - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.buffer_capacity(), 100);
}

#[test]
fn invalid_theme_falls_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"sepia\"\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
}

#[test]
fn every_section_is_read_from_disk() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"light\"\n\n\
         [submission]\ndelay_ms = 250\n\n\
         [notifications]\nsuccess_secs = 3\nerror_secs = 9\n\n\
         [diagnostics]\nbuffer_capacity = 2000\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Light);
    assert_eq!(config.submit_delay(), Duration::from_millis(250));
    assert_eq!(config.success_toast_duration(), Duration::from_secs(3));
    assert_eq!(config.error_toast_duration(), Duration::from_secs(9));
    assert_eq!(config.buffer_capacity(), 2000);
}
