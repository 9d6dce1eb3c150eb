// SPDX-License-Identifier: MPL-2.0
use iced_weather::app::config::{self, Config};
use iced_weather::app::{apply_flags, Dependencies, Flags};
use iced_weather::location::{AuthorizationState, Coordinate, LocationPlatform};
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut original = Config::default();
    original.forecast.timeout_secs = 20;
    original.location.latitude = Some(51.5);
    original.location.longitude = Some(-0.12);
    original.location.reverse_geocode = false;
    original.display.start_at_night = true;

    config::save_to_path(&original, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    assert_eq!(loaded, original);
    assert_eq!(
        loaded.location.fixed_coordinate(),
        Some(Coordinate::new(51.5, -0.12))
    );
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[display]\nstart_at_night = true\n").expect("write settings");

    let loaded = config::load_from_path(&path).expect("partial config loads");

    assert!(loaded.display.start_at_night);
    assert_eq!(loaded.forecast, Config::default().forecast);
    assert_eq!(loaded.location, Config::default().location);
}

#[test]
fn missing_directory_means_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, warning) = config::load_with_override(Some(dir.path().join("absent")));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn unreadable_file_means_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[forecast\nendpoint = ").expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn configured_platform_follows_location_section() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[location]\nenabled = false\nauthorization = \"when-in-use\"\n",
    )
    .expect("write settings");

    let loaded = config::load_from_path(&path).expect("config loads");
    let deps = Dependencies::from_config(&loaded).expect("dependencies build");

    assert_eq!(
        deps.platform.initial_authorization(),
        AuthorizationState::Restricted
    );
}

#[test]
fn cli_endpoint_override_is_validated() {
    let mut config = Config::default();
    let flags = Flags {
        forecast_url: Some("ftp://example.test/forecast".into()),
        ..Flags::default()
    };

    apply_flags(&mut config, &flags);

    assert!(Dependencies::from_config(&config).is_err());
}
