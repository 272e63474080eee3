//! Integration tests for configuration resolution reports.

use std::path::Path;

use layoutcfg_catalog::{ProjectFormat, ProjectSnapshot, build_snapshot, parse_project};
use layoutcfg_cli::report::{ResolveOptions, resolve};

const PROJECT: &str = r#"
[[devices]]
name = "ADP1"
xdpi = 180.6
ydpi = 182.0

[[devices.configs]]
name = "Portrait"
qualifiers = "port-mdpi-finger-keyshidden-trackball-480x320"

[[devices.configs]]
name = "Landscape"
qualifiers = "land-mdpi-finger-keysexposed-trackball-480x320"

[[devices]]
name = "Tablet"

[[devices.configs]]
name = "Default"
qualifiers = "land-hdpi-1024x600"

[framework]
styles = [{ name = "Theme" }, { name = "Theme.Light" }]

[project]
styles = [{ name = "MyTheme", parent = "@android:Theme" }]
languages = { en = ["US", "GB"], fr = [] }
"#;

fn snapshot() -> ProjectSnapshot {
    let file = parse_project(PROJECT, ProjectFormat::Toml, Path::new("layoutcfg.toml")).unwrap();
    build_snapshot(file).unwrap()
}

fn options() -> ResolveOptions {
    ResolveOptions::default()
}

#[test]
fn resolve_report_text() {
    let report = resolve(
        &snapshot(),
        &ResolveOptions {
            config: Some("Landscape".to_string()),
            locale: Some("en_US".to_string()),
            theme: Some("MyTheme".to_string()),
            ..options()
        },
    )
    .unwrap();

    insta::assert_snapshot!(report.render_text());
    assert_eq!(format!("{report}"), report.render_text());
}

#[test]
fn defaults_pick_first_device_config_and_theme() {
    let report = resolve(&snapshot(), &options()).unwrap();

    assert_eq!(report.device.as_deref(), Some("ADP1"));
    assert_eq!(report.config.as_deref(), Some("Portrait"));
    assert_eq!(report.theme.as_deref(), Some("Theme"));
    assert!(!report.project_theme);
    assert_eq!(report.locale, None);
    assert_eq!((report.width, report.height), (320, 480));
    assert!(report.clipping);
}

#[test]
fn unlisted_locale_is_applied() {
    let report = resolve(
        &snapshot(),
        &ResolveOptions {
            device: Some("Tablet".to_string()),
            locale: Some("de_AT".to_string()),
            version: Some(10),
            clipping: Some(false),
            ..options()
        },
    )
    .unwrap();

    assert_eq!(
        report.configuration.as_deref(),
        Some("de-rAT-land-hdpi-1024x600-v10")
    );
    assert_eq!(report.locale, None);
    assert_eq!(report.density, "hdpi");
    assert_eq!((report.xdpi, report.ydpi), (240.0, 240.0));
    assert!(!report.clipping);
}

#[test]
fn unknown_names_are_errors() {
    let snapshot = snapshot();
    for options in [
        ResolveOptions {
            device: Some("Nexus".to_string()),
            ..options()
        },
        ResolveOptions {
            config: Some("Square".to_string()),
            ..options()
        },
        ResolveOptions {
            theme: Some("Missing".to_string()),
            ..options()
        },
        ResolveOptions {
            locale: Some("english".to_string()),
            ..options()
        },
    ] {
        assert!(resolve(&snapshot, &options).is_err(), "{options:?}");
    }
}

#[test]
fn report_serializes_to_json() {
    let report = resolve(&snapshot(), &options()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["device"], "ADP1");
    assert_eq!(value["qualifiers"][0]["kind"], "Orientation");
    assert_eq!(value["qualifiers"][0]["value"], "port");
    assert_eq!(value["width"], 320);
}
