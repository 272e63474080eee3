//! Integration tests for device selection and the qualifier merge.

use layoutcfg_core::{ConfigError, ConfigurationResolver, DeviceSelection, ScreenBounds};
use layoutcfg_model::{
    Density, Device, QualifierKind, QualifierSet, ResourceQualifier, ScreenOrientation,
};

fn config(text: &str) -> QualifierSet {
    QualifierSet::parse_folder_qualifiers(text).expect("valid qualifiers")
}

fn adp1() -> Device {
    Device::new("ADP1")
        .with_config("Portrait", config("port-mdpi-finger-keyshidden-qwerty-dpad-480x320"))
        .with_config("Landscape", config("land-mdpi-finger-keysexposed-qwerty-dpad-480x320"))
}

fn tablet() -> Device {
    Device::new("Tablet").with_config("Landscape", config("land-hdpi-640x480"))
}

fn selected(resolver: &mut ConfigurationResolver, device: usize) {
    assert!(matches!(
        resolver.select_device(device),
        DeviceSelection::Selected { .. }
    ));
    assert!(resolver.apply_selected_config().unwrap());
}

#[test]
fn variant_switch_keeps_only_user_choices() {
    let device = Device::new("D")
        .with_config("A", config("port-hdpi"))
        .with_config("B", config("land"));
    let mut resolver = ConfigurationResolver::new(vec![device]);
    selected(&mut resolver, 0);
    resolver.apply_locale(
        Some(ResourceQualifier::language("fr")),
        Some(ResourceQualifier::region("CA")),
    );

    resolver.select_config_variant("B").unwrap();

    let current = resolver.current_config();
    assert_eq!(current.language(), Some("fr"));
    assert_eq!(current.region(), Some("CA"));
    assert_eq!(current.screen_orientation(), Some(ScreenOrientation::Landscape));
    assert_eq!(current.pixel_density(), None);
    assert_eq!(resolver.selected_config_name(), Some("B"));
}

#[test]
fn variant_switch_replaces_device_qualifiers() {
    let device = Device::new("D")
        .with_config("first", config("ldpi"))
        .with_config("second", config("land-hdpi"));
    let mut resolver = ConfigurationResolver::new(vec![device]);
    selected(&mut resolver, 0);
    resolver.apply_locale(
        Some(ResourceQualifier::language("en")),
        Some(ResourceQualifier::region("GB")),
    );
    resolver.apply_version(Some(7));
    assert_eq!(resolver.current_config().pixel_density(), Some(Density::Low));

    resolver.select_config_variant("second").unwrap();

    assert_eq!(
        resolver.current_config(),
        &config("en-rGB-land-hdpi-v7")
    );
}

#[test]
fn absent_user_choice_clears_variant_value() {
    let device = Device::new("D").with_config("A", config("en-rUS-port-v4"));
    let mut resolver = ConfigurationResolver::new(vec![device]);
    resolver.select_device(0);

    resolver.select_config_variant("A").unwrap();

    let current = resolver.current_config();
    assert!(current.get(QualifierKind::Language).is_none());
    assert!(current.get(QualifierKind::Region).is_none());
    assert!(current.get(QualifierKind::Version).is_none());
    assert_eq!(current.screen_orientation(), Some(ScreenOrientation::Portrait));
}

#[test]
fn locale_survives_device_switch() {
    let mut resolver = ConfigurationResolver::new(vec![adp1(), tablet()]);
    selected(&mut resolver, 0);
    let mut current = QualifierSet::new();
    resolver.copy_current_config(&mut current);
    assert_eq!(current.screen_orientation(), Some(ScreenOrientation::Portrait));

    resolver.apply_locale(Some(ResourceQualifier::language("de")), None);
    selected(&mut resolver, 1);

    assert_eq!(resolver.current_config().language(), Some("de"));
    assert_eq!(resolver.current_config().pixel_density(), Some(Density::High));
}

#[test]
fn unknown_variant_is_not_found() {
    let mut resolver = ConfigurationResolver::new(vec![adp1()]);
    selected(&mut resolver, 0);
    let before = resolver.current_config().clone();

    let err = resolver.select_config_variant("Square").unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { ref device, ref config }
        if device == "ADP1" && config == "Square"));
    assert_eq!(resolver.current_config(), &before);
}

#[test]
fn variant_index_out_of_range() {
    let mut resolver = ConfigurationResolver::new(vec![adp1()]);
    resolver.select_device(0);
    assert!(matches!(
        resolver.select_config_variant_at(5),
        Err(ConfigError::IndexOutOfRange { what: "config", index: 5, len: 2 })
    ));
}

#[test]
fn past_the_catalog_requests_custom_device() {
    let mut resolver = ConfigurationResolver::new(vec![adp1()]);
    selected(&mut resolver, 0);
    assert_eq!(
        resolver.select_device(1),
        DeviceSelection::RequestCustomDeviceCreation
    );
    assert_eq!(resolver.current_device_index(), Some(0));
}

#[test]
fn reload_reselects_by_identity() {
    let mut resolver = ConfigurationResolver::new(vec![adp1(), tablet()]);
    selected(&mut resolver, 1);

    let selection = resolver.reload_devices(vec![Device::new("Custom"), adp1(), tablet()]);

    assert_eq!(
        selection,
        Some(DeviceSelection::Selected {
            index: 2,
            name: "Tablet".to_string()
        })
    );
}

#[test]
fn reload_falls_back_to_first_device() {
    let mut resolver = ConfigurationResolver::new(vec![adp1(), tablet()]);
    selected(&mut resolver, 1);

    let selection = resolver.reload_devices(vec![adp1()]);

    assert_eq!(
        selection,
        Some(DeviceSelection::Selected {
            index: 0,
            name: "ADP1".to_string()
        })
    );
    assert_eq!(resolver.config_names(), ["Portrait", "Landscape"]);
}

#[test]
fn reload_with_empty_catalog_clears_selection() {
    let mut resolver = ConfigurationResolver::new(vec![adp1()]);
    selected(&mut resolver, 0);
    assert_eq!(resolver.reload_devices(Vec::new()), None);
    assert!(resolver.current_device().is_none());
    assert!(resolver.config_names().is_empty());
}

#[test]
fn density_never_reports_nodpi() {
    let device = Device::new("D")
        .with_config("none", config("nodpi"))
        .with_config("unset", config("port"))
        .with_config("low", config("ldpi"));
    let mut resolver = ConfigurationResolver::new(vec![device]);
    resolver.select_device(0);

    resolver.select_config_variant("none").unwrap();
    assert_eq!(resolver.density(), Density::Medium);
    resolver.select_config_variant("unset").unwrap();
    assert_eq!(resolver.density(), Density::Medium);
    resolver.select_config_variant("low").unwrap();
    assert_eq!(resolver.density(), Density::Low);
}

#[test]
fn screen_bounds_follow_orientation() {
    let device = Device::new("D")
        .with_config("land", config("land-640x480"))
        .with_config("port", config("port-640x480"))
        .with_config("square", config("square-640x480"))
        .with_config("default", config(""));
    let mut resolver = ConfigurationResolver::new(vec![device]);
    resolver.select_device(0);

    let cases = [
        ("land", ScreenBounds { width: 640, height: 480 }),
        ("port", ScreenBounds { width: 480, height: 640 }),
        ("square", ScreenBounds { width: 640, height: 640 }),
        ("default", ScreenBounds { width: 320, height: 480 }),
    ];
    for (name, expected) in cases {
        resolver.select_config_variant(name).unwrap();
        assert_eq!(resolver.screen_bounds(), expected, "variant {name}");
    }
}

#[test]
fn dpi_falls_back_to_density() {
    let devices = vec![
        Device::new("Measured")
            .with_config("only", config("hdpi"))
            .with_dpi(254.0, 252.5),
        Device::new("Unmeasured")
            .with_config("only", config("hdpi"))
            .with_dpi(f32::NAN, f32::NAN),
        Device::new("Unset").with_config("only", config("ldpi")),
        Device::new("Unbounded")
            .with_config("only", config("port-hdpi"))
            .with_dpi(f32::INFINITY, f32::NEG_INFINITY),
    ];
    let mut resolver = ConfigurationResolver::new(devices);

    selected(&mut resolver, 0);
    assert_eq!((resolver.x_dpi(), resolver.y_dpi()), (254.0, 252.5));
    selected(&mut resolver, 1);
    assert_eq!((resolver.x_dpi(), resolver.y_dpi()), (240.0, 240.0));
    selected(&mut resolver, 2);
    assert_eq!((resolver.x_dpi(), resolver.y_dpi()), (120.0, 120.0));
    selected(&mut resolver, 3);
    assert_eq!((resolver.x_dpi(), resolver.y_dpi()), (240.0, 240.0));
}
