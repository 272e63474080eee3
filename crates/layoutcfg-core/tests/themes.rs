//! Integration tests for theme discovery.

use layoutcfg_core::{THEME_SEPARATOR, ThemeEntry, ThemeList, ThemeResolver};
use layoutcfg_model::{ResourceMap, ResourceValue, resource_map};

fn styles(values: &[(&str, Option<&str>)]) -> ResourceMap {
    resource_map(
        values
            .iter()
            .map(|(name, parent)| ResourceValue::style(*name, *parent)),
    )
}

#[test]
fn classifies_project_styles() {
    let project = styles(&[
        ("MyTheme", Some("@android:style/Theme")),
        ("MyTheme.Big", None),
        ("NotATheme", Some("@android:style/Widget")),
    ]);
    let resolver = ThemeResolver::new(&project);

    assert!(resolver.is_theme(&project["MyTheme"]));
    assert!(resolver.is_theme(&project["MyTheme.Big"]));
    assert!(!resolver.is_theme(&project["NotATheme"]));
    assert_eq!(resolver.project_themes(), vec!["MyTheme", "MyTheme.Big"]);
}

#[test]
fn framework_references_without_style_segment() {
    let framework = styles(&[("Theme", None), ("Theme.Light", None)]);
    let project = styles(&[
        ("MyTheme", Some("@android:Theme")),
        ("MyTheme.Big", None),
        ("NotATheme", Some("@android:Widget")),
    ]);
    let resolver = ThemeResolver::new(&project);

    assert!(resolver.is_theme(&project["MyTheme"]));
    assert!(resolver.is_theme(&project["MyTheme.Big"]));
    assert!(!resolver.is_theme(&project["NotATheme"]));
    assert_eq!(resolver.project_themes(), vec!["MyTheme", "MyTheme.Big"]);

    let list = ThemeList::from_styles(Some(&framework), Some(&project));
    assert_eq!(
        list.labels(),
        vec!["Theme", "Theme.Light", THEME_SEPARATOR, "MyTheme", "MyTheme.Big"]
    );
}

#[test]
fn explicit_project_parent_chain() {
    let project = styles(&[
        ("Base", Some("android:Theme.Light")),
        ("Middle", Some("@style/Base")),
        ("Leaf", Some("Middle")),
    ]);
    let resolver = ThemeResolver::new(&project);
    assert!(resolver.is_theme(&project["Leaf"]));
}

#[test]
fn self_parent_is_not_a_theme() {
    let project = styles(&[("Loop", Some("@style/Loop"))]);
    let resolver = ThemeResolver::new(&project);
    assert!(!resolver.is_theme(&project["Loop"]));
}

#[test]
fn indirect_cycle_is_not_a_theme() {
    let project = styles(&[
        ("A", Some("@style/B")),
        ("B", Some("@style/C")),
        ("C", Some("@style/A")),
        ("D", Some("@style/A")),
    ]);
    let resolver = ThemeResolver::new(&project);
    for name in ["A", "B", "C", "D"] {
        assert!(!resolver.is_theme(&project[name]), "{name} should not be a theme");
    }
    assert!(resolver.project_themes().is_empty());
}

#[test]
fn missing_parent_is_not_a_theme() {
    let project = styles(&[("Orphan", Some("@style/Gone")), ("Gone.Child", None)]);
    let resolver = ThemeResolver::new(&project);
    assert!(!resolver.is_theme(&project["Orphan"]));
    assert!(!resolver.is_theme(&project["Gone.Child"]));
}

#[test]
fn simple_value_is_not_a_theme() {
    let project = styles(&[]);
    let resolver = ThemeResolver::new(&project);
    assert!(!resolver.is_theme(&ResourceValue::simple("Theme", "x")));
}

#[test]
fn list_orders_framework_then_separator_then_project() {
    let framework = styles(&[
        ("Theme.Light", None),
        ("Theme", None),
        ("Widget", None),
    ]);
    let project = styles(&[
        ("Zeta", Some("@android:style/Theme")),
        ("Alpha", Some("@android:style/Theme.Light")),
    ]);

    let list = ThemeList::from_styles(Some(&framework), Some(&project));

    assert_eq!(
        list.labels(),
        vec!["Theme", "Theme.Light", THEME_SEPARATOR, "Alpha", "Zeta"]
    );
    assert_eq!(list.framework_count(), 2);
    assert_eq!(list.project_count(), 2);
    assert_eq!(list.get(2), Some(&ThemeEntry::Separator));
    assert!(!list.is_project_theme(1));
    assert!(list.is_project_theme(3));
    assert_eq!(list.position("Zeta"), Some(4));
    assert_eq!(list.position(THEME_SEPARATOR), None);
}

#[test]
fn no_separator_without_project_themes() {
    let framework = styles(&[("Theme", None), ("Theme.Dialog", None)]);
    let list = ThemeList::from_styles(Some(&framework), None);
    assert_eq!(list.labels(), vec!["Theme", "Theme.Dialog"]);

    let project = styles(&[("Plain", None)]);
    let list = ThemeList::from_styles(Some(&framework), Some(&project));
    assert!(!list.entries().iter().any(ThemeEntry::is_separator));
}

#[test]
fn no_separator_without_framework_themes() {
    let project = styles(&[("App", Some("@android:style/Theme"))]);
    let list = ThemeList::from_styles(None, Some(&project));
    assert_eq!(list.labels(), vec!["App"]);
    assert!(list.is_project_theme(0));
}
