//! Typed resource qualifiers.
//!
//! A [`ResourceQualifier`] is one value of one [`QualifierKind`]. The kind
//! order below is the order in which segments appear in a resource folder
//! name, so `values-en-rUS-land-hdpi` lists language, region, orientation and
//! density in that order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{
    Density, KeyboardState, NavigationMethod, ScreenDimension, ScreenOrientation,
    TextInputMethod, TouchScreen,
};

/// Language value of the "no locale constraint" sentinel.
pub const LOCALE_SENTINEL: &str = "__";

/// Dimension of resource configuration. Declaration order is folder order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualifierKind {
    CountryCode,
    NetworkCode,
    Language,
    Region,
    ScreenOrientation,
    PixelDensity,
    TouchScreen,
    KeyboardState,
    TextInputMethod,
    NavigationMethod,
    ScreenDimension,
    Version,
}

impl QualifierKind {
    /// All kinds, in folder order.
    pub const ALL: [QualifierKind; 12] = [
        QualifierKind::CountryCode,
        QualifierKind::NetworkCode,
        QualifierKind::Language,
        QualifierKind::Region,
        QualifierKind::ScreenOrientation,
        QualifierKind::PixelDensity,
        QualifierKind::TouchScreen,
        QualifierKind::KeyboardState,
        QualifierKind::TextInputMethod,
        QualifierKind::NavigationMethod,
        QualifierKind::ScreenDimension,
        QualifierKind::Version,
    ];

    /// Kinds chosen by the user rather than by the device. These survive a
    /// device-config switch.
    pub const USER_CHOSEN: [QualifierKind; 3] = [
        QualifierKind::Language,
        QualifierKind::Region,
        QualifierKind::Version,
    ];

    /// Returns the display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualifierKind::CountryCode => "Mobile Country Code",
            QualifierKind::NetworkCode => "Mobile Network Code",
            QualifierKind::Language => "Language",
            QualifierKind::Region => "Region",
            QualifierKind::ScreenOrientation => "Orientation",
            QualifierKind::PixelDensity => "Pixel Density",
            QualifierKind::TouchScreen => "Touch Screen",
            QualifierKind::KeyboardState => "Keyboard",
            QualifierKind::TextInputMethod => "Text Input",
            QualifierKind::NavigationMethod => "Navigation",
            QualifierKind::ScreenDimension => "Dimension",
            QualifierKind::Version => "Version",
        }
    }
}

impl fmt::Display for QualifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed qualifier value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResourceQualifier {
    CountryCode(u16),
    NetworkCode(u16),
    /// Two-letter ISO 639-1 language code, lowercase.
    Language(String),
    /// Two-letter ISO 3166-1 region code, uppercase, without the `r` prefix.
    Region(String),
    ScreenOrientation(ScreenOrientation),
    PixelDensity(Density),
    TouchScreen(TouchScreen),
    KeyboardState(KeyboardState),
    TextInputMethod(TextInputMethod),
    NavigationMethod(NavigationMethod),
    ScreenDimension(ScreenDimension),
    /// Platform API level.
    Version(u32),
}

impl ResourceQualifier {
    pub fn language(value: impl Into<String>) -> Self {
        ResourceQualifier::Language(value.into())
    }

    pub fn region(value: impl Into<String>) -> Self {
        ResourceQualifier::Region(value.into())
    }

    pub fn kind(&self) -> QualifierKind {
        match self {
            ResourceQualifier::CountryCode(_) => QualifierKind::CountryCode,
            ResourceQualifier::NetworkCode(_) => QualifierKind::NetworkCode,
            ResourceQualifier::Language(_) => QualifierKind::Language,
            ResourceQualifier::Region(_) => QualifierKind::Region,
            ResourceQualifier::ScreenOrientation(_) => QualifierKind::ScreenOrientation,
            ResourceQualifier::PixelDensity(_) => QualifierKind::PixelDensity,
            ResourceQualifier::TouchScreen(_) => QualifierKind::TouchScreen,
            ResourceQualifier::KeyboardState(_) => QualifierKind::KeyboardState,
            ResourceQualifier::TextInputMethod(_) => QualifierKind::TextInputMethod,
            ResourceQualifier::NavigationMethod(_) => QualifierKind::NavigationMethod,
            ResourceQualifier::ScreenDimension(_) => QualifierKind::ScreenDimension,
            ResourceQualifier::Version(_) => QualifierKind::Version,
        }
    }

    /// Returns the segment this qualifier contributes to a folder name.
    pub fn folder_segment(&self) -> String {
        match self {
            ResourceQualifier::CountryCode(code) => format!("mcc{code}"),
            ResourceQualifier::NetworkCode(code) => format!("mnc{code}"),
            ResourceQualifier::Language(language) => language.clone(),
            ResourceQualifier::Region(region) => format!("r{region}"),
            ResourceQualifier::ScreenOrientation(value) => value.to_string(),
            ResourceQualifier::PixelDensity(value) => value.to_string(),
            ResourceQualifier::TouchScreen(value) => value.to_string(),
            ResourceQualifier::KeyboardState(value) => value.to_string(),
            ResourceQualifier::TextInputMethod(value) => value.to_string(),
            ResourceQualifier::NavigationMethod(value) => value.to_string(),
            ResourceQualifier::ScreenDimension(value) => value.to_string(),
            ResourceQualifier::Version(level) => format!("v{level}"),
        }
    }

    /// Parses one folder segment, trying every kind in folder order.
    pub fn from_folder_segment(segment: &str) -> Option<Self> {
        if let Some(code) = numeric_suffix(segment, "mcc") {
            return u16::try_from(code).ok().map(ResourceQualifier::CountryCode);
        }
        if let Some(code) = numeric_suffix(segment, "mnc") {
            return u16::try_from(code).ok().map(ResourceQualifier::NetworkCode);
        }
        if is_language_code(segment) {
            return Some(ResourceQualifier::Language(segment.to_string()));
        }
        if let Some(region) = segment.strip_prefix('r')
            && is_region_code(region)
        {
            return Some(ResourceQualifier::Region(region.to_string()));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::ScreenOrientation(value));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::PixelDensity(value));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::TouchScreen(value));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::KeyboardState(value));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::TextInputMethod(value));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::NavigationMethod(value));
        }
        if let Ok(value) = segment.parse() {
            return Some(ResourceQualifier::ScreenDimension(value));
        }
        numeric_suffix(segment, "v").map(ResourceQualifier::Version)
    }
}

impl fmt::Display for ResourceQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.folder_segment())
    }
}

/// Returns true for a two-letter lowercase language code.
pub fn is_language_code(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_lowercase())
}

/// Returns true for a two-letter uppercase region code.
pub fn is_region_code(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_uppercase())
}

fn numeric_suffix(segment: &str, prefix: &str) -> Option<u32> {
    let digits = segment.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_parse_to_expected_kinds() {
        let cases = [
            ("mcc310", QualifierKind::CountryCode),
            ("mnc4", QualifierKind::NetworkCode),
            ("en", QualifierKind::Language),
            ("rUS", QualifierKind::Region),
            ("land", QualifierKind::ScreenOrientation),
            ("nodpi", QualifierKind::PixelDensity),
            ("finger", QualifierKind::TouchScreen),
            ("keyssoft", QualifierKind::KeyboardState),
            ("qwerty", QualifierKind::TextInputMethod),
            ("trackball", QualifierKind::NavigationMethod),
            ("480x320", QualifierKind::ScreenDimension),
            ("v4", QualifierKind::Version),
        ];
        for (segment, kind) in cases {
            let qualifier = ResourceQualifier::from_folder_segment(segment)
                .unwrap_or_else(|| panic!("segment {segment} should parse"));
            assert_eq!(qualifier.kind(), kind, "segment {segment}");
            assert_eq!(qualifier.folder_segment(), segment);
        }
    }

    #[test]
    fn rejects_unknown_segments() {
        assert!(ResourceQualifier::from_folder_segment("EN").is_none());
        assert!(ResourceQualifier::from_folder_segment("rusa").is_none());
        assert!(ResourceQualifier::from_folder_segment("v").is_none());
        assert!(ResourceQualifier::from_folder_segment("mcc99999").is_none());
        assert!(ResourceQualifier::from_folder_segment("xlarge").is_none());
    }

    #[test]
    fn user_chosen_kinds_are_language_region_version() {
        assert_eq!(
            QualifierKind::USER_CHOSEN,
            [
                QualifierKind::Language,
                QualifierKind::Region,
                QualifierKind::Version
            ]
        );
    }
}
