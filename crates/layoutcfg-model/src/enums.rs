//! Value enumerations for the typed resource qualifiers.
//!
//! Each enum knows the segment it contributes to a resource folder name
//! (`land`, `hdpi`, `keyshidden`, ...) and parses back from it.
//!
//! # Reference
//!
//! Android "Providing Resources", table 2 (configuration qualifier names),
//! as supported by platform versions 1.5 to 1.6.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen pixel density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// `ldpi`, 120 dpi.
    Low,
    /// `mdpi`, 160 dpi. The fallback density.
    Medium,
    /// `hdpi`, 240 dpi.
    High,
    /// `nodpi`: bitmaps are not scaled. Never a valid current density.
    #[serde(rename = "nodpi")]
    NoDpi,
}

impl Density {
    /// Returns the folder segment (`ldpi`, `mdpi`, `hdpi`, `nodpi`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Low => "ldpi",
            Density::Medium => "mdpi",
            Density::High => "hdpi",
            Density::NoDpi => "nodpi",
        }
    }

    /// Returns the nominal dots-per-inch of the bucket.
    pub fn dpi_value(&self) -> u32 {
        match self {
            Density::Low => 120,
            Density::Medium => 160,
            Density::High => 240,
            Density::NoDpi => 0,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ldpi" => Ok(Density::Low),
            "mdpi" => Ok(Density::Medium),
            "hdpi" => Ok(Density::High),
            "nodpi" => Ok(Density::NoDpi),
            _ => Err(format!("Unknown density: {s}")),
        }
    }
}

/// Screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenOrientation {
    Portrait,
    Landscape,
    Square,
}

impl ScreenOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenOrientation::Portrait => "port",
            ScreenOrientation::Landscape => "land",
            ScreenOrientation::Square => "square",
        }
    }
}

impl fmt::Display for ScreenOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "port" => Ok(ScreenOrientation::Portrait),
            "land" => Ok(ScreenOrientation::Landscape),
            "square" => Ok(ScreenOrientation::Square),
            _ => Err(format!("Unknown screen orientation: {s}")),
        }
    }
}

/// Touch screen type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchScreen {
    NoTouch,
    Stylus,
    Finger,
}

impl TouchScreen {
    pub fn as_str(&self) -> &'static str {
        match self {
            TouchScreen::NoTouch => "notouch",
            TouchScreen::Stylus => "stylus",
            TouchScreen::Finger => "finger",
        }
    }
}

impl fmt::Display for TouchScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TouchScreen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "notouch" => Ok(TouchScreen::NoTouch),
            "stylus" => Ok(TouchScreen::Stylus),
            "finger" => Ok(TouchScreen::Finger),
            _ => Err(format!("Unknown touch screen type: {s}")),
        }
    }
}

/// Hardware keyboard availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardState {
    Exposed,
    Hidden,
    Soft,
}

impl KeyboardState {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardState::Exposed => "keysexposed",
            KeyboardState::Hidden => "keyshidden",
            KeyboardState::Soft => "keyssoft",
        }
    }
}

impl fmt::Display for KeyboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyboardState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keysexposed" => Ok(KeyboardState::Exposed),
            "keyshidden" => Ok(KeyboardState::Hidden),
            "keyssoft" => Ok(KeyboardState::Soft),
            _ => Err(format!("Unknown keyboard state: {s}")),
        }
    }
}

/// Primary text input method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputMethod {
    NoKey,
    Qwerty,
    TwelveKey,
}

impl TextInputMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextInputMethod::NoKey => "nokeys",
            TextInputMethod::Qwerty => "qwerty",
            TextInputMethod::TwelveKey => "12key",
        }
    }
}

impl fmt::Display for TextInputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextInputMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nokeys" => Ok(TextInputMethod::NoKey),
            "qwerty" => Ok(TextInputMethod::Qwerty),
            "12key" => Ok(TextInputMethod::TwelveKey),
            _ => Err(format!("Unknown text input method: {s}")),
        }
    }
}

/// Primary non-touch navigation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMethod {
    NoNav,
    Dpad,
    Trackball,
    Wheel,
}

impl NavigationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationMethod::NoNav => "nonav",
            NavigationMethod::Dpad => "dpad",
            NavigationMethod::Trackball => "trackball",
            NavigationMethod::Wheel => "wheel",
        }
    }
}

impl fmt::Display for NavigationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nonav" => Ok(NavigationMethod::NoNav),
            "dpad" => Ok(NavigationMethod::Dpad),
            "trackball" => Ok(NavigationMethod::Trackball),
            "wheel" => Ok(NavigationMethod::Wheel),
            _ => Err(format!("Unknown navigation method: {s}")),
        }
    }
}

/// Screen dimension in device-size order (`size1` x `size2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenDimension {
    pub size1: u32,
    pub size2: u32,
}

impl ScreenDimension {
    pub fn new(size1: u32, size2: u32) -> Self {
        Self { size1, size2 }
    }
}

impl Default for ScreenDimension {
    fn default() -> Self {
        Self::new(480, 320)
    }
}

impl fmt::Display for ScreenDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size1, self.size2)
    }
}

impl FromStr for ScreenDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .trim()
            .split_once('x')
            .ok_or_else(|| format!("Unknown screen dimension: {s}"))?;
        let parse = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| format!("Unknown screen dimension: {s}"))
        };
        Ok(Self::new(parse(first)?, parse(second)?))
    }
}
