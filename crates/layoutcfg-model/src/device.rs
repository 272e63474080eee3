//! Layout devices and their named configuration variants.

use serde::Serialize;

use crate::qualifier_set::QualifierSet;

/// One named qualifier preset of a device, e.g. "Portrait".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceConfig {
    pub name: String,
    pub qualifiers: QualifierSet,
}

impl DeviceConfig {
    pub fn new(name: impl Into<String>, qualifiers: QualifierSet) -> Self {
        Self {
            name: name.into(),
            qualifiers,
        }
    }
}

/// A read-only device snapshot from the device catalog.
///
/// Devices are identified by name. `xdpi`/`ydpi` are optional; an absent or
/// NaN value means the dpi is derived from the density qualifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub name: String,
    pub configs: Vec<DeviceConfig>,
    pub xdpi: Option<f32>,
    pub ydpi: Option<f32>,
}

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configs: Vec::new(),
            xdpi: None,
            ydpi: None,
        }
    }

    pub fn with_config(mut self, name: impl Into<String>, qualifiers: QualifierSet) -> Self {
        self.configs.push(DeviceConfig::new(name, qualifiers));
        self
    }

    pub fn with_dpi(mut self, xdpi: f32, ydpi: f32) -> Self {
        self.xdpi = Some(xdpi);
        self.ydpi = Some(ydpi);
        self
    }

    pub fn config(&self, name: &str) -> Option<&QualifierSet> {
        self.configs
            .iter()
            .find(|config| config.name == name)
            .map(|config| &config.qualifiers)
    }

    /// Variant names in catalog order.
    pub fn config_names(&self) -> Vec<String> {
        self.configs.iter().map(|config| config.name.clone()).collect()
    }

    /// The horizontal dpi if it is set and finite.
    pub fn finite_xdpi(&self) -> Option<f32> {
        self.xdpi.filter(|dpi| dpi.is_finite())
    }

    /// The vertical dpi if it is set and finite.
    pub fn finite_ydpi(&self) -> Option<f32> {
        self.ydpi.filter(|dpi| dpi.is_finite())
    }

    pub fn is_same_device(&self, other: &Device) -> bool {
        self.name == other.name
    }
}
