//! Device and device-config selection, and the qualifier merge.
//!
//! The effective [`QualifierSet`] has a single mutation path for device
//! changes: [`ConfigurationResolver::select_config_variant`]. It replaces the
//! set with the device variant and then re-applies the user-chosen language,
//! region and version, so device-derived qualifiers never survive a variant
//! switch while user choices always do.

use tracing::{debug, error, info};

use layoutcfg_model::{
    Density, Device, QualifierKind, QualifierSet, ResourceQualifier, ScreenDimension,
    ScreenOrientation,
};

use crate::error::{ConfigError, Result};

/// Outcome of a device selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelection {
    Selected { index: usize, name: String },
    /// The "Custom..." slot (or any index past the catalog) was chosen. The
    /// host creates and saves the device, then reloads the catalog.
    RequestCustomDeviceCreation,
}

/// Rendered screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {
    devices: Vec<Device>,
    current_device: Option<usize>,
    config_names: Vec<String>,
    current_config_name: Option<usize>,
    current: QualifierSet,
}

impl ConfigurationResolver {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Device names in catalog order. The "Custom..." slot sits at
    /// `devices().len()`.
    pub fn device_names(&self) -> Vec<&str> {
        self.devices.iter().map(|device| device.name.as_str()).collect()
    }

    pub fn current_device(&self) -> Option<&Device> {
        self.current_device.and_then(|index| self.devices.get(index))
    }

    pub fn current_device_index(&self) -> Option<usize> {
        self.current_device
    }

    pub fn config_names(&self) -> &[String] {
        &self.config_names
    }

    pub fn selected_config_name(&self) -> Option<&str> {
        self.current_config_name
            .and_then(|index| self.config_names.get(index))
            .map(String::as_str)
    }

    /// UI hint: variant selection is only useful with more than one variant.
    pub fn is_config_selection_enabled(&self) -> bool {
        self.config_names.len() > 1
    }

    /// Selects `devices[index]` and resets the variant list to its configs,
    /// the first one selected. The effective configuration is not touched
    /// until a variant is applied.
    pub fn select_device(&mut self, index: usize) -> DeviceSelection {
        let Some(device) = self.devices.get(index) else {
            debug!(index, "custom device slot selected");
            return DeviceSelection::RequestCustomDeviceCreation;
        };
        let name = device.name.clone();
        self.config_names = device.config_names();
        self.current_config_name = if self.config_names.is_empty() {
            None
        } else {
            Some(0)
        };
        self.current_device = Some(index);
        debug!(device = %name, configs = self.config_names.len(), "device selected");
        DeviceSelection::Selected { index, name }
    }

    /// Replaces the catalog and re-selects the previously current device by
    /// identity, or the first device. Returns `None` for an empty catalog.
    pub fn reload_devices(&mut self, devices: Vec<Device>) -> Option<DeviceSelection> {
        let previous = self.current_device().cloned();
        self.devices = devices;
        info!(count = self.devices.len(), "device catalog loaded");
        if self.devices.is_empty() {
            self.current_device = None;
            self.config_names.clear();
            self.current_config_name = None;
            return None;
        }
        let index = previous
            .and_then(|previous| {
                self.devices
                    .iter()
                    .position(|device| device.is_same_device(&previous))
            })
            .unwrap_or(0);
        Some(self.select_device(index))
    }

    /// Applies the selected variant of the current device. Returns `false`
    /// when there is no device or no variant.
    pub fn apply_selected_config(&mut self) -> Result<bool> {
        match self.selected_config_name().map(str::to_string) {
            Some(name) => self.select_config_variant(&name),
            None => Ok(false),
        }
    }

    pub fn select_config_variant_at(&mut self, index: usize) -> Result<bool> {
        let name = self
            .config_names
            .get(index)
            .cloned()
            .ok_or(ConfigError::IndexOutOfRange {
                what: "config",
                index,
                len: self.config_names.len(),
            })?;
        self.select_config_variant(&name)
    }

    /// Merges the named variant of the current device into the effective
    /// configuration, keeping language, region and version.
    ///
    /// Returns `Ok(false)` without a current device.
    pub fn select_config_variant(&mut self, name: &str) -> Result<bool> {
        let Some(device) = self.current_device() else {
            return Ok(false);
        };
        let Some(variant) = device.config(name) else {
            error!(device = %device.name, config = name, "unknown device config");
            return Err(ConfigError::NotFound {
                device: device.name.clone(),
                config: name.to_string(),
            });
        };
        let variant = variant.clone();

        let preserved: Vec<(QualifierKind, Option<ResourceQualifier>)> = QualifierKind::USER_CHOSEN
            .iter()
            .map(|&kind| (kind, self.current.get(kind).cloned()))
            .collect();
        self.current.replace_all(&variant);
        for (kind, qualifier) in preserved {
            self.current.set(kind, qualifier);
        }

        self.current_config_name = self.config_names.iter().position(|n| n == name);
        debug!(config = name, current = ?self.current.to_display_string(), "device config applied");
        Ok(true)
    }

    /// Sets language and region together. `None` clears the qualifier.
    pub fn apply_locale(
        &mut self,
        language: Option<ResourceQualifier>,
        region: Option<ResourceQualifier>,
    ) {
        self.current.set(QualifierKind::Language, language);
        self.current.set(QualifierKind::Region, region);
    }

    /// Sets the platform version. `None` clears it.
    pub fn apply_version(&mut self, version: Option<u32>) {
        self.current
            .set(QualifierKind::Version, version.map(ResourceQualifier::Version));
    }

    pub fn current_config(&self) -> &QualifierSet {
        &self.current
    }

    /// Copies the effective configuration into `target`.
    pub fn copy_current_config(&self, target: &mut QualifierSet) {
        target.replace_all(&self.current);
    }

    /// Current density. Never `NoDpi`; falls back to `Medium`.
    pub fn density(&self) -> Density {
        match self.current.pixel_density() {
            Some(density) if density != Density::NoDpi => density,
            _ => Density::Medium,
        }
    }

    pub fn x_dpi(&self) -> f32 {
        self.current_device()
            .and_then(Device::finite_xdpi)
            .unwrap_or_else(|| self.density().dpi_value() as f32)
    }

    pub fn y_dpi(&self) -> f32 {
        self.current_device()
            .and_then(Device::finite_ydpi)
            .unwrap_or_else(|| self.density().dpi_value() as f32)
    }

    pub fn screen_bounds(&self) -> ScreenBounds {
        let orientation = self
            .current
            .screen_orientation()
            .unwrap_or(ScreenOrientation::Portrait);
        let ScreenDimension { size1, size2 } = self.current.screen_dimension().unwrap_or_default();
        let (width, height) = match orientation {
            ScreenOrientation::Portrait => (size2, size1),
            ScreenOrientation::Landscape => (size1, size2),
            ScreenOrientation::Square => (size1, size1),
        };
        ScreenBounds { width, height }
    }
}
