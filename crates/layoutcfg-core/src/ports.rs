//! Collaborator contracts consumed by the controller.
//!
//! The host editor owns the resource repositories, the device catalog and the
//! notification sink. Everything handed in through [`ResourceProvider`] is a
//! read-only snapshot and is fetched again on every rebuild.

use std::collections::{BTreeMap, BTreeSet};

use layoutcfg_model::{ConfiguredResources, Device};

/// Locale inventory of a framework or project resource repository.
pub trait ResourceRepository {
    /// Languages with at least one resource folder, ascending.
    fn languages(&self) -> BTreeSet<String>;

    /// Regions available for `language`, ascending.
    fn regions(&self, language: &str) -> BTreeSet<String>;
}

impl ResourceRepository for BTreeMap<String, BTreeSet<String>> {
    fn languages(&self) -> BTreeSet<String> {
        self.keys().cloned().collect()
    }

    fn regions(&self, language: &str) -> BTreeSet<String> {
        self.get(language).cloned().unwrap_or_default()
    }
}

/// Source of resources and devices. Any accessor may return `None` when the
/// edited file is not linked to a project or the SDK is not loaded yet.
pub trait ResourceProvider {
    fn framework_resources(&self) -> Option<&dyn ResourceRepository>;

    fn project_resources(&self) -> Option<&dyn ResourceRepository>;

    /// Framework resource values resolved for the current configuration.
    fn configured_framework_resources(&self) -> Option<&ConfiguredResources>;

    /// Project resource values resolved for the current configuration.
    fn configured_project_resources(&self) -> Option<&ConfiguredResources>;

    /// Built-in and user devices, in display order.
    fn device_catalog(&self) -> Vec<Device>;
}

/// Notification sink. Calls are synchronous and fire after the state change.
pub trait ConfigListener {
    fn on_configuration_change(&mut self);

    fn on_theme_change(&mut self);

    fn on_create(&mut self);

    fn on_clipping_change(&mut self);
}

/// A notification the controller can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigEvent {
    ConfigurationChange,
    ThemeChange,
    Create,
    ClippingChange,
}

impl ConfigEvent {
    pub fn dispatch(self, listener: &mut dyn ConfigListener) {
        match self {
            ConfigEvent::ConfigurationChange => listener.on_configuration_change(),
            ConfigEvent::ThemeChange => listener.on_theme_change(),
            ConfigEvent::Create => listener.on_create(),
            ConfigEvent::ClippingChange => listener.on_clipping_change(),
        }
    }
}
