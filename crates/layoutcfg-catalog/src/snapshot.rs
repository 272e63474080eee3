//! In-memory project snapshot exposed through the core ports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use layoutcfg_core::{ResourceProvider, ResourceRepository};
use layoutcfg_model::{ConfiguredResources, Device, ResourceMap, ResourceType};

/// Languages and resolved values of one resource repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSnapshot {
    languages: BTreeMap<String, BTreeSet<String>>,
    values: ConfiguredResources,
}

impl ResourceSnapshot {
    pub fn new(
        languages: BTreeMap<String, BTreeSet<String>>,
        values: ConfiguredResources,
    ) -> Self {
        Self { languages, values }
    }

    pub fn values(&self) -> &ConfiguredResources {
        &self.values
    }

    pub fn styles(&self) -> Option<&ResourceMap> {
        self.values.get(&ResourceType::Style)
    }

    pub fn language_map(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.languages
    }
}

impl ResourceRepository for ResourceSnapshot {
    fn languages(&self) -> BTreeSet<String> {
        self.languages.languages()
    }

    fn regions(&self, language: &str) -> BTreeSet<String> {
        self.languages.regions(language)
    }
}

/// A loaded project: device catalog plus optional framework and project
/// resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSnapshot {
    devices: Vec<Device>,
    framework: Option<ResourceSnapshot>,
    project: Option<ResourceSnapshot>,
    source: Option<PathBuf>,
}

impl ProjectSnapshot {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }

    pub fn with_framework(mut self, framework: ResourceSnapshot) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn with_project(mut self, project: ResourceSnapshot) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|device| device.name == name)
    }

    pub fn framework(&self) -> Option<&ResourceSnapshot> {
        self.framework.as_ref()
    }

    pub fn project(&self) -> Option<&ResourceSnapshot> {
        self.project.as_ref()
    }

    /// Path the snapshot was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl ResourceProvider for ProjectSnapshot {
    fn framework_resources(&self) -> Option<&dyn ResourceRepository> {
        self.framework
            .as_ref()
            .map(|snapshot| snapshot as &dyn ResourceRepository)
    }

    fn project_resources(&self) -> Option<&dyn ResourceRepository> {
        self.project
            .as_ref()
            .map(|snapshot| snapshot as &dyn ResourceRepository)
    }

    fn configured_framework_resources(&self) -> Option<&ConfiguredResources> {
        self.framework.as_ref().map(ResourceSnapshot::values)
    }

    fn configured_project_resources(&self) -> Option<&ConfiguredResources> {
        self.project.as_ref().map(ResourceSnapshot::values)
    }

    fn device_catalog(&self) -> Vec<Device> {
        self.devices.clone()
    }
}
