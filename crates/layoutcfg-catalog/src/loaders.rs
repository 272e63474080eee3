use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, info};

use layoutcfg_model::{
    ConfiguredResources, Device, QualifierSet, ResourceMap, ResourceType, ResourceValue,
};

use crate::error::{CatalogError, Result};
use crate::paths::default_project_path;
use crate::schema::{DeviceEntry, ProjectFile, ResourceSection};
use crate::snapshot::{ProjectSnapshot, ResourceSnapshot};

/// Serialization format of a project file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    Toml,
    Json,
}

impl ProjectFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn load_default_project() -> Result<ProjectSnapshot> {
    load_project(&default_project_path())
}

/// Reads, parses and validates a project file.
pub fn load_project(path: &Path) -> Result<ProjectSnapshot> {
    let format = ProjectFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let file = parse_project(&text, format, path)?;
    let snapshot = build_snapshot(file)?.with_source(path);
    info!(
        path = %path.display(),
        devices = snapshot.devices().len(),
        framework = snapshot.framework().is_some(),
        project = snapshot.project().is_some(),
        "project loaded"
    );
    Ok(snapshot)
}

/// Parses project text. `path` is only used in error messages.
pub fn parse_project(text: &str, format: ProjectFormat, path: &Path) -> Result<ProjectFile> {
    match format {
        ProjectFormat::Toml => toml::from_str(text).map_err(|source| CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        ProjectFormat::Json => serde_json::from_str(text).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Validates a parsed file and converts it to a snapshot.
///
/// Device names must be unique, each device needs at least one config, config
/// names must be unique per device, style names must be unique per resource
/// section and every qualifier string must parse.
pub fn build_snapshot(file: ProjectFile) -> Result<ProjectSnapshot> {
    let mut seen = BTreeSet::new();
    let mut devices = Vec::with_capacity(file.devices.len());
    for entry in file.devices {
        if !seen.insert(entry.name.clone()) {
            return Err(CatalogError::DuplicateDevice { name: entry.name });
        }
        devices.push(build_device(entry)?);
    }

    let mut snapshot = ProjectSnapshot::new(devices);
    if let Some(section) = file.framework {
        snapshot = snapshot.with_framework(build_resources("framework", section)?);
    }
    if let Some(section) = file.project {
        snapshot = snapshot.with_project(build_resources("project", section)?);
    }
    Ok(snapshot)
}

fn build_device(entry: DeviceEntry) -> Result<Device> {
    if entry.configs.is_empty() {
        return Err(CatalogError::EmptyDevice { name: entry.name });
    }
    let mut device = Device::new(entry.name);
    device.xdpi = entry.xdpi;
    device.ydpi = entry.ydpi;
    for config in entry.configs {
        if device.config(&config.name).is_some() {
            return Err(CatalogError::DuplicateConfig {
                device: device.name,
                config: config.name,
            });
        }
        let qualifiers = QualifierSet::parse_folder_qualifiers(&config.qualifiers).map_err(
            |source| CatalogError::InvalidQualifiers {
                device: device.name.clone(),
                config: config.name.clone(),
                source,
            },
        )?;
        device = device.with_config(config.name, qualifiers);
    }
    debug!(device = %device.name, configs = device.configs.len(), "device loaded");
    Ok(device)
}

fn build_resources(label: &'static str, section: ResourceSection) -> Result<ResourceSnapshot> {
    let languages: BTreeMap<String, BTreeSet<String>> = section
        .languages
        .into_iter()
        .map(|(language, regions)| (language, regions.into_iter().collect()))
        .collect();

    let mut values = ConfiguredResources::new();
    if !section.styles.is_empty() {
        let mut styles = ResourceMap::new();
        for style in section.styles {
            if styles.contains_key(&style.name) {
                return Err(CatalogError::DuplicateStyle {
                    section: label,
                    name: style.name,
                });
            }
            let value = ResourceValue::Style {
                name: style.name.clone(),
                parent: style.parent,
            };
            styles.insert(style.name, value);
        }
        values.insert(ResourceType::Style, styles);
    }
    if !section.strings.is_empty() {
        let strings = section
            .strings
            .into_iter()
            .map(|(name, value)| (name.clone(), ResourceValue::simple(name, value)))
            .collect();
        values.insert(ResourceType::String, strings);
    }
    Ok(ResourceSnapshot::new(languages, values))
}
