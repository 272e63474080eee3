//! On-disk shape of a project description file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
    /// Framework resources. Absent means the SDK is not loaded.
    #[serde(default)]
    pub framework: Option<ResourceSection>,
    /// Project resources. Absent means no project is linked.
    #[serde(default)]
    pub project: Option<ResourceSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceEntry {
    pub name: String,
    #[serde(default)]
    pub xdpi: Option<f32>,
    #[serde(default)]
    pub ydpi: Option<f32>,
    #[serde(default)]
    pub configs: Vec<ConfigEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigEntry {
    pub name: String,
    /// Dash-separated folder qualifiers, e.g. `port-mdpi-480x320`.
    #[serde(default)]
    pub qualifiers: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSection {
    #[serde(default)]
    pub styles: Vec<StyleEntry>,
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
    /// Language code to region codes.
    #[serde(default)]
    pub languages: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleEntry {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}
