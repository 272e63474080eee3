//! Already-parsed resource values handed in by the resource provider.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Resource type names as they appear in `R` classes and folder names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ResourceType {
    Anim,
    Array,
    Attr,
    Color,
    Dimen,
    Drawable,
    Id,
    Layout,
    String,
    Style,
}

impl ResourceType {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceType::Anim => "anim",
            ResourceType::Array => "array",
            ResourceType::Attr => "attr",
            ResourceType::Color => "color",
            ResourceType::Dimen => "dimen",
            ResourceType::Drawable => "drawable",
            ResourceType::Id => "id",
            ResourceType::Layout => "layout",
            ResourceType::String => "string",
            ResourceType::Style => "style",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named resource value. Only `Style` values can be themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResourceValue {
    Style {
        name: String,
        /// Raw parent reference, e.g. `@android:style/Theme` or `MyTheme`.
        #[serde(default)]
        parent: Option<String>,
    },
    Simple {
        name: String,
        value: String,
    },
}

impl ResourceValue {
    pub fn style(name: impl Into<String>, parent: Option<&str>) -> Self {
        ResourceValue::Style {
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }

    pub fn simple(name: impl Into<String>, value: impl Into<String>) -> Self {
        ResourceValue::Simple {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResourceValue::Style { name, .. } | ResourceValue::Simple { name, .. } => name,
        }
    }

    pub fn is_style(&self) -> bool {
        matches!(self, ResourceValue::Style { .. })
    }

    pub fn parent_style(&self) -> Option<&str> {
        match self {
            ResourceValue::Style { parent, .. } => parent.as_deref(),
            ResourceValue::Simple { .. } => None,
        }
    }
}

/// Resource values of one type, keyed by name.
pub type ResourceMap = BTreeMap<String, ResourceValue>;

/// Resource values of all types for the current configuration.
pub type ConfiguredResources = BTreeMap<ResourceType, ResourceMap>;

/// Builds a name-keyed map from a list of values.
pub fn resource_map<I>(values: I) -> ResourceMap
where
    I: IntoIterator<Item = ResourceValue>,
{
    values
        .into_iter()
        .map(|value| (value.name().to_string(), value))
        .collect()
}
