//! The resolved set of qualifiers for one device/locale context.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::enums::{Density, ScreenDimension, ScreenOrientation};
use crate::error::{ModelError, Result};
use crate::qualifier::{QualifierKind, ResourceQualifier};

/// Mapping from qualifier kind to at most one qualifier.
///
/// Setting a qualifier replaces any prior value of the same kind, so two
/// qualifiers of one kind can never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifierSet {
    qualifiers: BTreeMap<QualifierKind, ResourceQualifier>,
}

impl QualifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a dash-separated list of folder segments, such as
    /// `en-rUS-land-hdpi-v4`. Segments must follow folder order.
    pub fn parse_folder_qualifiers(text: &str) -> Result<Self> {
        let mut set = Self::new();
        let mut last_kind: Option<QualifierKind> = None;
        for segment in text.split('-').map(str::trim).filter(|s| !s.is_empty()) {
            let qualifier = ResourceQualifier::from_folder_segment(segment).ok_or_else(|| {
                ModelError::InvalidQualifier {
                    segment: segment.to_string(),
                }
            })?;
            let kind = qualifier.kind();
            if set.qualifiers.contains_key(&kind) {
                return Err(ModelError::DuplicateQualifier { kind });
            }
            if last_kind.is_some_and(|last| last > kind) {
                return Err(ModelError::QualifierOrder {
                    segment: segment.to_string(),
                });
            }
            last_kind = Some(kind);
            set.add_qualifier(qualifier);
        }
        Ok(set)
    }

    pub fn get(&self, kind: QualifierKind) -> Option<&ResourceQualifier> {
        self.qualifiers.get(&kind)
    }

    /// Sets or clears one kind. `None` clears it.
    ///
    /// A qualifier whose kind differs from `kind` is rejected: `kind` is
    /// cleared and no other kind changes.
    pub fn set(&mut self, kind: QualifierKind, qualifier: Option<ResourceQualifier>) {
        self.qualifiers.remove(&kind);
        match qualifier {
            Some(qualifier) if qualifier.kind() == kind => {
                self.qualifiers.insert(kind, qualifier);
            }
            Some(qualifier) => {
                warn!(
                    slot = ?kind,
                    actual = ?qualifier.kind(),
                    "qualifier kind mismatch, slot cleared"
                );
            }
            None => {}
        }
    }

    pub fn add_qualifier(&mut self, qualifier: ResourceQualifier) {
        self.qualifiers.insert(qualifier.kind(), qualifier);
    }

    pub fn remove(&mut self, kind: QualifierKind) -> Option<ResourceQualifier> {
        self.qualifiers.remove(&kind)
    }

    /// Replaces the contents wholesale with a copy of `other`.
    pub fn replace_all(&mut self, other: &QualifierSet) {
        self.qualifiers.clone_from(&other.qualifiers);
    }

    pub fn clear(&mut self) {
        self.qualifiers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    /// Iterates qualifiers in folder order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceQualifier> {
        self.qualifiers.values()
    }

    /// Folder-qualifier style string (`en-rUS-land`), or `None` for the
    /// default (empty) configuration.
    pub fn to_display_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let segments: Vec<String> = self.iter().map(ResourceQualifier::folder_segment).collect();
        Some(segments.join("-"))
    }

    pub fn language(&self) -> Option<&str> {
        match self.get(QualifierKind::Language) {
            Some(ResourceQualifier::Language(value)) => Some(value),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&str> {
        match self.get(QualifierKind::Region) {
            Some(ResourceQualifier::Region(value)) => Some(value),
            _ => None,
        }
    }

    pub fn version(&self) -> Option<u32> {
        match self.get(QualifierKind::Version) {
            Some(ResourceQualifier::Version(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn pixel_density(&self) -> Option<Density> {
        match self.get(QualifierKind::PixelDensity) {
            Some(ResourceQualifier::PixelDensity(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn screen_orientation(&self) -> Option<ScreenOrientation> {
        match self.get(QualifierKind::ScreenOrientation) {
            Some(ResourceQualifier::ScreenOrientation(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn screen_dimension(&self) -> Option<ScreenDimension> {
        match self.get(QualifierKind::ScreenDimension) {
            Some(ResourceQualifier::ScreenDimension(value)) => Some(*value),
            _ => None,
        }
    }
}

impl FromIterator<ResourceQualifier> for QualifierSet {
    fn from_iter<I: IntoIterator<Item = ResourceQualifier>>(iter: I) -> Self {
        let mut set = Self::new();
        for qualifier in iter {
            set.add_qualifier(qualifier);
        }
        set
    }
}

impl Serialize for QualifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
