//! Selectable locale list built from a project's languages and regions.

use std::collections::{BTreeMap, BTreeSet};

use layoutcfg_model::qualifier::{is_language_code, is_region_code};
use layoutcfg_model::{LOCALE_SENTINEL, ModelError, ResourceQualifier};

use crate::ports::ResourceRepository;

/// Sentinel label when the project defines at least one language.
pub const OTHER_LABEL: &str = "Other";
/// Sentinel label when the project defines no language.
pub const ANY_LABEL: &str = "Any";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub label: String,
    pub language: String,
    pub region: Option<String>,
}

impl LocaleEntry {
    fn sentinel(label: &str) -> Self {
        Self {
            label: label.to_string(),
            language: LOCALE_SENTINEL.to_string(),
            region: Some(LOCALE_SENTINEL.to_string()),
        }
    }

    /// True for the "no locale constraint" entry.
    pub fn is_sentinel(&self) -> bool {
        self.language == LOCALE_SENTINEL
    }

    pub fn language_qualifier(&self) -> ResourceQualifier {
        ResourceQualifier::language(self.language.clone())
    }

    pub fn region_qualifier(&self) -> Option<ResourceQualifier> {
        self.region.clone().map(ResourceQualifier::Region)
    }
}

/// Ordered locale choices. Always ends with exactly one sentinel entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    entries: Vec<LocaleEntry>,
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self {
            entries: vec![LocaleEntry::sentinel(ANY_LABEL)],
        }
    }
}

impl LocaleCatalog {
    /// Builds the catalog from a project repository. Without one the catalog
    /// only holds the `Any` sentinel.
    pub fn build(repository: Option<&dyn ResourceRepository>) -> Self {
        let Some(repository) = repository else {
            return Self::default();
        };
        let languages: BTreeMap<String, BTreeSet<String>> = repository
            .languages()
            .into_iter()
            .map(|language| {
                let regions = repository.regions(&language);
                (language, regions)
            })
            .collect();
        Self::from_languages(&languages)
    }

    /// Emits each language, then its regions, in ascending order, followed by
    /// the `Other` (or `Any`) sentinel.
    pub fn from_languages(languages: &BTreeMap<String, BTreeSet<String>>) -> Self {
        let mut entries = Vec::new();
        for (language, regions) in languages {
            entries.push(LocaleEntry {
                label: language.clone(),
                language: language.clone(),
                region: None,
            });
            for region in regions {
                entries.push(LocaleEntry {
                    label: format!("{language}_{region}"),
                    language: language.clone(),
                    region: Some(region.clone()),
                });
            }
        }
        let label = if languages.is_empty() {
            ANY_LABEL
        } else {
            OTHER_LABEL
        };
        entries.push(LocaleEntry::sentinel(label));
        Self { entries }
    }

    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LocaleEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    pub fn sentinel(&self) -> Option<&LocaleEntry> {
        self.entries.last().filter(|entry| entry.is_sentinel())
    }

    /// Index of the entry matching a language/region pair.
    pub fn position(&self, language: Option<&str>, region: Option<&str>) -> Option<usize> {
        let language = language?;
        self.entries
            .iter()
            .position(|entry| entry.language == language && entry.region.as_deref() == region)
    }
}

/// Parses typed locale text such as `fr` or `fr_CA`.
///
/// The language must be two lowercase letters and the optional region two
/// uppercase letters.
pub fn parse_locale_label(text: &str) -> Result<(String, Option<String>), ModelError> {
    let text = text.trim();
    let invalid = || ModelError::InvalidLocale {
        text: text.to_string(),
    };
    let (language, region) = match text.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (text, None),
    };
    if !is_language_code(language) {
        return Err(invalid());
    }
    match region {
        Some(region) if !is_region_code(region) => Err(invalid()),
        _ => Ok((language.to_string(), region.map(str::to_string))),
    }
}
