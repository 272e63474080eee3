//! Theme discovery from framework and project styles.
//!
//! # Rules
//!
//! - A framework style is a theme when it is named `Theme` or `Theme.*`.
//!   The framework theme root is itself named `Theme`, so no inheritance
//!   walk is needed.
//! - A project style is a theme when its parent chain reaches a framework
//!   `Theme`/`Theme.*` style. Parents are either explicit references
//!   (`@android:style/Theme`, `@style/MyTheme`, `MyTheme`) or implied by the
//!   name: `MyTheme.Big` implicitly extends `MyTheme`.
//!
//! Dangling parents and parent cycles classify as "not a theme".

use std::collections::BTreeSet;

use tracing::{debug, warn};

use layoutcfg_model::{ResourceMap, ResourceValue};

/// Placeholder entry between framework and project themes.
pub const THEME_SEPARATOR: &str = "----------";

const THEME_ROOT: &str = "Theme";
const THEME_CHILD_PREFIX: &str = "Theme.";
const REFERENCE_PREFIX: &str = "@";
const FRAMEWORK_PREFIX: &str = "android:";
const STYLE_PREFIX: &str = "style/";

/// Returns true for `Theme` and `Theme.*`.
pub fn is_framework_theme_name(name: &str) -> bool {
    name == THEME_ROOT || name.starts_with(THEME_CHILD_PREFIX)
}

/// A parent style reference with its prefixes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentStyle {
    pub name: String,
    /// The reference carried an `android:` prefix.
    pub framework: bool,
}

/// Resolves the parent of a style, explicit or implied by its name.
///
/// Returns `None` for non-style values and for styles without an explicit
/// parent whose name has no `.`.
pub fn parent_style(value: &ResourceValue) -> Option<ParentStyle> {
    if !value.is_style() {
        return None;
    }
    match value.parent_style() {
        Some(raw) => {
            let mut name = raw.strip_prefix(REFERENCE_PREFIX).unwrap_or(raw);
            let framework = match name.strip_prefix(FRAMEWORK_PREFIX) {
                Some(rest) => {
                    name = rest;
                    true
                }
                None => false,
            };
            let name = name.strip_prefix(STYLE_PREFIX).unwrap_or(name);
            Some(ParentStyle {
                name: name.to_string(),
                framework,
            })
        }
        None => {
            let (implied, _) = value.name().rsplit_once('.')?;
            Some(ParentStyle {
                name: implied.to_string(),
                framework: false,
            })
        }
    }
}

/// Classifies project styles as themes.
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver<'a> {
    project_styles: &'a ResourceMap,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(project_styles: &'a ResourceMap) -> Self {
        Self { project_styles }
    }

    /// Returns true if `value` extends a framework theme, directly or through
    /// other project styles.
    pub fn is_theme(&self, value: &ResourceValue) -> bool {
        let mut visited = BTreeSet::new();
        visited.insert(value.name());
        self.walk(value, &mut visited)
    }

    fn walk<'v>(&'v self, value: &ResourceValue, visited: &mut BTreeSet<&'v str>) -> bool {
        let Some(parent) = parent_style(value) else {
            return false;
        };
        if parent.framework {
            return is_framework_theme_name(&parent.name);
        }
        let Some((key, parent_value)) = self.project_styles.get_key_value(parent.name.as_str())
        else {
            debug!(style = value.name(), parent = %parent.name, "parent style not found");
            return false;
        };
        if !visited.insert(key.as_str()) {
            warn!(style = value.name(), parent = %parent.name, "style parent cycle");
            return false;
        }
        self.walk(parent_value, visited)
    }

    /// Names of all project themes, sorted ascending.
    pub fn project_themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = self
            .project_styles
            .values()
            .filter(|value| self.is_theme(value))
            .map(|value| value.name().to_string())
            .collect();
        themes.sort();
        themes
    }
}

/// Names of all framework themes, sorted ascending.
pub fn framework_themes(styles: &ResourceMap) -> Vec<String> {
    let mut themes: Vec<String> = styles
        .values()
        .map(ResourceValue::name)
        .filter(|name| is_framework_theme_name(name))
        .map(str::to_string)
        .collect();
    themes.sort();
    themes
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEntry {
    Framework(String),
    Separator,
    Project(String),
}

impl ThemeEntry {
    pub fn label(&self) -> &str {
        match self {
            ThemeEntry::Framework(name) | ThemeEntry::Project(name) => name,
            ThemeEntry::Separator => THEME_SEPARATOR,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ThemeEntry::Separator)
    }
}

/// Ordered theme choices: framework themes, an optional separator, then
/// project themes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeList {
    entries: Vec<ThemeEntry>,
    framework_count: usize,
    project_count: usize,
}

impl ThemeList {
    /// Builds the list from theme names. Each block is sorted; the separator
    /// only appears when both blocks are non-empty.
    pub fn new(mut framework: Vec<String>, mut project: Vec<String>) -> Self {
        framework.sort();
        project.sort();
        let framework_count = framework.len();
        let project_count = project.len();
        let mut entries: Vec<ThemeEntry> =
            framework.into_iter().map(ThemeEntry::Framework).collect();
        if framework_count > 0 && project_count > 0 {
            entries.push(ThemeEntry::Separator);
        }
        entries.extend(project.into_iter().map(ThemeEntry::Project));
        Self {
            entries,
            framework_count,
            project_count,
        }
    }

    /// Builds the list from style maps; an absent map contributes no themes.
    pub fn from_styles(
        framework_styles: Option<&ResourceMap>,
        project_styles: Option<&ResourceMap>,
    ) -> Self {
        let framework = framework_styles.map(framework_themes).unwrap_or_default();
        let project = project_styles
            .map(|styles| ThemeResolver::new(styles).project_themes())
            .unwrap_or_default();
        debug!(
            framework = framework.len(),
            project = project.len(),
            "theme list rebuilt"
        );
        Self::new(framework, project)
    }

    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ThemeEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn framework_count(&self) -> usize {
        self.framework_count
    }

    pub fn project_count(&self) -> usize {
        self.project_count
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(ThemeEntry::label).collect()
    }

    /// Index of the theme called `name`. The separator is never matched.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| !entry.is_separator() && entry.label() == name)
    }

    /// Entries at or past the framework block belong to the project. The
    /// separator's slot counts as project-owned.
    pub fn is_project_theme(&self, index: usize) -> bool {
        index >= self.framework_count
    }

    /// Selection to use after a rebuild, given the previous one.
    ///
    /// No previous selection or an out-of-range one selects the first entry;
    /// an empty list has no selection. Landing on the separator also falls
    /// back to the first entry.
    pub fn restore_selection(&self, previous: Option<usize>) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        match previous {
            Some(index) if index < self.len() && !self.entries[index].is_separator() => {
                Some(index)
            }
            _ => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(name: &str, parent: Option<&str>) -> ResourceValue {
        ResourceValue::style(name, parent)
    }

    #[test]
    fn strips_reference_prefixes() {
        let parent = parent_style(&style("A", Some("@android:style/Theme.Light"))).unwrap();
        assert_eq!(parent.name, "Theme.Light");
        assert!(parent.framework);

        let parent = parent_style(&style("A", Some("@style/Base"))).unwrap();
        assert_eq!(parent.name, "Base");
        assert!(!parent.framework);

        let parent = parent_style(&style("A", Some("android:Theme"))).unwrap();
        assert_eq!(parent.name, "Theme");
        assert!(parent.framework);
    }

    #[test]
    fn strips_only_one_at_sign() {
        let parent = parent_style(&style("A", Some("@@android:Theme"))).unwrap();
        assert_eq!(parent.name, "@android:Theme");
        assert!(!parent.framework);
    }

    #[test]
    fn implied_parent_truncates_at_last_dot() {
        let parent = parent_style(&style("Theme.Light.Fullscreen", None)).unwrap();
        assert_eq!(parent.name, "Theme.Light");
        assert!(!parent.framework);
        assert!(parent_style(&style("Plain", None)).is_none());
    }

    #[test]
    fn simple_values_have_no_parent() {
        assert!(parent_style(&ResourceValue::simple("app_name", "Demo")).is_none());
    }

    #[test]
    fn restore_selection_policy() {
        let list = ThemeList::new(
            vec!["Theme".to_string()],
            vec!["MyTheme".to_string()],
        );
        assert_eq!(list.restore_selection(None), Some(0));
        assert_eq!(list.restore_selection(Some(2)), Some(2));
        assert_eq!(list.restore_selection(Some(7)), Some(0));
        assert_eq!(list.restore_selection(Some(1)), Some(0));
        assert_eq!(ThemeList::default().restore_selection(Some(0)), None);
    }
}
