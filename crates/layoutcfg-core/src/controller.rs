//! Host-facing controller for the layout editor configuration bar.
//!
//! # Architecture
//!
//! [`ConfigurationController`] owns one [`ConfigurationResolver`] plus the
//! derived choice lists (themes, locales) and their selections. The host
//! forwards user actions (device, config, locale and theme selections,
//! clipping, create, custom toggles) and receives notifications through an
//! optional [`ConfigListener`].
//!
//! Catalog rebuilds run inside a rebuild scope. Notifications raised while
//! the scope is active are coalesced and flushed once, each kind at most
//! once, when the outermost scope exits.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = ConfigurationController::new(Some(Box::new(listener)));
//! controller.initialize(&provider)?;
//! if controller.select_device(index)? == DeviceSelection::RequestCustomDeviceCreation {
//!     host.create_custom_device();
//!     controller.reload_devices(&provider)?;
//! }
//! ```

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use layoutcfg_model::{Density, QualifierSet, ResourceQualifier, ResourceType};

use crate::error::{ConfigError, Result};
use crate::locales::{LocaleCatalog, parse_locale_label};
use crate::ports::{ConfigEvent, ConfigListener, ResourceProvider};
use crate::resolver::{ConfigurationResolver, DeviceSelection, ScreenBounds};
use crate::themes::ThemeList;
use crate::toggle::CustomToggle;

/// Label shown for the default (empty) configuration.
pub const DEFAULT_CONFIG_LABEL: &str = "(Default)";

const CLIPPING_TOOLTIP: &str = "Toggles screen clipping on/off";
const NO_CLIPPING_TOOLTIP: &str = "Non clipped rendering is not supported";

pub struct ConfigurationController {
    resolver: ConfigurationResolver,
    themes: ThemeList,
    theme_index: Option<usize>,
    locales: LocaleCatalog,
    locale_index: Option<usize>,
    clipping: bool,
    clipping_supported: bool,
    create_enabled: bool,
    editing_label: String,
    toggles: Vec<CustomToggle>,
    listener: Option<Box<dyn ConfigListener>>,
    rebuild_depth: usize,
    pending: BTreeSet<ConfigEvent>,
}

impl ConfigurationController {
    pub fn new(listener: Option<Box<dyn ConfigListener>>) -> Self {
        Self {
            resolver: ConfigurationResolver::default(),
            themes: ThemeList::default(),
            theme_index: None,
            locales: LocaleCatalog::default(),
            locale_index: None,
            clipping: true,
            clipping_supported: true,
            create_enabled: false,
            editing_label: DEFAULT_CONFIG_LABEL.to_string(),
            toggles: Vec::new(),
            listener,
            rebuild_depth: 0,
            pending: BTreeSet::new(),
        }
    }

    pub fn with_toggles(mut self, toggles: Vec<CustomToggle>) -> Self {
        self.toggles = toggles;
        self
    }

    /// Loads resources and devices, then applies the first device's first
    /// config.
    pub fn initialize(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.update_from_resources(provider);
        self.reload_devices(provider)
    }

    /// Runs `f` with notifications deferred. Nested scopes flush only when
    /// the outermost one exits.
    ///
    /// The scope is closed even if `f` unwinds; pending notifications are
    /// then dropped instead of flushed.
    pub fn rebuild<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.rebuild_depth += 1;
        let mut scope = RebuildScope { controller: self };
        f(&mut *scope.controller)
    }

    pub fn is_rebuilding(&self) -> bool {
        self.rebuild_depth > 0
    }

    fn notify(&mut self, event: ConfigEvent) {
        if self.is_rebuilding() {
            self.pending.insert(event);
        } else {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ConfigEvent) {
        match self.listener.as_deref_mut() {
            Some(listener) => event.dispatch(listener),
            None => debug!(?event, "no listener, notification dropped"),
        }
    }

    fn close_rebuild(&mut self) {
        self.rebuild_depth = self.rebuild_depth.saturating_sub(1);
        if self.rebuild_depth > 0 {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        if std::thread::panicking() {
            warn!(dropped = pending.len(), "rebuild unwound, pending notifications dropped");
            return;
        }
        for event in pending {
            self.dispatch(event);
        }
    }

    /// Rebuilds the theme list and the locale list from the provider.
    ///
    /// Framework themes are only listed when the framework repository exists,
    /// project themes and locales only when the project repository exists.
    pub fn update_from_resources(&mut self, provider: &dyn ResourceProvider) {
        let previous_theme = self.theme().map(str::to_string);
        self.rebuild(|this| {
            let framework_styles = provider
                .framework_resources()
                .and(provider.configured_framework_resources())
                .and_then(|resources| resources.get(&ResourceType::Style));
            let project_styles = provider
                .project_resources()
                .and(provider.configured_project_resources())
                .and_then(|resources| resources.get(&ResourceType::Style));
            this.themes = ThemeList::from_styles(framework_styles, project_styles);
            this.theme_index = this.themes.restore_selection(this.theme_index);
            if this.theme().map(str::to_string) != previous_theme {
                this.notify(ConfigEvent::ThemeChange);
            }

            this.locales = LocaleCatalog::build(provider.project_resources());
            let current = this.resolver.current_config();
            this.locale_index = this.locales.position(current.language(), current.region());
            info!(
                themes = this.themes.len(),
                locales = this.locales.len(),
                "resources reloaded"
            );
        });
    }

    /// Re-fetches the device catalog, re-selects the current device when it
    /// is still listed (otherwise the first device) and applies its first
    /// config.
    pub fn reload_devices(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        match self.resolver.reload_devices(provider.device_catalog()) {
            Some(DeviceSelection::Selected { .. }) => self.apply_device_config(),
            _ => Ok(()),
        }
    }

    /// Selects a device by index. An index at or past the end of the catalog
    /// asks the host to create a custom device; the host then calls
    /// [`Self::reload_devices`].
    pub fn select_device(&mut self, index: usize) -> Result<DeviceSelection> {
        let selection = self.resolver.select_device(index);
        if let DeviceSelection::Selected { .. } = selection {
            self.apply_device_config()?;
        }
        Ok(selection)
    }

    fn apply_device_config(&mut self) -> Result<()> {
        if self.resolver.apply_selected_config()? {
            self.notify(ConfigEvent::ConfigurationChange);
        }
        Ok(())
    }

    pub fn select_config_variant(&mut self, name: &str) -> Result<()> {
        if self.resolver.select_config_variant(name)? {
            self.notify(ConfigEvent::ConfigurationChange);
        }
        Ok(())
    }

    pub fn select_config_variant_at(&mut self, index: usize) -> Result<()> {
        if self.resolver.select_config_variant_at(index)? {
            self.notify(ConfigEvent::ConfigurationChange);
        }
        Ok(())
    }

    /// Applies the locale entry at `index`. Ignored while rebuilding, since
    /// repopulating the list issues selections as a side effect.
    pub fn select_locale(&mut self, index: usize) -> Result<()> {
        let entry = self
            .locales
            .get(index)
            .ok_or(ConfigError::IndexOutOfRange {
                what: "locale",
                index,
                len: self.locales.len(),
            })?;
        if self.is_rebuilding() {
            debug!(index, "locale selection ignored during rebuild");
            return Ok(());
        }
        let language = entry.language_qualifier();
        let region = entry.region_qualifier();
        self.resolver.apply_locale(Some(language), region);
        self.locale_index = Some(index);
        self.notify(ConfigEvent::ConfigurationChange);
        Ok(())
    }

    /// Applies a typed locale such as `fr_CA`, which need not be listed.
    pub fn set_locale_text(&mut self, text: &str) -> Result<()> {
        let (language, region) = parse_locale_label(text)?;
        self.locale_index = self.locales.position(Some(&language), region.as_deref());
        self.resolver.apply_locale(
            Some(ResourceQualifier::Language(language)),
            region.map(ResourceQualifier::Region),
        );
        self.notify(ConfigEvent::ConfigurationChange);
        Ok(())
    }

    /// Sets the platform version the layout is rendered for.
    pub fn set_version(&mut self, version: Option<u32>) {
        self.resolver.apply_version(version);
        self.notify(ConfigEvent::ConfigurationChange);
    }

    /// Selects a theme. Choosing the separator selects the first theme.
    pub fn select_theme(&mut self, index: usize) -> Result<()> {
        let entry = self.themes.get(index).ok_or(ConfigError::IndexOutOfRange {
            what: "theme",
            index,
            len: self.themes.len(),
        })?;
        self.theme_index = if entry.is_separator() { Some(0) } else { Some(index) };
        self.notify(ConfigEvent::ThemeChange);
        Ok(())
    }

    /// Selected theme name, if any.
    pub fn theme(&self) -> Option<&str> {
        self.theme_index
            .and_then(|index| self.themes.get(index))
            .map(|entry| entry.label())
    }

    /// Whether the selected theme comes from the project. Meaningless when
    /// [`Self::theme`] is `None`.
    pub fn is_project_theme(&self) -> bool {
        self.theme_index
            .is_some_and(|index| self.themes.is_project_theme(index))
    }

    pub fn is_theme_selection_enabled(&self) -> bool {
        !self.themes.is_empty()
    }

    pub fn clipping(&self) -> bool {
        self.clipping
    }

    pub fn set_clipping(&mut self, clipping: bool) {
        if !self.clipping_supported {
            warn!("clipping cannot be changed, unclipped rendering is not supported");
            return;
        }
        self.clipping = clipping;
        self.notify(ConfigEvent::ClippingChange);
    }

    /// Without support for unclipped rendering clipping is forced on.
    pub fn set_clipping_support(&mut self, supported: bool) {
        self.clipping_supported = supported;
        if !supported {
            self.clipping = true;
        }
    }

    pub fn is_clipping_supported(&self) -> bool {
        self.clipping_supported
    }

    pub fn clipping_tooltip(&self) -> &'static str {
        if self.clipping_supported {
            CLIPPING_TOOLTIP
        } else {
            NO_CLIPPING_TOOLTIP
        }
    }

    pub fn set_create_enabled(&mut self, enabled: bool) {
        self.create_enabled = enabled;
    }

    pub fn is_create_enabled(&self) -> bool {
        self.create_enabled
    }

    /// Forwards a "Create..." request. Returns `false` when disabled.
    pub fn request_create(&mut self) -> bool {
        if !self.create_enabled {
            return false;
        }
        self.notify(ConfigEvent::Create);
        true
    }

    /// Records the configuration of the file being edited, for display.
    pub fn set_editing_configuration(&mut self, config: &QualifierSet) {
        self.editing_label = config
            .to_display_string()
            .unwrap_or_else(|| DEFAULT_CONFIG_LABEL.to_string());
    }

    pub fn editing_label(&self) -> &str {
        &self.editing_label
    }

    pub fn toggles(&self) -> &[CustomToggle] {
        &self.toggles
    }

    pub fn set_toggle(&mut self, index: usize, selected: bool) -> Result<()> {
        let len = self.toggles.len();
        let toggle = self
            .toggles
            .get_mut(index)
            .ok_or(ConfigError::IndexOutOfRange {
                what: "toggle",
                index,
                len,
            })?;
        toggle.set_selected(selected);
        Ok(())
    }

    pub fn resolver(&self) -> &ConfigurationResolver {
        &self.resolver
    }

    pub fn current_config(&self) -> &QualifierSet {
        self.resolver.current_config()
    }

    pub fn copy_current_config(&self, target: &mut QualifierSet) {
        self.resolver.copy_current_config(target);
    }

    pub fn themes(&self) -> &ThemeList {
        &self.themes
    }

    pub fn theme_index(&self) -> Option<usize> {
        self.theme_index
    }

    pub fn locales(&self) -> &LocaleCatalog {
        &self.locales
    }

    pub fn locale_index(&self) -> Option<usize> {
        self.locale_index
    }

    pub fn density(&self) -> Density {
        self.resolver.density()
    }

    pub fn x_dpi(&self) -> f32 {
        self.resolver.x_dpi()
    }

    pub fn y_dpi(&self) -> f32 {
        self.resolver.y_dpi()
    }

    pub fn screen_bounds(&self) -> ScreenBounds {
        self.resolver.screen_bounds()
    }
}

/// Closes one rebuild scope when dropped.
struct RebuildScope<'a> {
    controller: &'a mut ConfigurationController,
}

impl Drop for RebuildScope<'_> {
    fn drop(&mut self) {
        self.controller.close_rebuild();
    }
}

impl Default for ConfigurationController {
    fn default() -> Self {
        Self::new(None)
    }
}
