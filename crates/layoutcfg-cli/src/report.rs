//! Resolution of a device/config/locale/theme selection into a report.

use std::fmt;

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::debug;

use layoutcfg_core::{ConfigurationController, ResourceProvider};

/// What to select before reading the effective configuration. `None` keeps
/// the controller's default.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub device: Option<String>,
    pub config: Option<String>,
    pub locale: Option<String>,
    pub theme: Option<String>,
    pub version: Option<u32>,
    pub clipping: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualifierRow {
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveReport {
    pub device: Option<String>,
    pub config: Option<String>,
    /// Dash-separated folder qualifiers; `None` for the default configuration.
    pub configuration: Option<String>,
    pub qualifiers: Vec<QualifierRow>,
    pub density: String,
    pub xdpi: f32,
    pub ydpi: f32,
    pub width: u32,
    pub height: u32,
    pub theme: Option<String>,
    pub project_theme: bool,
    pub locale: Option<String>,
    pub clipping: bool,
}

impl ResolveReport {
    pub fn from_controller(controller: &ConfigurationController) -> Self {
        let resolver = controller.resolver();
        let current = controller.current_config();
        let bounds = controller.screen_bounds();
        Self {
            device: resolver.current_device().map(|device| device.name.clone()),
            config: resolver.selected_config_name().map(str::to_string),
            configuration: current.to_display_string(),
            qualifiers: current
                .iter()
                .map(|qualifier| QualifierRow {
                    kind: qualifier.kind().to_string(),
                    value: qualifier.folder_segment(),
                })
                .collect(),
            density: controller.density().to_string(),
            xdpi: controller.x_dpi(),
            ydpi: controller.y_dpi(),
            width: bounds.width,
            height: bounds.height,
            theme: controller.theme().map(str::to_string),
            project_theme: controller.theme().is_some() && controller.is_project_theme(),
            locale: controller
                .locale_index()
                .and_then(|index| controller.locales().get(index))
                .map(|entry| entry.label.clone()),
            clipping: controller.clipping(),
        }
    }

    /// Plain text rendering, one `key: value` per line.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "device: {}", or_none(self.device.as_deref()))?;
        writeln!(f, "config: {}", or_none(self.config.as_deref()))?;
        writeln!(
            f,
            "configuration: {}",
            self.configuration.as_deref().unwrap_or("(Default)")
        )?;
        writeln!(f, "qualifiers:")?;
        for row in &self.qualifiers {
            writeln!(f, "  {}: {}", row.kind, row.value)?;
        }
        writeln!(f, "density: {}", self.density)?;
        writeln!(f, "dpi: {} x {}", self.xdpi, self.ydpi)?;
        writeln!(f, "screen: {} x {}", self.width, self.height)?;
        let owner = if self.project_theme { " (project)" } else { "" };
        writeln!(f, "theme: {}{owner}", or_none(self.theme.as_deref()))?;
        writeln!(f, "locale: {}", or_none(self.locale.as_deref()))?;
        writeln!(f, "clipping: {}", if self.clipping { "on" } else { "off" })
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Initializes a controller from `provider` and applies `options` in device,
/// config, locale, version, theme order.
pub fn resolve(provider: &dyn ResourceProvider, options: &ResolveOptions) -> Result<ResolveReport> {
    let mut controller = ConfigurationController::default();
    controller
        .initialize(provider)
        .context("initialize configuration")?;

    if let Some(name) = &options.device {
        let index = controller
            .resolver()
            .device_names()
            .iter()
            .position(|device| *device == name.as_str())
            .ok_or_else(|| anyhow!("unknown device: {name}"))?;
        controller
            .select_device(index)
            .with_context(|| format!("select device {name}"))?;
    }
    if let Some(name) = &options.config {
        controller
            .select_config_variant(name)
            .with_context(|| format!("select config {name}"))?;
    }
    if let Some(label) = &options.locale {
        let listed = controller
            .locales()
            .labels()
            .iter()
            .position(|listed| *listed == label.as_str());
        match listed {
            Some(index) => controller.select_locale(index)?,
            None => controller
                .set_locale_text(label)
                .with_context(|| format!("parse locale {label}"))?,
        }
    }
    if let Some(version) = options.version {
        controller.set_version(Some(version));
    }
    if let Some(name) = &options.theme {
        let Some(index) = controller.themes().position(name) else {
            bail!("unknown theme: {name}");
        };
        controller.select_theme(index)?;
    }
    if let Some(clipping) = options.clipping {
        controller.set_clipping(clipping);
    }

    let report = ResolveReport::from_controller(&controller);
    debug!(configuration = ?report.configuration, "configuration resolved");
    Ok(report)
}
