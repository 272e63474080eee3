use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use layoutcfg_catalog::{ProjectSnapshot, default_project_path, load_project};
use layoutcfg_cli::report::{ResolveOptions, ResolveReport, resolve};
use layoutcfg_core::ConfigurationController;

use crate::cli::{ReportFormatArg, ResolveArgs};
use crate::summary::{print_devices, print_locales, print_report, print_themes};

/// Loads `--project`, falling back to `$LAYOUTCFG_PROJECT` or `./layoutcfg.toml`.
pub fn load(project: Option<&Path>) -> Result<ProjectSnapshot> {
    let path = project.map_or_else(default_project_path, Path::to_path_buf);
    load_project(&path).with_context(|| format!("load project {}", path.display()))
}

fn controller(snapshot: &ProjectSnapshot) -> Result<ConfigurationController> {
    let mut controller = ConfigurationController::default();
    controller
        .initialize(snapshot)
        .context("initialize configuration")?;
    Ok(controller)
}

pub fn run_devices(snapshot: &ProjectSnapshot) -> Result<()> {
    print_devices(snapshot.devices());
    Ok(())
}

pub fn run_themes(snapshot: &ProjectSnapshot) -> Result<()> {
    let controller = controller(snapshot)?;
    print_themes(controller.themes());
    Ok(())
}

pub fn run_locales(snapshot: &ProjectSnapshot) -> Result<()> {
    let controller = controller(snapshot)?;
    print_locales(controller.locales());
    Ok(())
}

pub fn run_resolve(snapshot: &ProjectSnapshot, args: &ResolveArgs) -> Result<ResolveReport> {
    let options = ResolveOptions {
        device: args.device.clone(),
        config: args.config.clone(),
        locale: args.locale.clone(),
        theme: args.theme.clone(),
        version: args.api_level,
        clipping: args.no_clipping.then_some(false),
    };
    let report = resolve(snapshot, &options)?;
    info!(device = ?report.device, config = ?report.config, "resolved");
    match args.format {
        ReportFormatArg::Table => print_report(&report),
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(report)
}
