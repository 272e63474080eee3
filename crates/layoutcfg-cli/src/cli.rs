//! CLI argument definitions for layoutcfg.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "layoutcfg",
    version,
    about = "Resolve layout editor configurations from a project description",
    long_about = "Resolve the effective resource configuration for a device, locale and theme.\n\n\
                  Reads devices, styles and languages from a TOML or JSON project file\n\
                  (--project, $LAYOUTCFG_PROJECT, or ./layoutcfg.toml)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project description file (.toml or .json).
    #[arg(long = "project", value_name = "PATH", global = true)]
    pub project: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List devices with their config variants and dpi.
    Devices,

    /// List selectable themes, framework first.
    Themes,

    /// List selectable locales.
    Locales,

    /// Resolve the effective configuration for a selection.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Device name (default: first device).
    #[arg(long = "device", value_name = "NAME")]
    pub device: Option<String>,

    /// Config variant name (default: the device's first config).
    #[arg(long = "config", value_name = "NAME")]
    pub config: Option<String>,

    /// Locale label such as `en`, `en_US` or `Other`; unlisted codes are accepted.
    #[arg(long = "locale", value_name = "LABEL")]
    pub locale: Option<String>,

    /// Platform API level, applied as the version qualifier.
    #[arg(long = "api-level", value_name = "LEVEL")]
    pub api_level: Option<u32>,

    /// Theme name (default: first theme).
    #[arg(long = "theme", value_name = "NAME")]
    pub theme: Option<String>,

    /// Disable render clipping.
    #[arg(long = "no-clipping")]
    pub no_clipping: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
