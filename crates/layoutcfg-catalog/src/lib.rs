//! Project description loading for layoutcfg.
//!
//! A project file lists the device catalog and the framework and project
//! resources (styles, strings, languages). Loading validates it and yields a
//! [`ProjectSnapshot`] that implements [`layoutcfg_core::ResourceProvider`].

pub mod error;
pub mod loaders;
pub mod paths;
pub mod schema;
pub mod snapshot;

pub use error::{CatalogError, Result};
pub use loaders::{
    ProjectFormat, build_snapshot, load_default_project, load_project, parse_project,
};
pub use paths::{DEFAULT_PROJECT_FILE, PROJECT_ENV_VAR, default_project_path};
pub use schema::{ConfigEntry, DeviceEntry, ProjectFile, ResourceSection, StyleEntry};
pub use snapshot::{ProjectSnapshot, ResourceSnapshot};
