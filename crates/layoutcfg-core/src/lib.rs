//! Configuration resolution for a layout editor.
//!
//! Given a device catalog and the framework/project resource repositories,
//! this crate computes the effective resource configuration (a
//! [`layoutcfg_model::QualifierSet`]), the selectable theme and locale lists,
//! and the rendering parameters derived from the configuration.
//!
//! - [`resolver`]: device and variant selection, qualifier merge, density and
//!   screen bounds.
//! - [`themes`]: framework/project theme discovery.
//! - [`locales`]: locale list and typed locale parsing.
//! - [`controller`]: the stateful controller tying the above together with
//!   change notifications.

pub mod controller;
pub mod error;
pub mod locales;
pub mod ports;
pub mod resolver;
pub mod themes;
pub mod toggle;

pub use controller::{ConfigurationController, DEFAULT_CONFIG_LABEL};
pub use error::{ConfigError, Result};
pub use locales::{ANY_LABEL, LocaleCatalog, LocaleEntry, OTHER_LABEL, parse_locale_label};
pub use ports::{ConfigEvent, ConfigListener, ResourceProvider, ResourceRepository};
pub use resolver::{ConfigurationResolver, DeviceSelection, ScreenBounds};
pub use themes::{THEME_SEPARATOR, ThemeEntry, ThemeList, ThemeResolver};
pub use toggle::CustomToggle;
