//! Host-defined toggle buttons shown next to the clipping toggle.

use std::fmt;

use crate::error::{ConfigError, Result};

/// Descriptor plus callback for one custom toggle. The host renders it; the
/// controller only keeps its state and forwards changes.
pub struct CustomToggle {
    label: Option<String>,
    icon: Option<String>,
    tooltip: Option<String>,
    selected: bool,
    on_selected: Box<dyn FnMut(bool)>,
}

impl CustomToggle {
    /// At least one of `label` and `icon` must be set.
    pub fn new(
        label: Option<&str>,
        icon: Option<&str>,
        tooltip: Option<&str>,
        on_selected: impl FnMut(bool) + 'static,
    ) -> Result<Self> {
        if label.is_none() && icon.is_none() {
            return Err(ConfigError::InvalidToggle);
        }
        Ok(Self {
            label: label.map(str::to_string),
            icon: icon.map(str::to_string),
            tooltip: tooltip.map(str::to_string),
            selected: false,
            on_selected: Box::new(on_selected),
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Icon reference resolved by the host (e.g. an icon name).
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        (self.on_selected)(selected);
    }
}

impl fmt::Debug for CustomToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomToggle")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("tooltip", &self.tooltip)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
