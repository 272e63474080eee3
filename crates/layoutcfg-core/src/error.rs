use thiserror::Error;

use layoutcfg_model::ModelError;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The variant name is not one of the current device's configs. The name
    /// list is always derived from the same device, so this is an invariant
    /// violation on the caller's side.
    #[error("device {device} has no config named {config}")]
    NotFound { device: String, config: String },
    #[error("{what} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("a custom toggle needs a label or an icon")]
    InvalidToggle,
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
