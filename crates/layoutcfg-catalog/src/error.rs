use std::path::PathBuf;

use layoutcfg_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read project file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML project file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON project file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid qualifiers for {device}/{config}: {source}")]
    InvalidQualifiers {
        device: String,
        config: String,
        #[source]
        source: ModelError,
    },

    #[error("duplicate device in project file: {name}")]
    DuplicateDevice { name: String },

    #[error("duplicate config {config} for device {device}")]
    DuplicateConfig { device: String, config: String },

    #[error("duplicate style {name} in {section} resources")]
    DuplicateStyle { section: &'static str, name: String },

    #[error("device {name} has no configs")]
    EmptyDevice { name: String },

    #[error("unsupported project file format (expected .toml or .json): {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
