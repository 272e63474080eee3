use thiserror::Error;

use crate::qualifier::QualifierKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unrecognized qualifier segment: {segment}")]
    InvalidQualifier { segment: String },
    #[error("qualifier {kind} appears more than once")]
    DuplicateQualifier { kind: QualifierKind },
    #[error("qualifier segment {segment} is out of order")]
    QualifierOrder { segment: String },
    #[error("invalid locale: {text}")]
    InvalidLocale { text: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
