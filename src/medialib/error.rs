use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// A single reason a serialized record could not become a [`crate::model::MediaFile`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field \"{keyword}\"")]
    MissingField { keyword: String },

    #[error("unknown file type \"{tag}\"")]
    UnknownType { tag: String },
}

impl ValidationError {
    pub fn missing(keyword: impl Into<String>) -> Self {
        Self::MissingField {
            keyword: keyword.into(),
        }
    }

    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownType { tag: tag.into() }
    }
}

/// Per-record validation failures of one import, keyed by the record's fullpath.
pub type ValidationFailures = BTreeMap<String, Vec<ValidationError>>;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed for {} record(s): {}", .0.len(), summarize(.0))]
    ValidationFailed(ValidationFailures),

    #[error("No file named {0} in the collection")]
    FileNotFound(String),

    #[error("\"{keyword}\" is required by {filename} and cannot be removed")]
    RequiredField { keyword: String, filename: String },

    #[error("Api Error: {0}")]
    Api(String),
}

fn summarize(failures: &ValidationFailures) -> String {
    failures
        .iter()
        .map(|(path, errors)| {
            let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
            format!("{} ({})", path, reasons.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MediaError>;
