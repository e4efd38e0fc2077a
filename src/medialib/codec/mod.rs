//! # Import / Export
//!
//! The codec layer maps the external array-of-records form to validated
//! [`MediaFile`]s and back. It is abstracted behind [`FileImport`] and
//! [`FileExport`] so the collection does not care where catalogs live.
//!
//! ## Implementations
//!
//! - [`json::JsonCodec`]: catalogs as JSON files on disk (production)
//! - [`memory::InMemoryCodec`]: catalogs as JSON strings in memory (testing)
//!
//! ## Record Format
//!
//! ```text
//! [{ "fullpath": "/path/to/file.ext",          // path AND filename
//!    "type": "document" | "image" | "audio" | "video",
//!    "metadata": { "creator": "Paul",           // one value
//!                  "tag": ["a", "b"] } }]       // several values
//! ```
//!
//! ## Batch Validation
//!
//! Every record is validated on its own. Failures are collected per fullpath
//! and never stop the batch; the result is an [`ImportOutcome`] holding both
//! the records that validated and the failures. Callers pick the policy:
//! [`FileImport::read`] is all-or-nothing, while the collection keeps whatever
//! loaded.

use crate::error::{MediaError, Result, ValidationFailures};
use crate::model::MediaFile;

pub mod json;
pub mod memory;
pub mod path;
pub mod record;

pub use record::{decode, encode, MetadataValue, Record};

/// Outcome of importing one catalog.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub files: Vec<MediaFile>,
    pub failures: ValidationFailures,
}

impl ImportOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fails with [`MediaError::ValidationFailed`] if any record was rejected,
    /// discarding the records that did validate.
    pub fn into_result(self) -> Result<Vec<MediaFile>> {
        if self.failures.is_empty() {
            Ok(self.files)
        } else {
            Err(MediaError::ValidationFailed(self.failures))
        }
    }
}

pub trait FileImport {
    /// Reads and validates every record of the catalog at `path`.
    ///
    /// Path and parse errors fail the whole call. Validation errors do not:
    /// they are reported in the returned outcome.
    fn import(&self, path: &str) -> Result<ImportOutcome>;

    /// All-or-nothing variant of [`FileImport::import`].
    fn read(&self, path: &str) -> Result<Vec<MediaFile>> {
        self.import(path)?.into_result()
    }
}

pub trait FileExport {
    /// Serializes `files` to `path`, replacing whatever was there.
    fn write(&self, path: &str, files: &[MediaFile]) -> Result<()>;
}
