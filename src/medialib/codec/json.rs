use super::{path, record, FileExport, FileImport, ImportOutcome};
use crate::error::{MediaError, Result};
use crate::model::MediaFile;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes catalogs as JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    pretty: bool,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn read_text(&self, resolved: &Path) -> Result<String> {
        if !resolved.exists() {
            return Err(MediaError::NotFound(resolved.to_path_buf()));
        }
        if !resolved.is_file() {
            return Err(MediaError::InvalidPath(format!(
                "{} is not a file",
                resolved.display()
            )));
        }

        fs::read_to_string(resolved).map_err(|e| io_error(e, resolved))
    }
}

fn io_error(err: std::io::Error, path: &Path) -> MediaError {
    match err.kind() {
        ErrorKind::NotFound => MediaError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => MediaError::PermissionDenied(path.to_path_buf()),
        _ => MediaError::Io(err),
    }
}

fn destination(raw: &str) -> Result<PathBuf> {
    let resolved = path::resolve(raw)?;
    if resolved.is_dir() {
        return Err(MediaError::InvalidPath(format!(
            "{} is a directory",
            resolved.display()
        )));
    }
    match resolved.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => Ok(resolved),
        _ => Err(MediaError::InvalidPath(format!(
            "{}: parent directory does not exist",
            resolved.display()
        ))),
    }
}

impl FileImport for JsonCodec {
    fn import(&self, raw: &str) -> Result<ImportOutcome> {
        let resolved = path::resolve(raw)?;
        let text = self.read_text(&resolved)?;
        let outcome = record::decode(&text)?;
        info!(
            path = %resolved.display(),
            loaded = outcome.files.len(),
            rejected = outcome.failures.len(),
            "catalog imported"
        );
        Ok(outcome)
    }
}

impl FileExport for JsonCodec {
    fn write(&self, raw: &str, files: &[MediaFile]) -> Result<()> {
        let resolved = destination(raw)?;
        let text = record::encode(files, self.pretty)?;
        fs::write(&resolved, text).map_err(|e| io_error(e, &resolved))?;
        debug!(path = %resolved.display(), count = files.len(), "catalog written");
        Ok(())
    }
}
