use super::{record, FileExport, FileImport, ImportOutcome};
use crate::error::{MediaError, Result};
use crate::model::MediaFile;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Keeps serialized catalogs in memory, keyed by the path they were written to.
///
/// Goes through the same encode/decode and validation as [`super::json::JsonCodec`],
/// minus the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryCodec {
    catalogs: RefCell<HashMap<String, String>>,
}

impl InMemoryCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a catalog as if it had been written to `path`.
    pub fn with_catalog(self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&self, path: &str, text: &str) {
        self.catalogs
            .borrow_mut()
            .insert(path.to_string(), text.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.catalogs.borrow().get(path).cloned()
    }
}

impl FileImport for InMemoryCodec {
    fn import(&self, path: &str) -> Result<ImportOutcome> {
        let text = self
            .get(path)
            .ok_or_else(|| MediaError::NotFound(PathBuf::from(path)))?;
        record::decode(&text)
    }
}

impl FileExport for InMemoryCodec {
    fn write(&self, path: &str, files: &[MediaFile]) -> Result<()> {
        if path.trim().is_empty() {
            return Err(MediaError::InvalidPath("empty path".to_string()));
        }
        let text = record::encode(files, false)?;
        self.insert(path, &text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileKind, Metadata};

    #[test]
    fn reads_what_was_written() {
        let codec = InMemoryCodec::new();
        let file = MediaFile::from_fullpath(
            FileKind::Audio,
            "/song.ext",
            vec![
                Metadata::new("creator", "Paul"),
                Metadata::new("runtime", "3mins"),
            ],
        );
        codec.write("lib.json", &[file]).unwrap();

        let files = codec.read("lib.json").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].kind, FileKind::Audio);
    }

    #[test]
    fn unknown_catalog_is_not_found() {
        let err = InMemoryCodec::new().import("nope.json").unwrap_err();
        assert!(matches!(err, MediaError::NotFound(_)));
    }

    #[test]
    fn empty_destination_is_invalid() {
        let err = InMemoryCodec::new().write("", &[]).unwrap_err();
        assert!(matches!(err, MediaError::InvalidPath(_)));
    }
}
