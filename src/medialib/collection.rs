//! # Collection
//!
//! The collection is the aggregate that owns every [`MediaFile`] and the
//! [`Indexer`] derived from them. It is the **only** place either one is
//! mutated, which is what keeps them consistent:
//!
//! - after any mutation, every metadata value of every file finds that file
//!   through [`Collection::search`]
//! - every file found under a term actually carries that value
//!
//! Per-file changes all go through a single private entry point that drops the
//! file from the index, applies the change, then indexes it again. Nothing
//! outside this module can touch one side without the other, and
//! [`Collection::reindex`] is there as a full rebuild should it ever be needed.
//!
//! ## Identity
//!
//! Files are identified by `filename`. The collection keeps filenames unique:
//! adding a file whose filename is already present replaces the existing
//! record in place.

use crate::codec::json::JsonCodec;
use crate::codec::{FileExport, FileImport};
use crate::error::{MediaError, Result};
use crate::index::{Indexer, Slot};
use crate::model::{MediaFile, Metadata};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

pub struct Collection<C = JsonCodec> {
    files: Vec<MediaFile>,
    /// filename -> slot in `files`
    positions: HashMap<String, Slot>,
    index: Indexer,
    codec: C,
}

impl Collection<JsonCodec> {
    pub fn new() -> Self {
        Self::with_codec(JsonCodec::default())
    }
}

impl Default for Collection<JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Collection<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            files: Vec::new(),
            positions: HashMap::new(),
            index: Indexer::new(),
            codec,
        }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Adds `file`, or replaces the record already holding its filename.
    pub fn add(&mut self, file: MediaFile) {
        if let Some(slot) = self.position(&file.filename) {
            debug!(filename = %file.filename, "replacing existing record");
            self.mutate(slot, |existing| *existing = file);
            return;
        }

        let slot = self.files.len();
        self.positions.insert(file.filename.clone(), slot);
        self.files.push(file);
        self.index.add(slot, &self.files[slot]);
    }

    /// Overwrites the record with the same filename, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no such record exists.
    pub fn replace(&mut self, file: MediaFile) -> bool {
        match self.position(&file.filename) {
            Some(slot) => {
                self.mutate(slot, |existing| *existing = file);
                true
            }
            None => false,
        }
    }

    /// Strips `metadata` from every file carrying it, except files for which
    /// the keyword is required. Those are skipped silently.
    ///
    /// Returns the number of files changed.
    pub fn remove(&mut self, metadata: &Metadata) -> usize {
        let slots: Vec<Slot> = self.index.search(&metadata.value).to_vec();
        let mut changed = 0;

        for slot in slots {
            let file = &self.files[slot];
            if !file.contains(metadata) {
                continue;
            }
            if file.is_required(&metadata.keyword) {
                debug!(filename = %file.filename, keyword = %metadata.keyword, "required, kept");
                continue;
            }
            self.mutate(slot, |file| file.remove(metadata));
            changed += 1;
        }

        changed
    }

    pub fn search(&self, term: &str) -> Vec<&MediaFile> {
        self.index
            .search(term)
            .iter()
            .map(|slot| &self.files[*slot])
            .collect()
    }

    /// Files carrying the exact keyword/value pair.
    ///
    /// The index is keyed by value alone, so the value lookup is only a
    /// prefilter and the keyword is checked afterwards.
    pub fn search_metadata(&self, metadata: &Metadata) -> Vec<&MediaFile> {
        self.search(&metadata.value)
            .into_iter()
            .filter(|file| file.contains(metadata))
            .collect()
    }

    pub fn all(&self) -> &[MediaFile] {
        &self.files
    }

    pub fn get(&self, filename: &str) -> Option<&MediaFile> {
        self.position(filename).map(|slot| &self.files[slot])
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn reindex(&mut self) {
        self.index.reindex(self.files.iter().enumerate());
    }

    pub fn add_metadata(&mut self, filename: &str, metadata: Metadata) -> Result<()> {
        let slot = self.require(filename)?;
        self.mutate(slot, |file| file.add(metadata.keyword, metadata.value));
        Ok(())
    }

    /// Replaces every entry under the keyword with the given value.
    pub fn edit_metadata(&mut self, filename: &str, metadata: Metadata) -> Result<()> {
        let slot = self.require(filename)?;
        self.mutate(slot, |file| file.edit(&metadata.keyword, metadata.value));
        Ok(())
    }

    /// Deletes every entry under `keyword`. Required keywords are refused.
    pub fn delete_metadata(&mut self, filename: &str, keyword: &str) -> Result<usize> {
        let slot = self.require(filename)?;
        if self.files[slot].is_required(keyword) {
            return Err(MediaError::RequiredField {
                keyword: keyword.to_string(),
                filename: filename.to_string(),
            });
        }
        Ok(self.mutate(slot, |file| file.delete(keyword)))
    }

    fn position(&self, filename: &str) -> Option<Slot> {
        self.positions.get(filename).copied()
    }

    fn require(&self, filename: &str) -> Result<Slot> {
        self.position(filename)
            .ok_or_else(|| MediaError::FileNotFound(filename.to_string()))
    }

    /// The single mutation path for an existing record: deindex, change, reindex.
    fn mutate<R>(&mut self, slot: Slot, change: impl FnOnce(&mut MediaFile) -> R) -> R {
        let file = &mut self.files[slot];
        self.index.remove_file(slot, file);
        let out = change(file);
        self.index.add(slot, file);
        out
    }
}

impl<C: FileImport> Collection<C> {
    /// Imports the catalog at `path`.
    ///
    /// Every record that validated is added, even when others were rejected;
    /// in that case the rejected records are reported through
    /// [`MediaError::ValidationFailed`] after the valid ones are in.
    pub fn load(&mut self, path: &str) -> Result<usize> {
        let outcome = self.codec.import(path)?;
        let loaded = outcome.files.len();
        for file in outcome.files {
            self.add(file);
        }

        if !outcome.failures.is_empty() {
            warn!(path, loaded, rejected = outcome.failures.len(), "partial load");
            return Err(MediaError::ValidationFailed(outcome.failures));
        }

        info!(path, loaded, "catalog loaded");
        Ok(loaded)
    }
}

impl<C: FileExport> Collection<C> {
    pub fn save(&self, path: &str) -> Result<()> {
        self.save_files(path, &self.files)
    }

    /// Writes an arbitrary subset, such as a previous search result.
    pub fn save_files(&self, path: &str, files: &[MediaFile]) -> Result<()> {
        self.codec.write(path, files)?;
        info!(path, count = files.len(), "catalog saved");
        Ok(())
    }
}

impl<C> fmt::Display for Collection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Collection contains {} files.", self.files.len())
    }
}

impl<C> fmt::Debug for Collection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("files", &self.files)
            .field("terms", &self.index.len())
            .finish()
    }
}
