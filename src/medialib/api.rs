//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! library operation, whatever the front end.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: record indexes arrive as text and are parsed here
//! - **Owns the result set**: the records listed by the last command that
//!   produced any, which `add`, `set`, `del` and `save-search` address by
//!   position
//!
//! It does no I/O of its own beyond what the codec does, and never formats
//! output. Commands return [`CmdResult`]; rendering belongs to the caller.
//!
//! ## Generic Over the Codec
//!
//! `LibraryApi<C>` takes the collection's codec as a parameter:
//! - Production: `LibraryApi<JsonCodec>`
//! - Testing: `LibraryApi<InMemoryCodec>`

use crate::codec::json::JsonCodec;
use crate::codec::{FileExport, FileImport};
use crate::collection::Collection;
use crate::commands::{self, CmdResult};
use crate::error::{MediaError, Result};
use crate::model::MediaFile;

pub struct LibraryApi<C = JsonCodec> {
    collection: Collection<C>,
    last: Vec<MediaFile>,
}

impl<C: FileImport + FileExport> LibraryApi<C> {
    pub fn new(codec: C) -> Self {
        Self {
            collection: Collection::with_codec(codec),
            last: Vec::new(),
        }
    }

    pub fn load<S: AsRef<str>>(&mut self, paths: &[S]) -> Result<CmdResult> {
        commands::load::run(&mut self.collection, paths)
    }

    pub fn list<S: AsRef<str>>(&mut self, terms: &[S]) -> Result<CmdResult> {
        let result = commands::list::run(&self.collection, terms)?;
        Ok(self.remember(result))
    }

    pub fn add_metadata<S: AsRef<str>>(&mut self, index: &str, pairs: &[S]) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::metadata::add(&mut self.collection, &self.last, index, pairs)?;
        Ok(self.remember(result))
    }

    pub fn set_metadata<S: AsRef<str>>(&mut self, index: &str, pairs: &[S]) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::metadata::set(&mut self.collection, &self.last, index, pairs)?;
        Ok(self.remember(result))
    }

    pub fn delete_metadata<S: AsRef<str>>(
        &mut self,
        index: &str,
        keywords: &[S],
    ) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::metadata::delete(&mut self.collection, &self.last, index, keywords)?;
        Ok(self.remember(result))
    }

    pub fn save(&self, path: &str) -> Result<CmdResult> {
        commands::save::run(&self.collection, path)
    }

    pub fn save_search(&self, path: &str) -> Result<CmdResult> {
        commands::save::run_search(&self.collection, path, &self.last)
    }

    pub fn collection(&self) -> &Collection<C> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection<C> {
        &mut self.collection
    }

    /// The records the next index-addressed command works on.
    pub fn last_results(&self) -> &[MediaFile] {
        &self.last
    }

    fn remember(&mut self, result: CmdResult) -> CmdResult {
        self.last = result.listed.clone();
        result
    }
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| MediaError::Api(format!("\"{}\" is not a record index", raw)))
}
