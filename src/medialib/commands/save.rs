use crate::codec::FileExport;
use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MediaError, Result};
use crate::model::MediaFile;

/// Writes the whole collection to `path`.
pub fn run<C: FileExport>(collection: &Collection<C>, path: &str) -> Result<CmdResult> {
    collection.save(path)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} files to {}",
        collection.len(),
        path
    ))))
}

/// Writes only the previous result set to `path`.
pub fn run_search<C: FileExport>(
    collection: &Collection<C>,
    path: &str,
    previous: &[MediaFile],
) -> Result<CmdResult> {
    if previous.is_empty() {
        return Err(MediaError::Api("No previous results to save.".to_string()));
    }
    collection.save_files(path, previous)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} files to {}",
        previous.len(),
        path
    ))))
}
