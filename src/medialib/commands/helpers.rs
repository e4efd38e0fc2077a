use crate::collection::Collection;
use crate::error::{MediaError, Result};
use crate::model::{MediaFile, Metadata};

/// Picks record `index` (0-based) out of the previous result set.
pub fn resolve_index(previous: &[MediaFile], index: usize) -> Result<&MediaFile> {
    if previous.is_empty() {
        return Err(MediaError::Api("No previous results to work from.".to_string()));
    }
    previous.get(index).ok_or_else(|| {
        MediaError::Api(format!(
            "Index {} is out of range (0-{})",
            index,
            previous.len() - 1
        ))
    })
}

/// Turns `key value key value ...` into metadata.
pub fn parse_pairs<S: AsRef<str>>(args: &[S]) -> Result<Vec<Metadata>> {
    if args.is_empty() || args.len() % 2 != 0 {
        return Err(MediaError::Api("Expected keyword/value pairs".to_string()));
    }
    Ok(args
        .chunks(2)
        .map(|pair| Metadata::new(pair[0].as_ref(), pair[1].as_ref()))
        .collect())
}

/// Re-reads each record of a result set from the collection, dropping any
/// that are no longer there.
pub fn refresh<C>(collection: &Collection<C>, previous: &[MediaFile]) -> Vec<MediaFile> {
    previous
        .iter()
        .filter_map(|file| collection.get(&file.filename).cloned())
        .collect()
}
