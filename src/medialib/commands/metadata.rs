//! `add`, `set` and `del`: metadata changes on one record of the previous
//! result set. Each returns that result set re-read from the collection so the
//! caller sees the change.

use crate::collection::Collection;
use crate::commands::helpers::{parse_pairs, refresh, resolve_index};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MediaError, Result};
use crate::model::MediaFile;

pub fn add<C, S: AsRef<str>>(
    collection: &mut Collection<C>,
    previous: &[MediaFile],
    index: usize,
    pairs: &[S],
) -> Result<CmdResult> {
    let filename = resolve_index(previous, index)?.filename.clone();
    let pairs = parse_pairs(pairs)?;

    let mut result = CmdResult::default();
    for metadata in pairs {
        let message = format!("Added {} to {}", metadata, filename);
        collection.add_metadata(&filename, metadata)?;
        result.add_message(CmdMessage::success(message));
    }

    Ok(result.with_listed(refresh(collection, previous)))
}

pub fn set<C, S: AsRef<str>>(
    collection: &mut Collection<C>,
    previous: &[MediaFile],
    index: usize,
    pairs: &[S],
) -> Result<CmdResult> {
    let filename = resolve_index(previous, index)?.filename.clone();
    let pairs = parse_pairs(pairs)?;

    let mut result = CmdResult::default();
    for metadata in pairs {
        let message = format!("Set {} on {}", metadata, filename);
        collection.edit_metadata(&filename, metadata)?;
        result.add_message(CmdMessage::success(message));
    }

    Ok(result.with_listed(refresh(collection, previous)))
}

/// Deletes keywords one by one; a required keyword is refused with a warning
/// and the remaining keywords are still processed.
pub fn delete<C, S: AsRef<str>>(
    collection: &mut Collection<C>,
    previous: &[MediaFile],
    index: usize,
    keywords: &[S],
) -> Result<CmdResult> {
    let filename = resolve_index(previous, index)?.filename.clone();
    if keywords.is_empty() {
        return Err(MediaError::Api("Expected at least one keyword".to_string()));
    }

    let mut result = CmdResult::default();
    for keyword in keywords {
        let keyword = keyword.as_ref();
        match collection.delete_metadata(&filename, keyword) {
            Ok(0) => result.add_message(CmdMessage::info(format!(
                "{} has no \"{}\" metadata",
                filename, keyword
            ))),
            Ok(_) => result.add_message(CmdMessage::success(format!(
                "Deleted \"{}\" from {}",
                keyword, filename
            ))),
            Err(e @ MediaError::RequiredField { .. }) => {
                result.add_message(CmdMessage::warning(e.to_string()))
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result.with_listed(refresh(collection, previous)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{FileKind, Metadata};

    fn setup() -> (Collection, Vec<MediaFile>) {
        let mut collection = Collection::new();
        collection.add(MediaFile::from_fullpath(
            FileKind::Document,
            "/doc.ext",
            vec![Metadata::new("creator", "Paul")],
        ));
        collection.add(MediaFile::from_fullpath(
            FileKind::Audio,
            "/song.ext",
            vec![
                Metadata::new("creator", "Paul"),
                Metadata::new("runtime", "3mins"),
            ],
        ));
        let previous = collection.all().to_vec();
        (collection, previous)
    }

    #[test]
    fn add_pairs_to_indexed_record() {
        let (mut collection, previous) = setup();
        let result = add(&mut collection, &previous, 1, &["foo", "bar", "baz", "qux"]).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert!(result.listed[1].contains(&Metadata::new("baz", "qux")));
        assert_eq!(collection.search("bar").len(), 1);
        assert_eq!(collection.search("qux")[0].filename, "/song.ext");
    }

    #[test]
    fn add_rejects_odd_arguments() {
        let (mut collection, previous) = setup();
        assert!(add(&mut collection, &previous, 0, &["foo"]).is_err());
        assert!(collection.search("foo").is_empty());
    }

    #[test]
    fn add_without_previous_results_fails() {
        let (mut collection, _) = setup();
        let err = add(&mut collection, &[], 0, &["foo", "bar"]).unwrap_err();
        assert!(err.to_string().contains("No previous results"));
    }

    #[test]
    fn set_replaces_value() {
        let (mut collection, previous) = setup();
        set(&mut collection, &previous, 1, &["runtime", "4mins"]).unwrap();

        assert!(collection.search("3mins").is_empty());
        assert_eq!(collection.search("4mins").len(), 1);
    }

    #[test]
    fn delete_refuses_required_but_continues() {
        let (mut collection, previous) = setup();
        add(&mut collection, &previous, 1, &["genre", "jazz"]).unwrap();

        let result = delete(&mut collection, &previous, 1, &["runtime", "genre", "mood"]).unwrap();
        let levels: Vec<MessageLevel> = result.messages.iter().map(|m| m.level).collect();
        assert_eq!(
            levels,
            vec![
                MessageLevel::Warning,
                MessageLevel::Success,
                MessageLevel::Info
            ]
        );
        assert!(collection.search("jazz").is_empty());
        assert_eq!(collection.search("3mins").len(), 1);
    }

    #[test]
    fn delete_out_of_range_fails() {
        let (mut collection, previous) = setup();
        assert!(delete(&mut collection, &previous, 5, &["foo"]).is_err());
    }
}
