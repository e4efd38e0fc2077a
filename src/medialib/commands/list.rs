use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::collections::HashSet;

/// Lists every record, or the records matching any of `terms`.
///
/// Matches keep collection order and appear once even when several terms hit.
pub fn run<C, S: AsRef<str>>(collection: &Collection<C>, terms: &[S]) -> Result<CmdResult> {
    if terms.is_empty() {
        let mut result = CmdResult::default().with_listed(collection.all().to_vec());
        if collection.is_empty() {
            result.add_message(CmdMessage::info("The collection is empty."));
        }
        return Ok(result);
    }

    let hits: HashSet<&str> = terms
        .iter()
        .flat_map(|term| collection.search(term.as_ref()))
        .map(|file| file.filename.as_str())
        .collect();

    let listed: Vec<_> = collection
        .all()
        .iter()
        .filter(|file| hits.contains(file.filename.as_str()))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let joined: Vec<&str> = terms.iter().map(|t| t.as_ref()).collect();
        result.add_message(CmdMessage::info(format!(
            "No files match {}",
            joined.join(" or ")
        )));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileKind, MediaFile, Metadata};

    fn collection() -> Collection {
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
                Metadata::new("creator", "Hamza"),
                Metadata::new("runtime", "3mins"),
            ],
        ));
        collection.add(MediaFile::from_fullpath(
            FileKind::Image,
            "/pic.ext",
            vec![
                Metadata::new("creator", "Paul"),
                Metadata::new("resolution", "1024x768"),
            ],
        ));
        collection
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed.iter().map(|f| f.filename.as_str()).collect()
    }

    #[test]
    fn no_terms_lists_everything() {
        let result = run::<_, &str>(&collection(), &[]).unwrap();
        assert_eq!(names(&result), vec!["/doc.ext", "/song.ext", "/pic.ext"]);
    }

    #[test]
    fn empty_collection_says_so() {
        let result = run::<_, &str>(&Collection::new(), &[]).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "The collection is empty.");
    }

    #[test]
    fn terms_are_or_ed_in_collection_order() {
        let collection = collection();
        let result = run(&collection, &["1024x768", "Hamza"]).unwrap();
        assert_eq!(names(&result), vec!["/song.ext", "/pic.ext"]);
    }

    #[test]
    fn overlapping_terms_list_each_file_once() {
        let collection = collection();
        let result = run(&collection, &["Paul", "1024x768"]).unwrap();
        assert_eq!(names(&result), vec!["/doc.ext", "/pic.ext"]);
    }

    #[test]
    fn no_match_says_so() {
        let result = run(&collection(), &["nobody"]).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "No files match nobody");
    }
}
