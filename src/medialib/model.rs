use crate::error::ValidationError;
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A keyword/value descriptor attached to a file. The value is what gets indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    pub keyword: String,
    pub value: String,
}

impl Metadata {
    pub fn new(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.keyword, self.value)
    }
}

/// The closed set of file variants.
///
/// This is the single registry mapping the serialized type tag to a variant and
/// its required keywords; import and export both go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Document,
    Image,
    Audio,
    Video,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        FileKind::Document,
        FileKind::Image,
        FileKind::Audio,
        FileKind::Video,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            FileKind::Document => "document",
            FileKind::Image => "image",
            FileKind::Audio => "audio",
            FileKind::Video => "video",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn required_keywords(self) -> &'static [&'static str] {
        match self {
            FileKind::Document => &["creator"],
            FileKind::Image => &["creator", "resolution"],
            FileKind::Audio => &["creator", "runtime"],
            FileKind::Video => &["creator", "runtime", "resolution"],
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A catalogued media file.
///
/// `filename` is the record's identity inside a [`crate::collection::Collection`].
/// Constructing a file never validates it; use [`MediaFile::validate`] when the
/// metadata comes from an untrusted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub kind: FileKind,
    pub path: String,
    pub filename: String,
    pub metadata: Vec<Metadata>,
}

impl MediaFile {
    /// `filename` may differ from `path`, but only `path` is serialized: a
    /// saved and reloaded file takes `path` as its filename too.
    pub fn new(
        kind: FileKind,
        path: impl Into<String>,
        filename: impl Into<String>,
        metadata: Vec<Metadata>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            filename: filename.into(),
            metadata,
        }
    }

    /// Builds a file whose path and filename are both the serialized fullpath.
    pub fn from_fullpath(
        kind: FileKind,
        fullpath: impl Into<String>,
        metadata: Vec<Metadata>,
    ) -> Self {
        let fullpath = fullpath.into();
        Self::new(kind, fullpath.clone(), fullpath, metadata)
    }

    pub fn required_keywords(&self) -> &'static [&'static str] {
        self.kind.required_keywords()
    }

    pub fn is_required(&self, keyword: &str) -> bool {
        self.required_keywords().contains(&keyword)
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        validate::validate(self.required_keywords(), &self.metadata)
    }

    pub fn add(&mut self, keyword: impl Into<String>, value: impl Into<String>) {
        self.metadata.push(Metadata::new(keyword, value));
    }

    /// Collapses every entry under `keyword` into a single entry with `value`.
    pub fn edit(&mut self, keyword: &str, value: impl Into<String>) {
        self.delete(keyword);
        self.add(keyword, value);
    }

    /// Removes every entry under `keyword`, returning how many were dropped.
    pub fn delete(&mut self, keyword: &str) -> usize {
        let before = self.metadata.len();
        self.metadata.retain(|md| md.keyword != keyword);
        before - self.metadata.len()
    }

    /// Removes entries equal to the exact keyword/value pair.
    pub fn remove(&mut self, metadata: &Metadata) -> usize {
        let before = self.metadata.len();
        self.metadata.retain(|md| md != metadata);
        before - self.metadata.len()
    }

    pub fn contains(&self, metadata: &Metadata) -> bool {
        self.metadata.iter().any(|md| md == metadata)
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.metadata.iter().any(|md| md.value == value)
    }

    pub fn values<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.metadata
            .iter()
            .filter(move |md| md.keyword == keyword)
            .map(|md| md.value.as_str())
    }
}

impl fmt::Display for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)
    }
}
