use super::ImportOutcome;
use crate::error::{Result, ValidationError};
use crate::model::{FileKind, MediaFile, Metadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A metadata value as serialized: a single string, or a list when the file
/// carries several entries under the same keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    One(String),
    Many(Vec<String>),
}

impl MetadataValue {
    fn push(&mut self, value: String) {
        match self {
            MetadataValue::One(first) => {
                *self = MetadataValue::Many(vec![std::mem::take(first), value]);
            }
            MetadataValue::Many(values) => values.push(value),
        }
    }

    fn into_values(self) -> Vec<String> {
        match self {
            MetadataValue::One(value) => vec![value],
            MetadataValue::Many(values) => values,
        }
    }
}

/// One serialized file, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub fullpath: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl Record {
    pub fn from_file(file: &MediaFile) -> Self {
        let mut metadata: BTreeMap<String, MetadataValue> = BTreeMap::new();
        for md in &file.metadata {
            match metadata.get_mut(&md.keyword) {
                Some(existing) => existing.push(md.value.clone()),
                None => {
                    metadata.insert(md.keyword.clone(), MetadataValue::One(md.value.clone()));
                }
            }
        }

        Self {
            fullpath: file.path.clone(),
            kind: file.kind.tag().to_string(),
            metadata,
        }
    }

    fn metadata_entries(&self) -> Vec<Metadata> {
        self.metadata
            .iter()
            .flat_map(|(keyword, value)| {
                value
                    .clone()
                    .into_values()
                    .into_iter()
                    .map(move |v| Metadata::new(keyword.clone(), v))
            })
            .collect()
    }

    /// Validates the record against its declared type and builds the file.
    pub fn into_file(self) -> std::result::Result<MediaFile, Vec<ValidationError>> {
        let kind = FileKind::from_tag(&self.kind)
            .ok_or_else(|| vec![ValidationError::unknown_type(&self.kind)])?;

        let metadata = self.metadata_entries();
        let errors = crate::validate::validate(kind.required_keywords(), &metadata);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(MediaFile::from_fullpath(kind, self.fullpath, metadata))
    }
}

/// Parses a serialized catalog and validates every record in it.
pub fn decode(text: &str) -> Result<ImportOutcome> {
    let records: Vec<Record> = serde_json::from_str(text)?;
    let mut outcome = ImportOutcome::default();

    for record in records {
        let fullpath = record.fullpath.clone();
        match record.into_file() {
            Ok(file) => outcome.files.push(file),
            Err(errors) => {
                debug!(%fullpath, count = errors.len(), "record rejected");
                outcome.failures.entry(fullpath).or_default().extend(errors);
            }
        }
    }

    Ok(outcome)
}

pub fn encode(files: &[MediaFile], pretty: bool) -> Result<String> {
    let records: Vec<Record> = files.iter().map(Record::from_file).collect();
    let text = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(text)
}
