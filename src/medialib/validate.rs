//! Required-field validation.
//!
//! A [`ValidatorSuite`] holds one [`KeywordValidator`] per required keyword and
//! runs all of them, collecting every missing field instead of stopping at the
//! first one. Only the presence of a keyword matters; its value is never checked.

use crate::error::ValidationError;
use crate::model::{FileKind, Metadata};

/// Checks that at least one metadata entry carries a given keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordValidator {
    keyword: String,
}

impl KeywordValidator {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn check(&self, metadata: &[Metadata]) -> Result<(), ValidationError> {
        if metadata.iter().any(|md| md.keyword == self.keyword) {
            Ok(())
        } else {
            Err(ValidationError::missing(&self.keyword))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorSuite {
    validators: Vec<KeywordValidator>,
}

impl ValidatorSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_keywords(keywords: &[&str]) -> Self {
        Self {
            validators: keywords.iter().map(|k| KeywordValidator::new(*k)).collect(),
        }
    }

    pub fn for_kind(kind: FileKind) -> Self {
        Self::for_keywords(kind.required_keywords())
    }

    pub fn add(&mut self, validator: KeywordValidator) {
        self.validators.push(validator);
    }

    /// Runs every validator; errors come back in validator order.
    pub fn validate(&self, metadata: &[Metadata]) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|v| v.check(metadata).err())
            .collect()
    }
}

pub fn validate(required: &[&str], metadata: &[Metadata]) -> Vec<ValidationError> {
    ValidatorSuite::for_keywords(required).validate(metadata)
}
