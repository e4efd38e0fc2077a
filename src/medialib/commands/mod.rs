//! # Commands
//!
//! One module per user-facing command. Each `run` takes the collection, plus
//! the previous result set when the command addresses records by their
//! position in it, and returns a [`CmdResult`]. Nothing here prints.
//!
//! The result set is passed explicitly: a command that produces records puts
//! them in [`CmdResult::listed`], and the caller hands that list to the next
//! command that needs it.

use crate::model::MediaFile;

pub mod helpers;
pub mod list;
pub mod load;
pub mod metadata;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records produced by the command; the next command's result set.
    pub listed: Vec<MediaFile>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, files: Vec<MediaFile>) -> Self {
        self.listed = files;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}
