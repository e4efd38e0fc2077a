//! Plain-text rendering of command results.
//!
//! Everything returns a `String` so the prompt loop can write to any sink.

use colored::Colorize;
use medialib::commands::{CmdMessage, MessageLevel};
use medialib::model::MediaFile;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const KIND_WIDTH: usize = 9;
const METADATA_INDENT: usize = 8;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("{}\n", format!("Error: {}", error).red())
}

/// One line per file (`index. kind filename`), its metadata indented below.
pub fn render_files(files: &[MediaFile]) -> String {
    let index_width = files.len().saturating_sub(1).to_string().len();
    let mut output = String::new();

    for (i, file) in files.iter().enumerate() {
        let idx = format!("{:>width$}. ", i, width = index_width);
        let kind = format!("{:<width$}", file.kind.tag(), width = KIND_WIDTH);
        let available = LINE_WIDTH.saturating_sub(idx.width() + kind.width());
        let name = truncate_to_width(&file.filename, available);

        output.push_str(&format!("{}{}{}\n", idx.yellow(), kind.dimmed(), name.bold()));

        for metadata in &file.metadata {
            let line = truncate_to_width(
                &metadata.to_string(),
                LINE_WIDTH.saturating_sub(METADATA_INDENT),
            );
            output.push_str(&format!("{}{}\n", " ".repeat(METADATA_INDENT), line));
        }
    }

    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialib::model::{FileKind, Metadata};

    #[test]
    fn test_render_files_shows_index_kind_and_metadata() {
        let files = vec![
            MediaFile::from_fullpath(
                FileKind::Document,
                "/docs/cv.ext",
                vec![Metadata::new("creator", "Paul")],
            ),
            MediaFile::from_fullpath(
                FileKind::Audio,
                "/music/song.ext",
                vec![
                    Metadata::new("creator", "Hamza"),
                    Metadata::new("runtime", "3mins"),
                ],
            ),
        ];

        let output = render_files(&files);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("0. "));
        assert!(lines[0].contains("/docs/cv.ext"));
        assert!(lines[2].contains("1. "));
        assert!(lines[2].contains("audio"));
        assert!(lines[4].contains("runtime: 3mins"));
    }

    #[test]
    fn test_render_files_empty() {
        assert_eq!(render_files(&[]), "");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // wide characters count double
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_render_messages_keeps_order() {
        let messages = vec![
            CmdMessage::success("Loaded 2 files from a.json"),
            CmdMessage::warning("careful"),
        ];
        let output = render_messages(&messages);
        let first = output.find("Loaded 2 files").unwrap();
        let second = output.find("careful").unwrap();
        assert!(first < second);
        assert_eq!(output.lines().count(), 2);
    }
}
