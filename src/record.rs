//! Description file parsing.
//!
//! Each episode folder carries one plain-text description file with four
//! recognized line-prefix tags (`Title:`, `Description:`, `Designer:`,
//! `Link:` by default — labels are configurable). Everything after a tag is
//! free-form UTF-8. Matching is on the literal label string, not a general
//! key:value grammar, and unrecognized lines outside the description section
//! are ignored.
//!
//! ## Description continuation
//!
//! The description tag opens a section: subsequent lines accumulate into the
//! description until the next recognized tag line. Blank lines inside the
//! section are preserved as paragraph breaks, so a description written as
//! blank-line-separated paragraphs round-trips exactly. Non-blank
//! continuation lines always start a new line, never concatenate inline.

use crate::config::TagConfig;
use serde::Serialize;

/// Parsed data for one episode, built fresh on every generation run.
///
/// `identifier` is the episode's directory name. It is never displayed —
/// it only anchors the media path — and is unique by construction since
/// directory names are unique.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub identifier: String,
    /// Single-line title; empty when the tag is absent.
    pub title: String,
    /// Multi-line description; empty when the tag is absent.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Media filename within the episode directory, resolved to a path only
    /// at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_file: Option<String>,
}

#[derive(PartialEq)]
enum Section {
    None,
    Description,
}

/// Extract the trimmed value of a `label:` tag line, if the line carries it.
fn tag_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(str::trim)
}

/// Parse one description file's content into a [`Record`].
///
/// Tag lines set their field to the trimmed remainder; the description tag
/// opens the accumulation section, the other three close it. Accumulation
/// stops the instant a new tag line is seen, so a trailing tag is never
/// absorbed as description text.
pub fn parse_description(identifier: &str, content: &str, tags: &TagConfig) -> Record {
    let mut record = Record {
        identifier: identifier.to_string(),
        title: String::new(),
        description: String::new(),
        designer: None,
        external_link: None,
        media_file: None,
    };

    let mut section = Section::None;
    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = tag_value(line, &tags.title) {
            record.title = value.to_string();
            section = Section::None;
        } else if let Some(value) = tag_value(line, &tags.description) {
            record.description = value.to_string();
            section = Section::Description;
        } else if let Some(value) = tag_value(line, &tags.designer) {
            record.designer = non_empty(value);
            section = Section::None;
        } else if let Some(value) = tag_value(line, &tags.link) {
            record.external_link = non_empty(value);
            section = Section::None;
        } else if section == Section::Description {
            if line.is_empty() {
                // Paragraph break — preserved, not dropped
                if !record.description.is_empty() {
                    record.description.push('\n');
                }
            } else if record.description.is_empty() {
                record.description = line.to_string();
            } else {
                record.description.push('\n');
                record.description.push_str(line);
            }
        }
    }

    record
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
