//! CLI output formatting.
//!
//! Information-first: each episode leads with its 1-based positional index
//! and title; identifiers only appear when there is no title to show. Each
//! command has a `format_*` function returning `Vec<String>` (pure, no I/O,
//! testable) and a `print_*` wrapper that writes to stdout.
//!
//! ```text
//! 001 First Episode
//! 002 (ep02)
//!
//! Updated index.html with 2 episodes
//! ```

use crate::generate::{Outcome, Summary};
use crate::record::Record;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One line per record: index + title, identifier in parens when untitled.
fn record_line(index: usize, record: &Record) -> String {
    if record.title.is_empty() {
        format!("{} ({})", format_index(index), record.identifier)
    } else {
        format!("{} {}", format_index(index), record.title)
    }
}

fn count_noun(n: usize) -> String {
    if n == 1 {
        "1 episode".to_string()
    } else {
        format!("{n} episodes")
    }
}

/// Format the result of a generation pass.
pub fn format_generate_output(summary: &Summary, page: &str) -> Vec<String> {
    if summary.outcome == Outcome::NoItems {
        return vec!["No episodes found".to_string()];
    }

    let mut lines: Vec<String> = summary
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| record_line(i + 1, r))
        .collect();
    lines.push(String::new());

    let count = count_noun(summary.records.len());
    lines.push(match summary.outcome {
        Outcome::Written => format!("Updated {page} with {count}"),
        Outcome::Unchanged => format!("{page} already up to date ({count})"),
        Outcome::NoItems => unreachable!(),
    });
    lines
}

pub fn print_generate_output(summary: &Summary, page: &str) {
    for line in format_generate_output(summary, page) {
        println!("{line}");
    }
}

/// Format a record list for the check command.
pub fn format_check_output(records: &[Record], page: &str) -> Vec<String> {
    let mut lines: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| record_line(i + 1, r))
        .collect();
    if records.is_empty() {
        lines.push("No episodes found".to_string());
    }
    lines.push(String::new());
    lines.push(format!("Container markers OK in {page}"));
    lines
}

pub fn print_check_output(records: &[Record], page: &str) {
    for line in format_check_output(records, page) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(identifier: &str, title: &str) -> Record {
        Record {
            identifier: identifier.to_string(),
            title: title.to_string(),
            description: String::new(),
            designer: None,
            external_link: None,
            media_file: None,
        }
    }

    fn summary(records: Vec<Record>, outcome: Outcome) -> Summary {
        Summary { records, outcome }
    }

    #[test]
    fn written_pass_lists_episodes_and_count() {
        let s = summary(
            vec![record("ep01", "First"), record("ep02", "Second")],
            Outcome::Written,
        );
        let lines = format_generate_output(&s, "index.html");
        assert_eq!(lines[0], "001 First");
        assert_eq!(lines[1], "002 Second");
        assert_eq!(lines.last().unwrap(), "Updated index.html with 2 episodes");
    }

    #[test]
    fn untitled_record_shows_identifier_in_parens() {
        let s = summary(vec![record("ep07", "")], Outcome::Written);
        let lines = format_generate_output(&s, "index.html");
        assert_eq!(lines[0], "001 (ep07)");
        assert_eq!(lines.last().unwrap(), "Updated index.html with 1 episode");
    }

    #[test]
    fn no_items_reported_as_condition_not_error() {
        let s = summary(vec![], Outcome::NoItems);
        assert_eq!(
            format_generate_output(&s, "index.html"),
            vec!["No episodes found".to_string()]
        );
    }

    #[test]
    fn unchanged_pass_says_up_to_date() {
        let s = summary(vec![record("ep01", "First")], Outcome::Unchanged);
        let lines = format_generate_output(&s, "index.html");
        assert_eq!(
            lines.last().unwrap(),
            "index.html already up to date (1 episode)"
        );
    }

    #[test]
    fn check_output_confirms_markers() {
        let lines = format_check_output(&[record("ep01", "First")], "index.html");
        assert_eq!(lines[0], "001 First");
        assert_eq!(lines.last().unwrap(), "Container markers OK in index.html");
    }
}
