//! Host document splicing.
//!
//! The host page owns everything — head, styles, the toggle script — except
//! the interior of one container `div`, which this module overwrites
//! wholesale on every pass. The splice is text-level: the page is never
//! parsed into a tree, and every byte outside the container interior is
//! preserved exactly.
//!
//! ## Locating the container
//!
//! The container's open tag must appear literally (see
//! [`SiteConfig::container_marker`](crate::config::SiteConfig::container_marker)).
//! From the end of that tag we scan forward counting balanced `<div` /
//! `</div>` tokens to find the container's own closing tag; the interior is
//! everything in between. This makes the boundary structural rather than
//! dependent on what currently sits inside the container, so an empty or
//! hand-edited interior still splices correctly.
//!
//! A `<div` token only counts when followed by `>`, `/`, or whitespace, so
//! `<divider>` is not an open tag.
//!
//! ## Idempotence
//!
//! The output interior is a pure function of the fragment list and the
//! container line's indentation, so re-splicing the output with the same
//! fragments reproduces it byte for byte.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("container marker {0:?} not found in host document")]
    MissingContainer(String),
    #[error("container opened by {0:?} is never closed")]
    UnbalancedContainer(String),
}

/// Byte span of a container's interior, plus the indentation of the line
/// the open marker sits on.
#[derive(Debug, PartialEq, Eq)]
pub struct Region {
    /// First byte after the open marker.
    pub interior_start: usize,
    /// First byte of the container's closing `</div>` tag.
    pub interior_end: usize,
    /// Leading whitespace of the marker's line; empty if the marker does
    /// not start its line.
    pub indent: String,
}

/// Locate the container region bounded by `marker` and its balancing close.
pub fn locate_container(doc: &str, marker: &str) -> Result<Region, SpliceError> {
    let open = doc
        .find(marker)
        .ok_or_else(|| SpliceError::MissingContainer(marker.to_string()))?;
    let interior_start = open + marker.len();

    let mut depth = 1usize;
    let mut pos = interior_start;
    let interior_end = loop {
        let next_open = find_div_open(doc, pos);
        let next_close = doc[pos..].find("</div>").map(|i| pos + i);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = o + "<div".len();
            }
            (_, Some(c)) => {
                depth -= 1;
                if depth == 0 {
                    break c;
                }
                pos = c + "</div>".len();
            }
            (_, None) => {
                return Err(SpliceError::UnbalancedContainer(marker.to_string()));
            }
        }
    };

    Ok(Region {
        interior_start,
        interior_end,
        indent: line_indent(doc, open),
    })
}

/// Find the next `<div` open-tag token at or after `from`.
fn find_div_open(doc: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(i) = doc[pos..].find("<div") {
        let at = pos + i;
        let after = at + "<div".len();
        match doc.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(at),
            None => return None,
            _ => pos = after,
        }
    }
    None
}

/// Leading whitespace of the line containing byte offset `at`.
fn line_indent(doc: &str, at: usize) -> String {
    let line_start = doc[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &doc[line_start..at];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix.to_string()
    } else {
        String::new()
    }
}

/// Replace the container interior with the rendered fragments.
///
/// Fragments land one per line, indented one level past the container line;
/// the closing tag keeps the container's own indentation. On any error the
/// document is returned untouched to the caller as an `Err` — nothing is
/// half-spliced.
pub fn splice(doc: &str, marker: &str, fragments: &[String]) -> Result<String, SpliceError> {
    let region = locate_container(doc, marker)?;
    let child_indent = format!("{}    ", region.indent);

    let mut out = String::with_capacity(doc.len());
    out.push_str(&doc[..region.interior_start]);
    out.push('\n');
    for fragment in fragments {
        out.push_str(&child_indent);
        out.push_str(fragment);
        out.push('\n');
    }
    out.push_str(&region.indent);
    out.push_str(&doc[region.interior_end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "<div class=\"container\">";

    fn page(interior: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head><style>.x{{}}</style></head>\n<body>\n    \
             <div class=\"container\">{interior}</div>\n    <script>var t = 1;</script>\n</body>\n</html>\n"
        )
    }

    #[test]
    fn missing_marker_is_an_error() {
        let err = locate_container("<html><body></body></html>", MARKER).unwrap_err();
        assert!(matches!(err, SpliceError::MissingContainer(_)));
    }

    #[test]
    fn unclosed_container_is_an_error() {
        let doc = "<body>\n<div class=\"container\">\n<div class=\"episode\"></div>\n</body>";
        let err = locate_container(doc, MARKER).unwrap_err();
        assert!(matches!(err, SpliceError::UnbalancedContainer(_)));
    }

    #[test]
    fn interior_spans_to_balancing_close() {
        let doc = page("\n        <div class=\"episode\"><div></div></div>\n    ");
        let region = locate_container(&doc, MARKER).unwrap();
        let interior = &doc[region.interior_start..region.interior_end];
        assert!(interior.contains("episode"));
        // The close we stop at belongs to the container, not a nested div
        assert!(doc[region.interior_end..].starts_with("</div>\n    <script>"));
    }

    #[test]
    fn divider_tag_is_not_an_open_token() {
        let doc = page("\n        <divider>text</divider>\n    ");
        let region = locate_container(&doc, MARKER).unwrap();
        assert!(doc[region.interior_end..].starts_with("</div>\n    <script>"));
    }

    #[test]
    fn indent_taken_from_marker_line() {
        let doc = page("");
        let region = locate_container(&doc, MARKER).unwrap();
        assert_eq!(region.indent, "    ");
    }

    #[test]
    fn splice_preserves_bytes_outside_interior() {
        let doc = page("\n        <div class=\"episode\">old</div>\n    ");
        let fragments = vec!["<div class=\"episode\">new</div>".to_string()];
        let out = splice(&doc, MARKER, &fragments).unwrap();

        let marker_end = doc.find(MARKER).unwrap() + MARKER.len();
        assert_eq!(&out[..marker_end], &doc[..marker_end]);
        let old_tail = &doc[doc.find("</div>\n    <script>").unwrap()..];
        assert!(out.ends_with(old_tail));
        assert!(out.contains("new"));
        assert!(!out.contains("old"));
    }

    #[test]
    fn fragments_land_one_per_line_indented() {
        let doc = page("");
        let fragments = vec!["<div>a</div>".to_string(), "<div>b</div>".to_string()];
        let out = splice(&doc, MARKER, &fragments).unwrap();
        assert!(out.contains("\n        <div>a</div>\n        <div>b</div>\n    </div>"));
    }

    #[test]
    fn resplice_is_byte_identical() {
        let doc = page("\n        <div class=\"episode\">seed</div>\n    ");
        let fragments = vec![
            "<div class=\"episode\"><div class=\"episode-content\">a</div></div>".to_string(),
            "<div class=\"episode\">b</div>".to_string(),
        ];
        let once = splice(&doc, MARKER, &fragments).unwrap();
        let twice = splice(&once, MARKER, &fragments).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_interior_still_splices() {
        let doc = page("");
        let out = splice(&doc, MARKER, &["<div>x</div>".to_string()]).unwrap();
        assert!(out.contains("<div>x</div>"));
    }

    #[test]
    fn empty_fragment_list_leaves_consistent_document() {
        let doc = page("\n        <div>old</div>\n    ");
        let out = splice(&doc, MARKER, &[]).unwrap();
        // Still locatable and re-spliceable
        let again = splice(&out, MARKER, &["<div>x</div>".to_string()]).unwrap();
        assert!(again.contains("<div>x</div>"));
        assert!(!out.contains("old"));
    }
}
