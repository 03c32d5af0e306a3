//! Split file contents into front matter and body.
//!
//! Splitting is a three-state machine. Only the first `---` pair at the top of
//! the file is a metadata block; once the body starts, delimiter-looking lines
//! (fenced samples, horizontal rules) are body text. A byte order mark and
//! blank lines may come before the opening delimiter.

use serde_yaml::Value;
use thiserror::Error;

use super::{Document, Metadata};

/// Line prefix that opens and closes the front matter block
pub const DELIMITER: &str = "---";

const BOM: char = '\u{feff}';

/// Errors from decoding the front matter block
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("{0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("front matter must be a mapping of keys to values")]
    NotAMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    AwaitingFirstBoundary,
    InMetadataBlock,
    InBody,
}

fn is_boundary(line: &str) -> bool {
    line.starts_with(DELIMITER)
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}

/// Re-join `contents` line by line, so every line ends with `\n`.
fn normalize_lines(contents: &str) -> String {
    let mut out = String::with_capacity(contents.len() + 1);
    for line in contents.lines() {
        push_line(&mut out, line);
    }
    out
}

/// Decode the accumulated block. An empty block yields default metadata.
pub fn decode_metadata(block: &str) -> Result<Metadata, SplitError> {
    if block.trim().is_empty() {
        return Ok(Metadata::default());
    }
    let value: Value = serde_yaml::from_str(block)?;
    match value {
        Value::Null => Ok(Metadata::default()),
        Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        _ => Err(SplitError::NotAMapping),
    }
}

/// Split `contents` into a [`Document`].
///
/// A file whose first non-blank line is not a delimiter, or whose block is
/// never closed, has no front matter: the metadata is default and the body is
/// the whole content.
pub fn split(contents: &str) -> Result<Document, SplitError> {
    let mut state = SplitState::AwaitingFirstBoundary;
    let mut block = String::new();
    let mut body = String::new();
    let mut metadata = None;

    let text = contents.strip_prefix(BOM).unwrap_or(contents);
    for line in text.lines() {
        match state {
            SplitState::AwaitingFirstBoundary => {
                if is_boundary(line) {
                    state = SplitState::InMetadataBlock;
                } else if !line.trim().is_empty() {
                    state = SplitState::InBody;
                }
            }
            SplitState::InMetadataBlock => {
                if is_boundary(line) {
                    metadata = Some(decode_metadata(&block)?);
                    state = SplitState::InBody;
                } else {
                    push_line(&mut block, line);
                }
            }
            SplitState::InBody => push_line(&mut body, line),
        }
    }

    Ok(match metadata {
        Some(metadata) => Document {
            metadata,
            body,
            front_matter: true,
        },
        None => Document::plain(normalize_lines(contents)),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn splits_metadata_and_body() {
        let doc = split("---\nid: guide-intro\ntitle: Introduction\n---\n# Hello\n").unwrap();
        assert!(doc.front_matter);
        assert_eq!(doc.metadata.id, "guide-intro");
        assert_eq!(doc.metadata.title, "Introduction");
        assert!(doc.metadata.redirect_from.is_empty());
        assert_eq!(doc.body, "# Hello\n");
    }

    #[test]
    fn no_delimiter_keeps_whole_content_as_body() {
        let content = "# Title\n\nJust prose.\n";
        let doc = split(content).unwrap();
        assert!(!doc.front_matter);
        assert_eq!(doc.metadata, Metadata::default());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn delimiter_in_body_is_not_a_boundary() {
        let content = "---\nid: a\n---\nIntro\n```yaml\n---\nid: fake\n---\n```\n";
        let doc = split(content).unwrap();
        assert_eq!(doc.metadata.id, "a");
        assert_eq!(doc.body, "Intro\n```yaml\n---\nid: fake\n---\n```\n");
    }

    #[test]
    fn body_delimiters_ignored_even_without_id() {
        let content = "---\ntitle: No id\n---\nabove\n---\nbelow\n";
        let doc = split(content).unwrap();
        assert_eq!(doc.metadata.title, "No id");
        assert_eq!(doc.body, "above\n---\nbelow\n");
    }

    #[test]
    fn later_horizontal_rule_without_front_matter_stays_in_body() {
        let content = "Intro\n---\nid: nope\n---\n";
        let doc = split(content).unwrap();
        assert!(!doc.front_matter);
        assert_eq!(doc.metadata.id, "");
        assert_eq!(doc.body, content);
    }

    #[test]
    fn blank_lines_before_the_block_are_dropped() {
        let doc = split("\n\n---\nid: a\ntitle: T\n---\nbody\n").unwrap();
        assert!(doc.front_matter);
        assert_eq!(doc.metadata.id, "a");
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn byte_order_mark_before_the_block_is_dropped() {
        let doc = split("\u{feff}---\nid: a\n---\nbody\n").unwrap();
        assert!(doc.front_matter);
        assert_eq!(doc.metadata.id, "a");
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn blank_lines_without_a_block_stay_in_body() {
        let content = "\n\n# Title\n";
        let doc = split(content).unwrap();
        assert!(!doc.front_matter);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn unclosed_block_is_treated_as_body() {
        let content = "---\nid: a\nno closing line\n";
        let doc = split(content).unwrap();
        assert!(!doc.front_matter);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn empty_block_yields_default_metadata() {
        let doc = split("---\n---\nbody\n").unwrap();
        assert!(doc.front_matter);
        assert_eq!(doc.metadata, Metadata::default());
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn missing_trailing_newline_is_normalized() {
        let doc = split("---\nid: a\n---\nline one\nline two").unwrap();
        assert_eq!(doc.body, "line one\nline two\n");
    }

    #[test]
    fn crlf_line_endings_are_normalized() {
        let doc = split("---\r\nid: a\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(doc.metadata.id, "a");
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn prefixed_delimiter_lines_count_as_boundaries() {
        let doc = split("--- \nid: a\n----\nbody\n").unwrap();
        assert_eq!(doc.metadata.id, "a");
        assert_eq!(doc.body, "body\n");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = split("---\nid: [unclosed\n---\nbody\n").unwrap_err();
        assert!(matches!(err, SplitError::InvalidYaml(_)));
    }

    #[test]
    fn scalar_front_matter_is_rejected() {
        let err = split("---\njust a string\n---\nbody\n").unwrap_err();
        assert!(matches!(err, SplitError::NotAMapping));
    }

    #[test]
    fn empty_file_has_empty_body() {
        let doc = split("").unwrap();
        assert!(!doc.front_matter);
        assert_eq!(doc.body, "");
    }
}
