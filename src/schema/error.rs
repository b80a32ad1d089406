//! Field-level diagnostics produced by schema validation.

use std::fmt;

use thiserror::Error;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The key is absent.
    Missing { expected: &'static str },
    /// The key is present but holds a value of another JSON type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// The shape matched but decoding into the target type failed.
    Decode { reason: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Missing { expected } => write!(f, "missing (expected {})", expected),
            IssueKind::WrongType { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            IssueKind::Decode { reason } => write!(f, "could not decode: {}", reason),
        }
    }
}

/// A single field that failed to match the declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Location of the field, e.g. `data[0].title`. The root is `$`.
    pub path: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Payload did not match the schema.
///
/// Holds every offending field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("payload does not match schema '{schema}': {}", summarize(.issues))]
pub struct ValidationError {
    pub schema: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(schema: &'static str, issues: Vec<FieldIssue>) -> Self {
        Self { schema, issues }
    }

    /// Issues recorded for the given path.
    pub fn issues_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a FieldIssue> + 'a {
        self.issues.iter().filter(move |issue| issue.path == path)
    }

    /// True if any issue was recorded for the given path.
    pub fn mentions(&self, path: &str) -> bool {
        self.issues_at(path).next().is_some()
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_issue() {
        let err = ValidationError::new(
            "music",
            vec![
                FieldIssue::new("album", IssueKind::Missing { expected: "string" }),
                FieldIssue::new(
                    "artist",
                    IssueKind::WrongType {
                        expected: "string",
                        found: "number",
                    },
                ),
            ],
        );

        assert_eq!(
            err.to_string(),
            "payload does not match schema 'music': album: missing (expected string); \
             artist: expected string, found number"
        );
    }

    #[test]
    fn mentions_matches_exact_path() {
        let err = ValidationError::new(
            "book",
            vec![FieldIssue::new(
                "data[0].title",
                IssueKind::Missing { expected: "string" },
            )],
        );

        assert!(err.mentions("data[0].title"));
        assert!(!err.mentions("data[0]"));
    }
}
