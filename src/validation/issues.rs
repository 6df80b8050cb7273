/*!
 * Issues found while validating records, and the log that collects them.
 */

use std::fmt;
use std::path::PathBuf;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Data is usable but incomplete
    Warning,
    /// Data is malformed
    Error,
}

impl IssueSeverity {
    /// Marker printed in front of every message of this severity
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Warning => "⚠️ ",
            Self::Error => "❌",
        }
    }
}

/// What went wrong
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// Line is not valid JSON
    InvalidJson { file: String, line: usize },
    /// Line is valid JSON but not an object
    NotAnObject { file: String, line: usize },
    /// Record lacks a required field
    MissingField {
        file: String,
        line: usize,
        field: String,
    },
    /// Sentence id seen before
    DuplicateId { id: String, file: String },
    /// Variant record has no `variants` field
    MissingVariants { file: String, line: usize },
    /// Variant record's `variants` field is not a list
    VariantsNotList { file: String, line: usize },
    /// Variant record lists fewer than two readings
    TooFewVariants {
        file: String,
        line: usize,
        count: usize,
    },
    /// Optional input file does not exist
    MissingFile { label: String, path: PathBuf },
}

impl IssueKind {
    /// Severity of this kind of issue
    pub fn severity(&self) -> IssueSeverity {
        match self {
            Self::VariantsNotList { .. }
            | Self::TooFewVariants { .. }
            | Self::MissingFile { .. } => IssueSeverity::Warning,
            _ => IssueSeverity::Error,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { file, line } => {
                write!(f, "{} line {}: invalid JSON format", file, line)
            }
            Self::NotAnObject { file, line } => {
                write!(f, "{} line {}: record is not a JSON object", file, line)
            }
            Self::MissingField { file, line, field } => {
                write!(f, "{} line {}: missing field: {}", file, line, field)
            }
            Self::DuplicateId { id, file } => {
                write!(f, "Duplicate sentence ID: {} in {}", id, file)
            }
            Self::MissingVariants { file, line } => {
                write!(f, "{} line {}: missing variants field", file, line)
            }
            Self::VariantsNotList { file, line } => {
                write!(f, "{} line {}: variants field is not a list", file, line)
            }
            Self::TooFewVariants { file, line, count } => {
                write!(
                    f,
                    "{} line {}: variants lists {} version(s), expected at least 2",
                    file, line, count
                )
            }
            Self::MissingFile { label, path } => {
                write!(f, "{} file not found: {}", label, path.display())
            }
        }
    }
}

/// A single validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn severity(&self) -> IssueSeverity {
        self.kind.severity()
    }
}

impl From<IssueKind> for ValidationIssue {
    fn from(kind: IssueKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity().marker(), self.kind)
    }
}

/// Errors and warnings in the order they were found
#[derive(Debug, Clone, Default)]
pub struct IssueLog {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue in the list matching its severity
    pub fn record(&mut self, kind: IssueKind) {
        let issue = ValidationIssue::from(kind);
        match issue.severity() {
            IssueSeverity::Error => self.errors.push(issue),
            IssueSeverity::Warning => self.warnings.push(issue),
        }
    }

    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    /// True when nothing at all was recorded
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
