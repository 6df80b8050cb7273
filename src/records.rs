/*!
 * Record families of the corpus and line-level JSON parsing.
 *
 * Every data file is line-delimited JSON: each line must hold one JSON
 * object. This module knows which fields each record family requires and
 * how to walk a file line by line without holding it in memory.
 */

use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{CorpusError, Result};

/// Required fields of a sentence record
pub const SENTENCE_FIELDS: &[&str] = &[
    "id",
    "versionId",
    "chapterId",
    "chapterNumber",
    "sentenceIndex",
    "text",
    "punctuation",
];

/// Required fields of an annotation record
pub const ANNOTATION_FIELDS: &[&str] = &[
    "id",
    "type",
    "subType",
    "source",
    "targetVersion",
    "targetChapter",
    "content",
];

/// Required fields of a variant record
pub const VARIANT_FIELDS: &[&str] = &["variants"];

/// Required fields of a dictionary record
pub const DICTIONARY_FIELDS: &[&str] = &["id", "term", "type", "definition", "explanation"];

/// Record families found in the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Sentence,
    Annotation,
    Variant,
    Dictionary,
}

impl RecordKind {
    /// Fields every record of this family must carry
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Sentence => SENTENCE_FIELDS,
            Self::Annotation => ANNOTATION_FIELDS,
            Self::Variant => VARIANT_FIELDS,
            Self::Dictionary => DICTIONARY_FIELDS,
        }
    }
}

/// Outcome of parsing one line of a record file
#[derive(Debug)]
pub enum ParsedLine {
    /// The line is a JSON object
    Record(Map<String, Value>),
    /// The line is not valid JSON
    InvalidJson(serde_json::Error),
    /// The line is valid JSON but not an object
    NotAnObject,
}

/// Parse a single line as a JSON object
pub fn parse_line(line: &str) -> ParsedLine {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(record)) => ParsedLine::Record(record),
        Ok(_) => ParsedLine::NotAnObject,
        Err(err) => ParsedLine::InvalidJson(err),
    }
}

/// Required fields absent from `record`, in declaration order
pub fn missing_fields<'a>(
    record: &'a Map<String, Value>,
    required: &'a [&'a str],
) -> impl Iterator<Item = &'a str> + 'a {
    required
        .iter()
        .copied()
        .filter(move |field| !record.contains_key(*field))
}

/// Read `path` line by line, handing each parsed line and its 1-based
/// line number to `visit`. The file is closed before this returns.
pub fn for_each_line<P, F>(path: P, mut visit: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(usize, ParsedLine),
{
    let path = path.as_ref();
    let read_error = |source| CorpusError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(read_error)?);
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(read_error)?;
        visit(index + 1, parse_line(&line));
    }

    Ok(())
}
