/*!
 * Shared record scanning used by every record family.
 */

use log::debug;
use serde_json::{Map, Value};
use std::path::Path;

use crate::errors::Result;
use crate::file_utils::FileManager;
use crate::records::{self, ParsedLine};

use super::issues::{IssueKind, IssueLog};

/// Walk every line of `path`. Lines that are not JSON objects are recorded
/// as errors; each parsed record is handed to `visit` with its line number.
pub fn scan_records<F>(path: &Path, issues: &mut IssueLog, mut visit: F) -> Result<()>
where
    F: FnMut(usize, Map<String, Value>, &mut IssueLog),
{
    let file = FileManager::display_name(path);
    debug!("Scanning {:?}", path);

    records::for_each_line(path, |line, parsed| match parsed {
        ParsedLine::Record(record) => visit(line, record, issues),
        ParsedLine::InvalidJson(err) => {
            debug!("{} line {}: {}", file, line, err);
            issues.record(IssueKind::InvalidJson { file: file.clone(), line });
        }
        ParsedLine::NotAnObject => {
            issues.record(IssueKind::NotAnObject { file: file.clone(), line });
        }
    })
}

/// Record one error per required field absent from `record`
pub fn check_required_fields(
    file: &str,
    line: usize,
    record: &Map<String, Value>,
    required: &[&str],
    issues: &mut IssueLog,
) {
    for field in records::missing_fields(record, required) {
        issues.record(IssueKind::MissingField {
            file: file.to_string(),
            line,
            field: field.to_string(),
        });
    }
}
