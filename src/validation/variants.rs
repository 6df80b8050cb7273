/*!
 * Variant validation.
 *
 * A variant record lists alternative readings of one passage across
 * versions. The field must be present. A list with fewer than two
 * readings, or a value that is not a list at all, is tolerated as partial
 * data and only warned about.
 */

use serde_json::{Map, Value};
use std::path::Path;

use crate::errors::Result;
use crate::file_utils::FileManager;
use crate::records::{RecordKind, missing_fields};

use super::issues::{IssueKind, IssueLog};
use super::scan::scan_records;

/// Minimum number of readings a variant record should list
pub const MIN_VARIANTS: usize = 2;

/// Check the variant file and return how many lines parsed as records
pub fn check_variant_file(path: &Path, issues: &mut IssueLog) -> Result<usize> {
    let file = FileManager::display_name(path);
    let mut count = 0;

    scan_records(path, issues, |line, record, issues| {
        count += 1;
        if let Some(kind) = check_variant_record(&file, line, &record) {
            issues.record(kind);
        }
    })?;

    Ok(count)
}

/// Inspect the `variants` field of one record
fn check_variant_record(
    file: &str,
    line: usize,
    record: &Map<String, Value>,
) -> Option<IssueKind> {
    if missing_fields(record, RecordKind::Variant.required_fields())
        .next()
        .is_some()
    {
        return Some(IssueKind::MissingVariants {
            file: file.to_string(),
            line,
        });
    }

    match record.get("variants") {
        Some(Value::Array(readings)) if readings.len() < MIN_VARIANTS => {
            Some(IssueKind::TooFewVariants {
                file: file.to_string(),
                line,
                count: readings.len(),
            })
        }
        Some(Value::Array(_)) | None => None,
        Some(_) => Some(IssueKind::VariantsNotList {
            file: file.to_string(),
            line,
        }),
    }
}
