/*!
 * Annotation validation: required fields only, no uniqueness check.
 */

use std::path::Path;

use crate::errors::Result;
use crate::file_utils::FileManager;
use crate::records::RecordKind;

use super::issues::IssueLog;
use super::scan::{check_required_fields, scan_records};

/// Check the annotation file and return how many lines parsed as records
pub fn check_annotation_file(path: &Path, issues: &mut IssueLog) -> Result<usize> {
    let file = FileManager::display_name(path);
    let mut count = 0;

    scan_records(path, issues, |line, record, issues| {
        count += 1;
        check_required_fields(
            &file,
            line,
            &record,
            RecordKind::Annotation.required_fields(),
            issues,
        );
    })?;

    Ok(count)
}
