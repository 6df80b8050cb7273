/*!
 * Dictionary validation.
 *
 * The dictionary is split over any number of files in one directory. The
 * directory itself must exist; its absence ends the run.
 */

use std::path::Path;

use crate::errors::Result;
use crate::file_utils::FileManager;
use crate::records::RecordKind;

use super::issues::IssueLog;
use super::scan::{check_required_fields, scan_records};

/// Per-file record counts of the dictionary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionaryTally {
    /// File name and number of records, in visiting order
    pub files: Vec<(String, usize)>,
}

impl DictionaryTally {
    /// Records across all files
    pub fn total(&self) -> usize {
        self.files.iter().map(|(_, count)| count).sum()
    }
}

/// Check one dictionary file and return how many lines parsed as records
pub fn check_dictionary_file(path: &Path, issues: &mut IssueLog) -> Result<usize> {
    let file = FileManager::display_name(path);
    let mut count = 0;

    scan_records(path, issues, |line, record, issues| {
        count += 1;
        check_required_fields(
            &file,
            line,
            &record,
            RecordKind::Dictionary.required_fields(),
            issues,
        );
    })?;

    Ok(count)
}

/// Check every dictionary file in `dir`, calling `on_file` after each one
pub fn check_dictionary_dir<F>(
    dir: &Path,
    extension: &str,
    issues: &mut IssueLog,
    mut on_file: F,
) -> Result<DictionaryTally>
where
    F: FnMut(&str, usize) -> Result<()>,
{
    let mut tally = DictionaryTally::default();

    for path in FileManager::find_files(dir, extension)? {
        let count = check_dictionary_file(&path, issues)?;
        let name = FileManager::display_name(&path);
        on_file(&name, count)?;
        tally.files.push((name, count));
    }

    Ok(tally)
}
