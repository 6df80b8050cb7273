/*!
 * Sentence validation.
 *
 * Sentences live in one file per chapter, grouped into one directory per
 * version. Besides the required fields, every sentence `id` must be unique
 * across all versions and chapters.
 */

use log::debug;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::errors::Result;
use crate::file_utils::FileManager;
use crate::records::RecordKind;

use super::issues::{IssueKind, IssueLog};
use super::scan::{check_required_fields, scan_records};

/// Tracks sentence ids across every chapter file of a run
#[derive(Debug, Default)]
pub struct SentenceChecker {
    seen_ids: HashSet<String>,
}

impl SentenceChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every chapter file of every version under `versions_dir`.
    ///
    /// A missing `versions_dir` is an error; entries that are not
    /// directories or whose name ends with `skip_suffix` are ignored.
    pub fn check_versions(
        &mut self,
        versions_dir: &Path,
        skip_suffix: &str,
        extension: &str,
        issues: &mut IssueLog,
    ) -> Result<()> {
        for version_dir in FileManager::list_subdirectories(versions_dir, skip_suffix)? {
            debug!("Checking version {:?}", version_dir);
            for chapter_file in FileManager::find_files(&version_dir, extension)? {
                self.check_file(&chapter_file, issues)?;
            }
        }
        Ok(())
    }

    /// Check a single chapter file
    pub fn check_file(&mut self, path: &Path, issues: &mut IssueLog) -> Result<()> {
        let file = FileManager::display_name(path);
        let seen_ids = &mut self.seen_ids;

        scan_records(path, issues, |line, record, issues| {
            check_required_fields(
                &file,
                line,
                &record,
                RecordKind::Sentence.required_fields(),
                issues,
            );

            // Without an id there is nothing to deduplicate
            let Some(id) = record.get("id") else {
                return;
            };

            let (key, display) = id_key(id);
            if seen_ids.contains(&key) {
                issues.record(IssueKind::DuplicateId {
                    id: display,
                    file: file.clone(),
                });
            }
            seen_ids.insert(key);
        })
    }

    /// Number of distinct sentence ids seen so far
    pub fn distinct_ids(&self) -> usize {
        self.seen_ids.len()
    }
}

// Strings are keyed by their canonical JSON text too, so `1` and `"1"`
// remain different ids.
fn id_key(id: &Value) -> (String, String) {
    let key = id.to_string();
    let display = match id {
        Value::String(s) => s.clone(),
        _ => key.clone(),
    };
    (key, display)
}
