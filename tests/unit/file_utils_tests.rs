/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use corpus_validator::errors::CorpusError;
use corpus_validator::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that list_subdirectories skips files and suffixed entries and sorts by name
#[test]
fn test_list_subdirectories_withMixedEntries_shouldKeepVersionDirsOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("jiaxu"))?;
    fs::create_dir_all(root.join("gengchen"))?;
    fs::create_dir_all(root.join("meta.json"))?;
    common::create_test_file(root, "index.json", "{}")?;
    common::create_test_file(root, "notes.jsonl", "")?;

    let dirs = FileManager::list_subdirectories(root, ".json")?;

    assert_eq!(dirs, vec![root.join("gengchen"), root.join("jiaxu")]);
    Ok(())
}

/// Test that list_subdirectories fails when the directory is missing
#[test]
fn test_list_subdirectories_withMissingDir_shouldFail() {
    let result =
        FileManager::list_subdirectories(Path::new("./no_such_versions_dir_98765"), ".json");
    assert!(matches!(result, Err(CorpusError::DirectoryWalk { .. })));
}

/// Test that find_files matches the extension exactly and does not recurse
#[test]
fn test_find_files_withMixedEntries_shouldReturnDirectMatchesSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "002.jsonl", "")?;
    common::create_test_file(root, "001.jsonl", "")?;
    common::create_test_file(root, "meta.json", "{}")?;
    common::create_test_file(root, "nested/003.jsonl", "")?;
    fs::create_dir_all(root.join("dir.jsonl"))?;

    let files = FileManager::find_files(root, "jsonl")?;
    assert_eq!(files, vec![root.join("001.jsonl"), root.join("002.jsonl")]);

    let dotted = FileManager::find_files(root, ".jsonl")?;
    assert_eq!(dotted, files);
    Ok(())
}

/// Test that display_name returns only the file name
#[test]
fn test_display_name_withNestedPath_shouldReturnFileName() {
    assert_eq!(FileManager::display_name("data/versions/gengchen/001.jsonl"), "001.jsonl");
}
