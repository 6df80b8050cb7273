use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{CorpusError, Result};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// List the direct subdirectories of `dir` in file-name order, leaving
    /// out any whose name ends with `skip_suffix`.
    ///
    /// A missing or unreadable `dir` is an error.
    pub fn list_subdirectories<P: AsRef<Path>>(dir: P, skip_suffix: &str) -> Result<Vec<PathBuf>> {
        let entries = Self::direct_children(dir.as_ref())?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.file_type().is_dir())
            .filter(|entry| {
                let skip = !skip_suffix.is_empty()
                    && entry.file_name().to_string_lossy().ends_with(skip_suffix);
                if skip {
                    debug!("Skipping non-version entry {:?}", entry.path());
                }
                !skip
            })
            .map(|entry| entry.into_path())
            .collect())
    }

    /// Find files directly inside `dir` with the given extension, in
    /// file-name order. Subdirectories are not descended into.
    ///
    /// A missing or unreadable `dir` is an error.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let extension = extension.trim_start_matches('.');
        let entries = Self::direct_children(dir.as_ref())?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy() == extension)
            })
            .map(|entry| entry.into_path())
            .collect())
    }

    /// File name of `path` for use in messages
    pub fn display_name<P: AsRef<Path>>(path: P) -> String {
        let path = path.as_ref();
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    // Entries one level below `dir`. Failing to open `dir` itself is fatal;
    // a child that cannot be inspected (a dangling symlink, say) is skipped.
    fn direct_children(dir: &Path) -> Result<Vec<DirEntry>> {
        let mut children = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => children.push(entry),
                Err(source) if source.depth() == 0 => {
                    return Err(CorpusError::DirectoryWalk {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
                Err(source) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, source);
                }
            }
        }

        Ok(children)
    }
}
