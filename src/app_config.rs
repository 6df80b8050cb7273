use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::{CorpusError, Result};

/// Application configuration module
/// This module handles loading and validating the validator settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Root of the corpus data tree
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Locations of each record family, relative to `data_dir`
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Relative locations of the record files inside the data directory
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    // @field: Directory holding one subdirectory per version
    #[serde(default = "default_versions_dir")]
    pub versions_dir: PathBuf,

    // @field: Entries under versions_dir ending with this are not versions
    #[serde(default = "default_skip_suffix")]
    pub skip_suffix: String,

    // @field: Single annotation file
    #[serde(default = "default_annotation_file")]
    pub annotation_file: PathBuf,

    // @field: Single variant file
    #[serde(default = "default_variant_file")]
    pub variant_file: PathBuf,

    // @field: Directory of dictionary files
    #[serde(default = "default_dictionary_dir")]
    pub dictionary_dir: PathBuf,

    // @field: Extension of record files, without the dot
    #[serde(default = "default_record_extension")]
    pub record_extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            versions_dir: default_versions_dir(),
            skip_suffix: default_skip_suffix(),
            annotation_file: default_annotation_file(),
            variant_file: default_variant_file(),
            dictionary_dir: default_dictionary_dir(),
            record_extension: default_record_extension(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_versions_dir() -> PathBuf {
    PathBuf::from("versions")
}

fn default_skip_suffix() -> String {
    ".json".to_string()
}

fn default_annotation_file() -> PathBuf {
    PathBuf::from("annotations").join("zhipan.jsonl")
}

fn default_variant_file() -> PathBuf {
    PathBuf::from("variants").join("variants.jsonl")
}

fn default_dictionary_dir() -> PathBuf {
    PathBuf::from("dictionary")
}

fn default_record_extension() -> String {
    "jsonl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            layout: LayoutConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a default configuration rooted at the given data directory
    pub fn for_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file, or fall back to defaults when
    /// the file does not exist. The file is never created.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path).map_err(|source| CorpusError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(CorpusError::InvalidConfig("data_dir must not be empty".to_string()));
        }

        let extension = self.layout.record_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(CorpusError::InvalidConfig(
                "layout.record_extension must not be empty".to_string(),
            ));
        }

        let relative_paths = [
            ("layout.versions_dir", &self.layout.versions_dir),
            ("layout.annotation_file", &self.layout.annotation_file),
            ("layout.variant_file", &self.layout.variant_file),
            ("layout.dictionary_dir", &self.layout.dictionary_dir),
        ];
        for (name, path) in relative_paths {
            if path.as_os_str().is_empty() {
                return Err(CorpusError::InvalidConfig(format!("{} must not be empty", name)));
            }
            if path.is_absolute() {
                return Err(CorpusError::InvalidConfig(format!(
                    "{} must be relative to data_dir, got {:?}",
                    name, path
                )));
            }
        }

        Ok(())
    }

    /// Directory holding the version subdirectories
    pub fn versions_path(&self) -> PathBuf {
        self.data_dir.join(&self.layout.versions_dir)
    }

    /// Path of the annotation file
    pub fn annotation_path(&self) -> PathBuf {
        self.data_dir.join(&self.layout.annotation_file)
    }

    /// Path of the variant file
    pub fn variant_path(&self) -> PathBuf {
        self.data_dir.join(&self.layout.variant_file)
    }

    /// Directory holding the dictionary files
    pub fn dictionary_path(&self) -> PathBuf {
        self.data_dir.join(&self.layout.dictionary_dir)
    }

    /// Record file extension without a leading dot
    pub fn record_extension(&self) -> &str {
        self.layout.record_extension.trim_start_matches('.')
    }
}
