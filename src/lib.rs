/*!
 * # corpus-validator
 *
 * Structural integrity checks for the line-delimited JSON files of a
 * literary text corpus: sentences, annotations, textual variants and
 * dictionary entries.
 *
 * ## Features
 *
 * - Parse every line of every record file as a JSON object
 * - Check required fields per record family
 * - Flag sentence ids that occur more than once across all versions
 * - Collect every problem, then print one report
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `records`: Record families and line-level JSON parsing
 * - `validation`: The checks and the validator that runs them:
 *   - `validation::issues`: Errors, warnings and their log
 *   - `validation::service`: The `Validator` orchestrating a run
 *   - `validation::report`: Final report rendering
 * - `file_utils`: File system operations
 * - `errors`: Fatal error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod records;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::{Config, LayoutConfig, LogLevel};
pub use errors::CorpusError;
pub use records::RecordKind;
pub use validation::{IssueKind, IssueLog, IssueSeverity, ValidationSummary, Validator};
