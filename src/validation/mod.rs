/*!
 * Validation module for corpus record files.
 *
 * This module checks the structural integrity of every record family:
 * - Sentences (required fields, globally unique ids)
 * - Annotations (required fields)
 * - Variants (presence and size of the readings list)
 * - Dictionary entries (required fields)
 *
 * # Architecture
 *
 * - `issues`: Issue kinds, severities and the accumulating log
 * - `scan`: Line-by-line record scanning shared by all checks
 * - `sentences`, `annotations`, `variants`, `dictionary`: Per-family checks
 * - `report`: Final report rendering
 * - `service`: Orchestrates all checks
 */

pub mod issues;
pub mod scan;
pub mod sentences;
pub mod annotations;
pub mod variants;
pub mod dictionary;
pub mod report;
pub mod service;

// Re-export main types
pub use issues::{IssueKind, IssueLog, IssueSeverity, ValidationIssue};
pub use service::{ValidationSummary, Validator};
