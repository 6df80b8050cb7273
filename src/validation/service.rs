/*!
 * Validation service that runs every record check over a corpus tree.
 *
 * The `Validator` owns the issue log for its whole lifetime: each check
 * appends to it, and the report at the end prints everything collected.
 * Progress and report lines go to the writer the validator was built
 * with (stdout for the binary).
 */

use log::{debug, info};
use std::io::{self, Stdout, Write};

use crate::app_config::Config;
use crate::errors::Result;
use crate::file_utils::FileManager;

use super::annotations::check_annotation_file;
use super::dictionary::{DictionaryTally, check_dictionary_dir};
use super::issues::{IssueKind, IssueLog};
use super::report::write_report;
use super::sentences::SentenceChecker;
use super::variants::check_variant_file;

/// Counts gathered by a full validation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSummary {
    /// Distinct sentence ids
    pub sentences: usize,
    /// Annotation records, `None` when the file is absent
    pub annotations: Option<usize>,
    /// Variant records, `None` when the file is absent
    pub variants: Option<usize>,
    /// Dictionary records per file
    pub dictionary: DictionaryTally,
    /// Errors recorded
    pub error_count: usize,
    /// Warnings recorded
    pub warning_count: usize,
}

impl ValidationSummary {
    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Validation: {} sentences, {} dictionary entries, {} errors, {} warnings",
            self.sentences,
            self.dictionary.total(),
            self.error_count,
            self.warning_count
        )
    }

    /// True when no error and no warning was recorded
    pub fn is_clean(&self) -> bool {
        self.error_count == 0 && self.warning_count == 0
    }
}

/// Corpus validator
pub struct Validator<W: Write = Stdout> {
    config: Config,
    issues: IssueLog,
    out: W,
}

impl Validator<Stdout> {
    /// Create a validator printing to stdout
    pub fn new(config: Config) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl<W: Write> Validator<W> {
    /// Create a validator printing to the given writer
    pub fn with_writer(config: Config, out: W) -> Self {
        Self {
            config,
            issues: IssueLog::new(),
            out,
        }
    }

    /// Issues collected so far
    pub fn issues(&self) -> &IssueLog {
        &self.issues
    }

    /// Consume the validator and hand back its writer
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run every check in order, then print the report.
    ///
    /// Record problems never fail the run; only fatal conditions such as a
    /// missing dictionary directory are returned as errors, in which case
    /// no report is printed.
    pub fn validate_all(&mut self) -> Result<ValidationSummary> {
        writeln!(self.out, "🔍 Starting data validation...")?;
        writeln!(self.out)?;

        let sentences = self.validate_sentences()?;
        let annotations = self.validate_annotations()?;
        let variants = self.validate_variants()?;
        let dictionary = self.validate_dictionary()?;

        self.print_report()?;

        let summary = ValidationSummary {
            sentences,
            annotations,
            variants,
            dictionary,
            error_count: self.issues.errors().len(),
            warning_count: self.issues.warnings().len(),
        };
        info!("{}", summary.summary());

        Ok(summary)
    }

    /// Validate every chapter file of every version and return the number
    /// of distinct sentence ids
    pub fn validate_sentences(&mut self) -> Result<usize> {
        writeln!(self.out, "📝 Validating sentences...")?;

        let mut checker = SentenceChecker::new();
        checker.check_versions(
            &self.config.versions_path(),
            &self.config.layout.skip_suffix,
            self.config.record_extension(),
            &mut self.issues,
        )?;

        let count = checker.distinct_ids();
        writeln!(self.out, "   ✅ Validated {} sentences", count)?;
        writeln!(self.out)?;
        Ok(count)
    }

    /// Validate the annotation file. Returns `None` and records a warning
    /// when the file does not exist.
    pub fn validate_annotations(&mut self) -> Result<Option<usize>> {
        writeln!(self.out, "📌 Validating annotations...")?;

        let path = self.config.annotation_path();
        if !FileManager::file_exists(&path) {
            debug!("Annotation file {:?} is absent", path);
            self.issues.record(IssueKind::MissingFile {
                label: "Annotation".to_string(),
                path,
            });
            return Ok(None);
        }

        let count = check_annotation_file(&path, &mut self.issues)?;
        writeln!(self.out, "   ✅ Validated {} annotations", count)?;
        writeln!(self.out)?;
        Ok(Some(count))
    }

    /// Validate the variant file. Returns `None` and records a warning
    /// when the file does not exist.
    pub fn validate_variants(&mut self) -> Result<Option<usize>> {
        writeln!(self.out, "🔄 Validating variants...")?;

        let path = self.config.variant_path();
        if !FileManager::file_exists(&path) {
            debug!("Variant file {:?} is absent", path);
            self.issues.record(IssueKind::MissingFile {
                label: "Variant".to_string(),
                path,
            });
            return Ok(None);
        }

        let count = check_variant_file(&path, &mut self.issues)?;
        writeln!(self.out, "   ✅ Validated {} variants", count)?;
        writeln!(self.out)?;
        Ok(Some(count))
    }

    /// Validate every dictionary file. The dictionary directory must exist.
    pub fn validate_dictionary(&mut self) -> Result<DictionaryTally> {
        writeln!(self.out, "📚 Validating dictionary...")?;

        let out = &mut self.out;
        let tally = check_dictionary_dir(
            &self.config.dictionary_path(),
            self.config.record_extension(),
            &mut self.issues,
            |name, count| {
                writeln!(out, "   ✅ {}: {} entries", name, count)?;
                Ok(())
            },
        )?;

        writeln!(self.out, "   ✅ Total {} dictionary entries", tally.total())?;
        writeln!(self.out)?;
        Ok(tally)
    }

    /// Print the report of everything collected so far
    pub fn print_report(&mut self) -> Result<()> {
        write_report(&mut self.out, &self.issues)?;
        self.out.flush()?;
        Ok(())
    }
}
