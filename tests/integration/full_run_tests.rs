/*!
 * Integration tests for a complete validation run and its report
 */

use anyhow::Result;
use corpus_validator::errors::CorpusError;
use crate::common;

fn write_clean_corpus(root: &std::path::Path) -> Result<()> {
    common::create_test_file(
        root,
        "versions/gengchen/001.jsonl",
        &common::jsonl(&[common::sentence_line("g-1"), common::sentence_line("g-2")]),
    )?;
    common::create_test_file(
        root,
        "versions/jiaxu/001.jsonl",
        &common::jsonl(&[common::sentence_line("j-1")]),
    )?;
    common::create_test_file(
        root,
        "annotations/zhipan.jsonl",
        &common::jsonl(&[common::annotation_line("z-1")]),
    )?;
    common::create_test_file(
        root,
        "variants/variants.jsonl",
        "{\"id\": \"v1\", \"variants\": [\"a\", \"b\"]}\n",
    )?;
    common::create_test_file(
        root,
        "dictionary/terms.jsonl",
        &common::jsonl(&[common::dictionary_line("d-1"), common::dictionary_line("d-2")]),
    )?;
    Ok(())
}

/// A clean corpus reports success
#[test]
fn test_validate_all_withCleanCorpus_shouldPrintSuccess() -> Result<()> {
    common::init_test_logging();
    let corpus = common::create_corpus_skeleton()?;
    write_clean_corpus(corpus.path())?;

    let mut validator = common::buffered_validator(corpus.path());
    let summary = validator.validate_all()?;

    assert_eq!(summary.sentences, 3);
    assert_eq!(summary.annotations, Some(1));
    assert_eq!(summary.variants, Some(1));
    assert_eq!(summary.dictionary.total(), 2);
    assert!(summary.is_clean());

    let output = common::output_of(validator);
    assert!(output.starts_with("🔍 Starting data validation..."));
    assert!(output.contains("📊 Validation Report"));
    assert!(output.contains("✅ All data passed validation!"));

    // Sections appear in their fixed order
    let sentences = output.find("📝").unwrap();
    let annotations = output.find("📌").unwrap();
    let variants = output.find("🔄").unwrap();
    let dictionary = output.find("📚").unwrap();
    let report = output.find("📊").unwrap();
    assert!(sentences < annotations);
    assert!(annotations < variants);
    assert!(variants < dictionary);
    assert!(dictionary < report);
    Ok(())
}

/// Problems from every check are listed once each, errors before warnings
#[test]
fn test_validate_all_withProblems_shouldReportEverythingInOrder() -> Result<()> {
    let corpus = common::create_corpus_skeleton()?;
    common::create_test_file(
        corpus.path(),
        "versions/gengchen/001.jsonl",
        &common::jsonl(&[common::sentence_line("dup"), common::sentence_line("dup")]),
    )?;
    common::create_test_file(
        corpus.path(),
        "variants/variants.jsonl",
        "{\"variants\": [\"a\"]}\n",
    )?;
    common::create_test_file(corpus.path(), "dictionary/terms.jsonl", "garbage\n")?;

    let mut validator = common::buffered_validator(corpus.path());
    let summary = validator.validate_all()?;

    assert_eq!(summary.error_count, 2);
    assert_eq!(summary.warning_count, 2);
    assert_eq!(summary.annotations, None);
    assert!(!summary.is_clean());

    let output = common::output_of(validator);
    assert!(!output.contains("All data passed"));
    assert!(output.contains("❌ Found 2 error(s):"));
    assert!(output.contains("⚠️  Found 2 warning(s):"));

    let expected_in_order = [
        "  ❌ Duplicate sentence ID: dup in 001.jsonl",
        "  ❌ terms.jsonl line 1: invalid JSON format",
        "  ⚠️  Annotation file not found: ",
        "  ⚠️  variants.jsonl line 1: variants lists 1 version(s), expected at least 2",
    ];
    let mut cursor = 0;
    for expected in expected_in_order {
        let position = output[cursor..]
            .find(expected)
            .unwrap_or_else(|| panic!("missing or out of order: {}\n{}", expected, output));
        cursor += position + expected.len();
        assert_eq!(output.matches(expected).count(), 1, "duplicated: {}", expected);
    }
    Ok(())
}

/// Without a dictionary directory the run aborts before the report
#[test]
fn test_validate_all_withoutDictionaryDir_shouldAbortWithoutReport() -> Result<()> {
    let corpus = common::create_temp_dir()?;
    common::create_test_file(
        corpus.path(),
        "versions/gengchen/001.jsonl",
        &common::jsonl(&[common::sentence_line("a")]),
    )?;

    let mut validator = common::buffered_validator(corpus.path());
    let result = validator.validate_all();

    assert!(matches!(result, Err(CorpusError::DirectoryWalk { .. })));
    let output = common::output_of(validator);
    assert!(output.contains("📚 Validating dictionary..."));
    assert!(!output.contains("📊 Validation Report"));
    Ok(())
}
