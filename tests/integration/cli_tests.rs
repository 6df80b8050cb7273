/*!
 * Tests that run the compiled corpus-validator binary
 */

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use crate::common;

fn run_validator(dir: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_corpus-validator"))
        .current_dir(dir)
        .args(args)
        .output()?)
}

/// With no arguments the binary validates ./data and exits successfully even with errors
#[test]
fn test_cli_withoutArguments_shouldValidateDataDirAndExitZero() -> Result<()> {
    let workdir = common::create_temp_dir()?;
    common::create_test_file(workdir.path(), "data/versions/gengchen/001.jsonl", "not json\n")?;
    std::fs::create_dir_all(workdir.path().join("data/dictionary"))?;

    let output = run_validator(workdir.path(), &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("❌ 001.jsonl line 1: invalid JSON format"));
    assert!(stdout.contains("⚠️  Annotation file not found"));
    Ok(())
}

/// --data-dir points the run at another tree
#[test]
fn test_cli_withDataDir_shouldValidateThatTree() -> Result<()> {
    let workdir = common::create_temp_dir()?;
    let corpus = workdir.path().join("corpus");
    common::create_test_file(
        &corpus,
        "versions/gengchen/001.jsonl",
        &common::jsonl(&[common::sentence_line("a")]),
    )?;
    common::create_test_file(
        &corpus,
        "annotations/zhipan.jsonl",
        &common::jsonl(&[common::annotation_line("z")]),
    )?;
    common::create_test_file(
        &corpus,
        "variants/variants.jsonl",
        "{\"variants\": [\"a\", \"b\"]}\n",
    )?;
    std::fs::create_dir_all(corpus.join("dictionary"))?;

    let output = run_validator(workdir.path(), &["--data-dir", "corpus", "--log-level", "error"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("✅ All data passed validation!"));
    Ok(())
}

/// A config file is honoured when present
#[test]
fn test_cli_withConfigFile_shouldUseConfiguredLayout() -> Result<()> {
    let workdir = common::create_temp_dir()?;
    common::create_test_file(
        workdir.path(),
        "validator.json",
        r#"{"data_dir": "corpus", "layout": {"dictionary_dir": "glossary"}}"#,
    )?;
    std::fs::create_dir_all(workdir.path().join("corpus/versions"))?;
    common::create_test_file(
        workdir.path(),
        "corpus/glossary/terms.jsonl",
        &common::jsonl(&[common::dictionary_line("d")]),
    )?;

    let output = run_validator(workdir.path(), &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("   ✅ terms.jsonl: 1 entries"));
    Ok(())
}

/// A missing dictionary directory is the one fatal case
#[test]
fn test_cli_withoutDictionaryDir_shouldExitNonZero() -> Result<()> {
    let workdir = common::create_temp_dir()?;
    std::fs::create_dir_all(workdir.path().join("data/versions"))?;

    let output = run_validator(workdir.path(), &[])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Validation aborted"));
    Ok(())
}

/// The completions subcommand prints a script
#[test]
fn test_cli_completions_shouldPrintScript() -> Result<()> {
    let workdir = common::create_temp_dir()?;

    let output = run_validator(workdir.path(), &["completions", "bash"])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("corpus-validator"));
    Ok(())
}

/// Short flags are accepted and an unknown log level is rejected
#[test]
fn test_cli_withShortFlags_shouldParseAndRejectUnknownLevel() -> Result<()> {
    let workdir = common::create_temp_dir()?;
    let corpus = common::create_corpus_skeleton()?;
    let data_dir = corpus.path().to_string_lossy().into_owned();

    let output = run_validator(workdir.path(), &["-d", &data_dir, "-l", "debug"])?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("⚠️  Found 2 warning(s):"));

    let output = run_validator(workdir.path(), &["-d", &data_dir, "-l", "loud"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("invalid value 'loud'"));
    Ok(())
}
