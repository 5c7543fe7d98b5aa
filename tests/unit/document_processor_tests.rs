/*!
 * Tests for the per-file document transform pipeline
 */

use anyhow::Result;
use std::fs;
use std::sync::Arc;

use mdtranslate::DocumentProcessor;
use mdtranslate::providers::mock::MockProvider;
use mdtranslate::translation_service::{MAX_ATTEMPTS, TranslationService};

use crate::common;

fn processor_with(mock: &MockProvider) -> DocumentProcessor {
    DocumentProcessor::new(TranslationService::with_provider(
        Arc::new(mock.clone()),
        common::test_aliases(),
    ))
}

/// Test that the slug is prefixed with the target language
#[tokio::test]
async fn test_translate_file_withSlug_shouldPrefixLanguage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_document(&temp_dir.path().to_path_buf(), "guide.md")?;

    let processor = processor_with(&MockProvider::working());
    let report = processor
        .translate_file(source.to_str().unwrap(), "de")
        .await?;

    let output = fs::read_to_string(&report.output)?;
    assert!(output.contains("slug: /de/getting-started"));
    assert!(report.output.ends_with("guide.de.md"));
    Ok(())
}

/// Test that heading and paragraph text is translated
#[tokio::test]
async fn test_translate_file_withHeadingsAndParagraphs_shouldTranslateAllTextNodes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_document(&temp_dir.path().to_path_buf(), "guide.md")?;

    let processor = processor_with(&MockProvider::working());
    let report = processor
        .translate_file(source.to_str().unwrap(), "de")
        .await?;

    let output = fs::read_to_string(&report.output)?;
    assert!(output.contains("de:Getting Started"));
    assert!(output.contains("de:This guide explains the basics."));
    assert!(report.nodes_total >= 2);
    assert!(report.failures.is_empty());
    Ok(())
}

/// Test that code blocks are not translated
#[tokio::test]
async fn test_translate_file_withCodeBlock_shouldLeaveCodeUntouched() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_document(&temp_dir.path().to_path_buf(), "guide.md")?;

    let processor = processor_with(&MockProvider::working());
    let report = processor
        .translate_file(source.to_str().unwrap(), "de")
        .await?;

    let output = fs::read_to_string(&report.output)?;
    assert!(output.contains("fn main() {}"));
    assert!(!output.contains("de:fn main"));
    Ok(())
}

/// Test that front matter without a slug field is left unchanged
#[tokio::test]
async fn test_translate_file_withoutSlugField_shouldLeaveFrontMatterAlone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "notes.md",
        "---\ntitle: Notes\n---\n\nSome text.\n",
    )?;

    let processor = processor_with(&MockProvider::working());
    let report = processor
        .translate_file(source.to_str().unwrap(), "fr")
        .await?;

    let output = fs::read_to_string(&report.output)?;
    assert!(output.contains("title: Notes"));
    assert!(!output.contains("/fr"));
    Ok(())
}

/// Test that a document with no front matter still translates
#[tokio::test]
async fn test_translate_file_withoutFrontMatter_shouldStillTranslate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "plain.md",
        "# Title\n\nBody text.\n",
    )?;

    let processor = processor_with(&MockProvider::working());
    let report = processor
        .translate_file(source.to_str().unwrap(), "fr")
        .await?;

    let output = fs::read_to_string(&report.output)?;
    assert!(output.contains("fr:Title"));
    assert!(output.contains("fr:Body text."));
    Ok(())
}

/// Test that a backend failing every attempt still produces an output file
/// with the original text, and that every node is reported
#[tokio::test]
async fn test_translate_file_withFailingBackend_shouldKeepOriginalTextAndWriteFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_document(&temp_dir.path().to_path_buf(), "guide.md")?;

    let mock = MockProvider::failing();
    let processor = processor_with(&mock);
    let report = processor
        .translate_file(source.to_str().unwrap(), "de")
        .await?;

    let output = fs::read_to_string(&report.output)?;
    assert!(output.contains("Getting Started"));
    assert!(output.contains("This guide explains the basics."));
    assert_eq!(report.failures.len(), report.nodes_total);
    assert!(report.nodes_total > 0);
    // Every node exhausted its full retry budget before the file was written
    assert_eq!(mock.request_count(), report.nodes_total * MAX_ATTEMPTS);
    Ok(())
}

/// Test that an unsupported target rejects the job before writing anything
#[tokio::test]
async fn test_translate_file_withUnsupportedLanguage_shouldFailBeforeWriting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_document(&temp_dir.path().to_path_buf(), "guide.md")?;

    let mock = MockProvider::working();
    let processor = processor_with(&mock);
    let result = processor
        .translate_file(source.to_str().unwrap(), "xx")
        .await;

    assert!(result.is_err());
    assert_eq!(mock.request_count(), 0);
    assert!(!temp_dir.path().join("guide.xx.md").exists());
    Ok(())
}
