/*!
 * Tests for the `<base>.<lang>.<ext>` path convention resolver
 */

use mdtranslate::path_naming::{language_of, original_path, segment_count, translated_path};

/// Test that language_of returns the second-to-last dot segment
#[test]
fn test_language_of_withThreeSegments_shouldReturnMiddleSegment() {
    assert_eq!(language_of("a.b.c"), Some("b"));
    assert_eq!(language_of("docs/intro.zh.md"), Some("zh"));
}

/// Test that a two-segment path exposes its base name as the declared segment
#[test]
fn test_language_of_withTwoSegments_shouldReturnBaseName() {
    assert_eq!(language_of("doc.md"), Some("doc"));
}

/// Test that a path without dots has no declared language
#[test]
fn test_language_of_withNoDots_shouldReturnNone() {
    assert_eq!(language_of("makefile"), None);
}

/// Test that translated_path inserts the language before the extension
#[test]
fn test_translated_path_withOriginal_shouldInsertLanguageSegment() {
    assert_eq!(translated_path("doc.md", "fr"), "doc.fr.md");
    assert_eq!(translated_path("docs/intro.mdx", "zh"), "docs/intro.zh.mdx");
}

/// Test that translated_path returns a new string and leaves its input alone
#[test]
fn test_translated_path_withAnyInput_shouldNotMutateInput() {
    let original = String::from("doc.md");
    let translated = translated_path(&original, "de");
    assert_eq!(original, "doc.md");
    assert_eq!(translated, "doc.de.md");
}

/// Test that original_path removes the language segment
#[test]
fn test_original_path_withTranslatedPath_shouldRemoveLanguageSegment() {
    assert_eq!(original_path("doc.zh.md"), "doc.md");
    assert_eq!(original_path("docs/intro.fr.mdx"), "docs/intro.mdx");
}

/// Round-trip law: original_path(translated_path(p, lang)) == p
#[test]
fn test_round_trip_withWellFormedPaths_shouldRecoverOriginal() {
    for path in ["doc.md", "docs/guide.mdx", "deep/nested/file.markdown"] {
        for lang in ["zh", "fr", "de", "ja"] {
            assert_eq!(original_path(&translated_path(path, lang)), path);
        }
    }
}

/// Test that segment_count matches the dot-split arity
#[test]
fn test_segment_count_withVariousPaths_shouldCountDotSegments() {
    assert_eq!(segment_count("doc.md"), 2);
    assert_eq!(segment_count("doc.zh.md"), 3);
    assert_eq!(segment_count("plain"), 1);
}
