//! Path convention resolver for the `<base>.<lang>.<ext>` naming scheme.
//!
//! An original document is named `<base>.<ext>`; its translation into `lang`
//! lives in a sibling file `<base>.<lang>.<ext>`. All helpers here are pure
//! string operations and assume `.` appears only as an extension or language
//! delimiter inside the file name.

/// Return the declared language of a path: the second-to-last dot-delimited
/// segment. The resolver does not check the segment against the supported
/// set; for an original document this is simply the base name.
pub fn language_of(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.len() < 2 {
        return None;
    }
    Some(segments[segments.len() - 2])
}

/// Build the translated sibling path for `lang` by inserting it immediately
/// before the final (extension) segment. Performs no collision or existence
/// checks and never mutates its input.
pub fn translated_path(path: &str, lang: &str) -> String {
    let mut segments: Vec<&str> = path.split('.').collect();
    let insert_at = segments.len().saturating_sub(1);
    segments.insert(insert_at, lang);
    segments.join(".")
}

/// Recover the original document path from a translated one by removing the
/// second-to-last segment (assumed to be a language code).
pub fn original_path(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('.').collect();
    if segments.len() >= 2 {
        segments.remove(segments.len() - 2);
    }
    segments.join(".")
}

/// Number of dot-delimited segments in a path. A two-segment path
/// (`name.ext`) is an original, language-less document.
pub fn segment_count(path: &str) -> usize {
    path.split('.').count()
}
