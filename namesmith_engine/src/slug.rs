//! Filename-safe text normalization.
//!
//! Default normalizer applied to a resolved value before it joins a system
//! name. It only strips unsafe characters: space replacement and
//! lowercasing are the assembler's job, so hosts can substitute their own
//! normalizer without double-handling either step.

/// Strip characters unsafe for use in a system/file name.
///
/// Keeps ASCII alphanumerics, spaces, `-`, `_`, and `.`; drops everything
/// else (punctuation, control characters, non-ASCII).
pub fn normalize_filename(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '-' | '_' | '.'))
        .collect()
}
