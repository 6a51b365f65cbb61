//! Path and filter utilities

use std::ffi::OsStr;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Drop trailing separators from the root path. A root made only of separators stays `/`.
pub fn strip_trailing_separator(path: &Path) -> PathBuf {
    let bytes = path.as_os_str().as_encoded_bytes();
    let is_sep = |b: &u8| *b == b'/' || char::from(*b) == MAIN_SEPARATOR;
    let keep = bytes.len() - bytes.iter().rev().take_while(|b| is_sep(*b)).count();
    if keep == 0 && !bytes.is_empty() {
        return PathBuf::from(MAIN_SEPARATOR.to_string());
    }
    if keep == bytes.len() {
        return path.to_path_buf();
    }
    // SAFETY: the cut sits right before an ASCII separator, which is a valid split point
    // for `as_encoded_bytes` output.
    let trimmed = unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..keep]) };
    PathBuf::from(trimmed)
}

/// `.` and `..`
pub fn is_dot_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Unanchored, case-sensitive substring test against the bare file name, byte for byte.
pub fn name_matches(name: &OsStr, term: &str) -> bool {
    let needle = term.as_bytes();
    needle.is_empty()
        || name
            .as_encoded_bytes()
            .windows(needle.len())
            .any(|w| w == needle)
}
