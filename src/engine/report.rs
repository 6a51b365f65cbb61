//! Final summary line.

use crate::SearchReport;

/// `Search stopped, found N files.` after an interrupt, `Done searching, found N files` otherwise.
/// Wording is fixed; keep it byte-for-byte.
pub fn summary_line(report: &SearchReport) -> String {
    if report.interrupted {
        format!("Search stopped, found {} files.", report.matches)
    } else {
        format!("Done searching, found {} files", report.matches)
    }
}
