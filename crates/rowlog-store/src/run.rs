use std::io::Write;
use std::path::Path;

use crate::{append_rows, print_rows, Result, Row};

/// Counts reported by [`append_then_print`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub appended: usize,
    pub printed: usize,
}

/// Append `rows` to `path`, then print every row in the file to `out`.
///
/// The append handle is closed before the file is reopened for reading.
/// The first failure aborts the run.
pub fn append_then_print<W: Write>(
    path: &Path,
    rows: impl IntoIterator<Item = Row>,
    out: &mut W,
) -> Result<RunSummary> {
    let appended = append_rows(path, rows)?;
    let printed = print_rows(path, out)?;
    Ok(RunSummary { appended, printed })
}
