use std::fs::OpenOptions;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rowlog_config::{log_store_debug, log_store_info};
use tracing::field::display;

use crate::{Result, Row, StoreError};

/// Append `rows` to the CSV file at `path`, one line per row.
///
/// Existing content is preserved and the file is created if missing. The
/// parent directory is never created. Fields are written as-is, without
/// quoting, and rows may differ in field count. The handle is flushed
/// before returning and closed on drop, including on the error path.
///
/// Returns the number of rows written.
pub fn append_rows(path: &Path, rows: impl IntoIterator<Item = Row>) -> Result<usize> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    let mut written = 0;
    for row in rows {
        let fields = row.fields_as_text();
        log_store_debug!("Appending row", fields = fields.len());
        writer
            .write_record(&fields)
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        written += 1;
    }

    writer.flush().map_err(|source| StoreError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    log_store_info!("Rows appended", rows = written, path = display(path.display()));
    Ok(written)
}
