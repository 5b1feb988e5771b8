use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator};
use rowlog_config::log_store_info;
use tracing::field::display;

use crate::{ReadRow, Result, StoreError};

/// Lazy, single-pass iterator over the rows of a CSV file.
///
/// Every line is one row, split on `,` with no quote handling, so rows may
/// have any number of fields. A blank line is a row with no fields. Reopen
/// the file to iterate again. The handle is closed when the reader is
/// dropped.
pub struct RowReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    parser: ReaderBuilder,
    record: StringRecord,
}

impl RowReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // Line splitting happens here, so the parser only ever sees one line
        // and a stray `\r` inside it stays field data.
        let mut parser = ReaderBuilder::new();
        parser
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .terminator(Terminator::Any(b'\n'))
            .buffer_capacity(256);

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            parser,
            record: StringRecord::new(),
        })
    }

    fn parse_line(&mut self, line: &str) -> Result<ReadRow> {
        if line.is_empty() {
            return Ok(ReadRow::default());
        }
        let mut rdr = self.parser.from_reader(line.as_bytes());
        let found = rdr
            .read_record(&mut self.record)
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(if found {
            ReadRow::from(&self.record)
        } else {
            ReadRow::default()
        })
    }
}

impl Iterator for RowReader {
    type Item = Result<ReadRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                return Some(Err(StoreError::Read {
                    path: self.path.clone(),
                    source: csv::Error::from(e),
                }))
            }
        };
        Some(self.parse_line(&line))
    }
}

/// Print every row of `path` to `out`, fields rejoined with `,`, one per line.
///
/// Returns the number of rows printed.
pub fn print_rows<W: Write>(path: &Path, out: &mut W) -> Result<usize> {
    let mut printed = 0;
    for row in RowReader::open(path)? {
        let row = row?;
        writeln!(out, "{}", row.joined()).map_err(StoreError::Print)?;
        printed += 1;
    }
    out.flush().map_err(StoreError::Print)?;

    log_store_info!("Rows printed", rows = printed, path = display(path.display()));
    Ok(printed)
}
