//! # rowlog-store
//!
//! Append-only CSV row log.
//!
//! Rows are written one per line with fields joined by `,`. Nothing is
//! quoted or escaped, so a field holding a comma or a line break changes
//! the row boundaries seen by the next read.
//!
//! ```text
//! data.csv
//! ├── alice,30,town      <- rows from earlier runs stay untouched
//! ├── shyam,13,bagar     <- appended by this run
//! └── none,15,simpani
//! ```

mod append;
mod read;
mod record;
mod run;

pub use append::append_rows;
pub use read::{print_rows, RowReader};
pub use record::{default_dataset, Field, Person, ReadRow, Row};
pub use run::{append_then_print, RunSummary};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while appending or reading rows
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write row to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {}: {source}", .path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read row from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to print row: {0}")]
    Print(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
