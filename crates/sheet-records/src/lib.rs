//! # sheet-records
//!
//! Read spreadsheet rows into typed records and write them back.
//!
//! The first row of a sheet names the columns; every other row becomes one
//! record whose fields are matched to columns by name. The mapping from
//! header name to field is generated at compile time with
//! `#[derive(Record)]`.
//!
//! ## Features
//!
//! - Header-driven mapping onto structs, with `rename` and `skip` attributes
//! - Text, integer, decimal, boolean, date and enumeration fields, each optional
//! - Best-effort coercion: text that does not fit a field leaves its default
//! - Sheet selection by name with fallback to the first sheet
//! - Read and write CSV files (`csv` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use sheet_records::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, Default, PartialEq, CellEnum)]
//! enum Status {
//!     #[default]
//!     Open,
//!     Closed,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct Ticket {
//!     title: String,
//!     priority: Option<i32>,
//!     status: Status,
//! }
//!
//! let tickets = vec![Ticket {
//!     title: "Printer on fire".into(),
//!     priority: Some(1),
//!     status: Status::Open,
//! }];
//!
//! let mut writer = SpreadsheetWriter::new();
//! writer.serialize(&tickets, None).unwrap();
//! let workbook = writer.into_workbook();
//!
//! let reader = SpreadsheetReader::new(&workbook);
//! let records = reader.deserialize::<Ticket>(&ReadOptions::default()).unwrap().unwrap();
//! assert_eq!(records.to_vec().unwrap(), tickets);
//! ```

// Lets the derives' `::sheet_records` paths resolve inside this crate
extern crate self as sheet_records;

pub mod options;
pub mod prelude;
mod reader;
mod writer;

pub use options::ReadOptions;
pub use reader::{RecordSet, SpreadsheetReader};
pub use writer::SpreadsheetWriter;

// Derive macros
pub use sheet_records_macros::{CellEnum, Record};

// Re-export core types
pub use sheet_records_core::{
    // Field coercion
    coerce_enum,
    enum_to_cell,
    // Cell types
    CellAddress,
    CellContent,
    CellEnum,
    CellField,
    CellKind,
    // Error types
    Error,
    Extent,
    FieldAssignment,
    FieldInfo,
    FieldKind,
    HeaderRow,
    RawCell,
    Record,
    RecordMaterializer,
    Records,
    ResolvedValue,
    Result,

    SharedString,
    SharedStringResolver,
    SharedStringTable,
    SheetMatch,
    // Document types
    SheetSource,
    SparseTable,
    Workbook,
    Worksheet,
};
pub use sheet_records_core::{chrono, date, rust_decimal, select_sheet};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use sheet_records_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};

#[cfg(feature = "csv")]
use std::path::Path;

/// Extension trait for Workbook to add file I/O
#[cfg(feature = "csv")]
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the first worksheet to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

#[cfg(feature = "csv")]
impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => {
                if self.is_empty() {
                    return Err(Error::other("No worksheets to save"));
                }
                CsvWriter::write_file(self, 0, path, &CsvWriteOptions::default())
                    .map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
