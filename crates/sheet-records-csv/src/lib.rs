//! # sheet-records-csv
//!
//! CSV reader and writer for sheet-records.
//!
//! A CSV file reads as a one-sheet [`Workbook`](sheet_records_core::Workbook)
//! of inline text cells, so the first line becomes the header row. Any sheet
//! can be written back out as CSV.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
