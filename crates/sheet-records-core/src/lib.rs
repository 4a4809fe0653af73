//! # sheet-records-core
//!
//! Core data structures for the sheet-records library.
//!
//! This crate turns the raw cells of a spreadsheet into typed records:
//! - [`CellAddress`] - A1-style addressing and the base-26 column codec
//! - [`SparseTable`] - A dense, rectangular view over sparse cells
//! - [`SharedStringResolver`] - Indirection through the shared string table
//! - [`RecordMaterializer`] - Header-driven mapping of rows onto [`Record`]s
//! - [`Workbook`], [`Worksheet`] - An in-memory document to read from
//!
//! ## Example
//!
//! ```rust
//! use sheet_records_core::{RecordMaterializer, SheetSource, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let index = workbook.add_worksheet("Data");
//! let sheet = workbook.worksheet_mut(index).unwrap();
//! sheet.set_text("A1", "Name").unwrap();
//! sheet.set_text("A2", "Widget").unwrap();
//!
//! let table = workbook.sheet_table(index).unwrap();
//! let materializer = RecordMaterializer::from_table(&table).unwrap();
//! assert_eq!(materializer.headers().get(0), Some("Name"));
//! assert_eq!(RecordMaterializer::data_row_count(&table), 1);
//! ```

pub mod cell;
pub mod date;
pub mod error;
pub mod materialize;
pub mod record;
pub mod shared;
pub mod sheet;
pub mod table;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellContent, CellKind, RawCell, ResolvedValue, SharedString};
pub use error::{Error, Result};
pub use materialize::{HeaderRow, RecordMaterializer, Records};
pub use record::{
    coerce_enum, enum_to_cell, CellEnum, CellField, FieldAssignment, FieldInfo, FieldKind, Record,
};
pub use shared::{SharedStringResolver, SharedStringTable};
pub use sheet::{select_sheet, SheetMatch};
pub use table::{Columns, Extent, RowView, Rows, SparseTable};
pub use workbook::{SheetSource, Workbook};
pub use worksheet::Worksheet;

// Field types records are built from
pub use chrono;
pub use rust_decimal;
