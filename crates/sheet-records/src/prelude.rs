//! Prelude module - common imports for sheet-records users
//!
//! ```rust
//! use sheet_records::prelude::*;
//! ```

pub use crate::{
    // Derives and their traits
    CellEnum,
    CellField,
    // Error types
    Error,
    ReadOptions,
    Record,
    RecordSet,
    Result,

    // Documents
    SheetSource,
    // Reading and writing
    SpreadsheetReader,
    SpreadsheetWriter,
    Workbook,
    Worksheet,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReader, CsvWriter, WorkbookExt};
