//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use sheet_records_core::{CellAddress, RawCell, Workbook, Worksheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a one-sheet workbook
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a one-sheet workbook
    ///
    /// Field `j` of record `i` becomes a text cell at column `j`, row `i + 1`.
    /// Empty fields produce no cell, except that a record with only empty
    /// fields leaves an empty cell at column 0 so its row is not lost.
    /// Records may have different lengths.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .trim(if options.trim {
                csv::Trim::Fields
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.as_str());
        let mut records = 0usize;

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = u32::try_from(index + 1).map_err(|_| CsvError::Parse {
                row: index + 1,
                column: 0,
                message: "row number exceeds addressable range".to_string(),
            })?;

            // Keep the row of a record whose fields are all empty
            if record.iter().all(str::is_empty) {
                worksheet.push(RawCell::empty(CellAddress::new(0, row)));
            }

            for (col, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                let col = u32::try_from(col).map_err(|_| CsvError::Parse {
                    row: index + 1,
                    column: col,
                    message: "column number exceeds addressable range".to_string(),
                })?;
                worksheet.set_text_at(col, row, field);
            }

            records += 1;
        }

        log::debug!(
            "read {records} csv records ({} cells) into sheet {:?}",
            worksheet.len(),
            worksheet.name()
        );

        let mut workbook = Workbook::new();
        workbook.add_existing_worksheet(worksheet);
        Ok(workbook)
    }
}
