//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;
use sheet_records_core::SheetSource;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write one sheet to a CSV file
    pub fn write_file<S, P>(
        source: &S,
        sheet: usize,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()>
    where
        S: SheetSource + ?Sized,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        Self::write(source, sheet, file, options)
    }

    /// Write one sheet to a writer
    ///
    /// Every row of the sheet's dense table becomes one record, with empty
    /// fields where there is no value. An empty sheet writes nothing.
    pub fn write<S, W>(
        source: &S,
        sheet: usize,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()>
    where
        S: SheetSource + ?Sized,
        W: Write,
    {
        let table = source.sheet_table(sheet)?;

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.to_csv())
            .flexible(false)
            .from_writer(writer);

        for row in table.rows() {
            let record = row
                .columns()
                .map(|value| -> CsvResult<String> {
                    Ok(value?.map(|v| v.as_str().to_string()).unwrap_or_default())
                })
                .collect::<CsvResult<Vec<_>>>()?;

            csv_writer.write_record(&record)?;
        }

        log::debug!(
            "wrote {} csv records from sheet {sheet}",
            table.row_count()
        );

        csv_writer.flush()?;
        Ok(())
    }
}
