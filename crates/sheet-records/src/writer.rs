//! Writing typed records into a document

use sheet_records_core::{
    CellAddress, CellContent, Error, RawCell, Record, Result, SheetSource, Workbook, Worksheet,
};

/// Writes records into a new [`Workbook`], one sheet per call
///
/// The first row of each sheet holds the field names; each record follows
/// on its own row, and a record with no content is kept as an empty cell in
/// its first column. Text goes through the workbook's shared string table,
/// while numbers, booleans and dates are stored as inline text.
#[derive(Debug, Default)]
pub struct SpreadsheetWriter {
    workbook: Workbook,
}

impl SpreadsheetWriter {
    /// Create a writer with an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet holding `records`
    ///
    /// `None` or an empty name uses the record type's name. Writing no
    /// records produces an empty sheet. Returns the new sheet's index.
    pub fn serialize<'r, T, I>(&mut self, records: I, sheet_name: Option<&str>) -> Result<usize>
    where
        T: Record + 'r,
        I: IntoIterator<Item = &'r T>,
    {
        let name = match sheet_name {
            Some(name) if !name.is_empty() => name,
            _ => T::type_name(),
        };

        let mut worksheet = Worksheet::new(name);
        let mut records = records.into_iter().peekable();

        if records.peek().is_some() {
            for (col, field) in T::fields().iter().enumerate() {
                let address = position(col, 0)?;
                self.push_text(&mut worksheet, address, field.name);
            }

            for (index, record) in records.enumerate() {
                let mut written = false;
                for (col, content) in record.field_cells().into_iter().enumerate() {
                    let Some(content) = content else {
                        continue;
                    };
                    let address = position(col, index + 1)?;
                    match content {
                        CellContent::Text(text) => self.push_text(&mut worksheet, address, text),
                        CellContent::Number(number) => {
                            worksheet.push(RawCell::text(address, number));
                        }
                    }
                    written = true;
                }

                // A record with no content still needs its row to exist
                if !written {
                    worksheet.push(RawCell::empty(position(0, index + 1)?));
                }
            }
        }

        log::debug!(
            "wrote {} cells of {} to sheet {name:?}",
            worksheet.len(),
            T::type_name()
        );

        Ok(self.workbook.add_existing_worksheet(worksheet))
    }

    /// Sheet names written so far
    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook.sheet_names()
    }

    /// The workbook being written
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Finish writing and take the workbook
    pub fn into_workbook(self) -> Workbook {
        self.workbook
    }

    fn push_text<S: AsRef<str>>(&mut self, worksheet: &mut Worksheet, address: CellAddress, text: S) {
        let id = self.workbook.shared_strings_mut().intern(text);
        worksheet.push(RawCell::shared(address, id));
    }
}

/// Address of a 0-based column and 0-based row offset
fn position(col: usize, row: usize) -> Result<CellAddress> {
    let col = u32::try_from(col).map_err(|_| Error::other("column index out of range"))?;
    let row = u32::try_from(row)
        .ok()
        .and_then(|r| r.checked_add(1))
        .ok_or_else(|| Error::other("row index out of range"))?;
    Ok(CellAddress::new(col, row))
}
