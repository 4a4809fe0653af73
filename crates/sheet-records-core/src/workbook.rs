//! Workbook type - the in-memory document a table is read from

use crate::cell::RawCell;
use crate::error::{Error, Result};
use crate::shared::SharedStringTable;
use crate::table::SparseTable;
use crate::worksheet::Worksheet;

/// Anything that can hand over a sheet list and the raw cells of one sheet
///
/// This is the seam between a document format and the table machinery.
pub trait SheetSource {
    /// Sheet names in document order
    fn sheet_names(&self) -> Vec<&str>;

    /// Raw cells of the sheet at `index`
    fn sheet_cells(&self, index: usize) -> Option<&[RawCell]>;

    /// The document's shared string table, if it has one
    fn shared_strings(&self) -> Option<&SharedStringTable>;

    /// Build a dense table over one sheet
    fn sheet_table(&self, index: usize) -> Result<SparseTable<Option<&SharedStringTable>>> {
        let cells = self
            .sheet_cells(index)
            .ok_or_else(|| Error::SheetOutOfBounds(index, self.sheet_names().len()))?;
        Ok(SparseTable::new(cells.iter().cloned(), self.shared_strings()))
    }
}

/// A workbook (spreadsheet document)
///
/// Holds worksheets in document order plus an optional shared string table.
/// Sheet names are not required to be unique.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Text shared between cells, referred to by ordinal
    shared_strings: Option<SharedStringTable>,
}

impl Workbook {
    /// Create a new workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new empty worksheet, returning its index
    pub fn add_worksheet<S: Into<String>>(&mut self, name: S) -> usize {
        self.add_existing_worksheet(Worksheet::new(name))
    }

    /// Add an existing worksheet, returning its index
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> usize {
        self.worksheets.push(worksheet);
        self.worksheets.len() - 1
    }

    /// Remove a worksheet by index
    pub fn remove_worksheet(&mut self, index: usize) -> Result<Worksheet> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        Ok(self.worksheets.remove(index))
    }

    /// Rename a worksheet
    pub fn rename_worksheet<S: Into<String>>(&mut self, index: usize, name: S) -> Result<()> {
        let count = self.worksheets.len();
        self.worksheets
            .get_mut(index)
            .ok_or(Error::SheetOutOfBounds(index, count))?
            .set_name(name);
        Ok(())
    }

    /// The shared string table, if any
    pub fn shared_strings(&self) -> Option<&SharedStringTable> {
        self.shared_strings.as_ref()
    }

    /// The shared string table, created empty if there is none yet
    pub fn shared_strings_mut(&mut self) -> &mut SharedStringTable {
        self.shared_strings.get_or_insert_with(SharedStringTable::new)
    }

    /// Replace the shared string table
    pub fn set_shared_strings(&mut self, table: Option<SharedStringTable>) {
        self.shared_strings = table;
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(Worksheet::name).collect()
    }

    fn sheet_cells(&self, index: usize) -> Option<&[RawCell]> {
        self.worksheets.get(index).map(Worksheet::cells)
    }

    fn shared_strings(&self) -> Option<&SharedStringTable> {
        self.shared_strings.as_ref()
    }
}

impl<T: SheetSource + ?Sized> SheetSource for &T {
    fn sheet_names(&self) -> Vec<&str> {
        (**self).sheet_names()
    }

    fn sheet_cells(&self, index: usize) -> Option<&[RawCell]> {
        (**self).sheet_cells(index)
    }

    fn shared_strings(&self) -> Option<&SharedStringTable> {
        (**self).shared_strings()
    }
}
