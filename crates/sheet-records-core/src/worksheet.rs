//! Worksheet type - one named collection of raw cells

use crate::cell::{CellAddress, CellKind, RawCell, SharedString};
use crate::error::Result;

/// A single worksheet
///
/// Cells are kept in the order they were added, exactly as a document
/// reader would hand them over. Nothing is deduplicated here; that happens
/// when a [`SparseTable`](crate::SparseTable) is built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cells in insertion order
    cells: Vec<RawCell>,
}

impl Worksheet {
    /// Create a new empty worksheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
        }
    }

    /// Get the worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the worksheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// All cells, in insertion order
    pub fn cells(&self) -> &[RawCell] {
        &self.cells
    }

    /// Append a cell
    pub fn push(&mut self, cell: RawCell) {
        self.cells.push(cell);
    }

    /// Append an inline text cell at an A1-style reference
    pub fn set_text<S: Into<SharedString>>(&mut self, reference: &str, text: S) -> Result<()> {
        self.cells
            .push(RawCell::parse(reference, CellKind::Text, Some(text))?);
        Ok(())
    }

    /// Append an inline text cell at a column/row position
    pub fn set_text_at<S: Into<SharedString>>(&mut self, col: u32, row: u32, text: S) {
        self.cells
            .push(RawCell::text(CellAddress::new(col, row), text));
    }

    /// Append a cell referring to a shared string by ordinal
    pub fn set_shared(&mut self, reference: &str, id: usize) -> Result<()> {
        let address = CellAddress::parse(reference)?;
        self.cells.push(RawCell::shared(address, id));
        Ok(())
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove all cells
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
