//! Dense view over a sparse collection of addressed cells
//!
//! A [`SparseTable`] is a full rectangle: rows `1..=max_row` by columns
//! `0..=max_col`. Any address inside that rectangle that has no cell reads
//! as "no value", never as an error. If one row has 25 columns, every row
//! has 25 columns.

use std::ops::RangeInclusive;

use ahash::AHashMap;

use crate::cell::{CellAddress, CellKind, RawCell, ResolvedValue, SharedString};
use crate::error::{Error, Result};
use crate::shared::SharedStringResolver;

/// The bottom-right corner of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Highest row number present (1-based)
    pub max_row: u32,
    /// Highest column index present (0-based)
    pub max_col: u32,
}

impl Extent {
    /// Number of columns in every row
    pub fn col_count(&self) -> u64 {
        u64::from(self.max_col) + 1
    }
}

/// Address-keyed cells plus the shared strings they may refer to
///
/// Immutable once built. Row and column iteration re-derives everything from
/// the cell map, so it can be repeated any number of times.
#[derive(Debug)]
pub struct SparseTable<R> {
    /// Address → cell
    cells: AHashMap<CellAddress, RawCell>,

    /// Where shared string cells get their text
    resolver: R,

    /// Computed once at construction; `None` for a table with no cells
    extent: Option<Extent>,
}

impl<R: SharedStringResolver> SparseTable<R> {
    /// Build a table from already-addressed cells
    ///
    /// A later cell at the same address replaces an earlier one.
    pub fn new<I>(cells: I, resolver: R) -> Self
    where
        I: IntoIterator<Item = RawCell>,
    {
        let mut map: AHashMap<CellAddress, RawCell> = AHashMap::new();
        let mut extent: Option<Extent> = None;

        for cell in cells {
            let address = cell.address;
            extent = Some(match extent {
                None => Extent {
                    max_row: address.row,
                    max_col: address.col,
                },
                Some(e) => Extent {
                    max_row: e.max_row.max(address.row),
                    max_col: e.max_col.max(address.col),
                },
            });

            if map.insert(address, cell).is_some() {
                log::debug!("duplicate cell at {address}, keeping the later one");
            }
        }

        log::debug!("built table of {} cells, extent {:?}", map.len(), extent);

        Self {
            cells: map,
            resolver,
            extent,
        }
    }

    /// Build a table from A1-style references
    ///
    /// A single malformed reference aborts construction with
    /// [`Error::MalformedAddress`].
    pub fn from_references<I, S, P>(cells: I, resolver: R) -> Result<Self>
    where
        I: IntoIterator<Item = (S, CellKind, Option<P>)>,
        S: AsRef<str>,
        P: Into<SharedString>,
    {
        let cells = cells
            .into_iter()
            .map(|(reference, kind, payload)| RawCell::parse(reference.as_ref(), kind, payload))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(cells, resolver))
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the table holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows to iterate (0 for an empty table)
    pub fn row_count(&self) -> u32 {
        self.extent.map_or(0, |e| e.max_row)
    }

    /// The table's extent
    ///
    /// Check [`is_empty`](Self::is_empty) or [`row_count`](Self::row_count)
    /// first: an empty table has no extent.
    pub fn extent(&self) -> Result<Extent> {
        self.extent.ok_or(Error::EmptyTableExtent)
    }

    /// Highest row number present (1-based)
    pub fn max_row(&self) -> Result<u32> {
        self.extent().map(|e| e.max_row)
    }

    /// Highest column index present (0-based)
    pub fn max_col(&self) -> Result<u32> {
        self.extent().map(|e| e.max_col)
    }

    /// The shared string resolver backing this table
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The raw cell at an address, if one was supplied
    pub fn raw(&self, col: u32, row: u32) -> Option<&RawCell> {
        self.cells.get(&CellAddress::new(col, row))
    }

    /// Read one cell's value
    ///
    /// Shared string cells are always resolved, even when the payload looks
    /// empty, because the id is what carries meaning. Text cells only count
    /// when their payload is non-empty.
    pub fn value_at(&self, col: u32, row: u32) -> Result<Option<ResolvedValue>> {
        let Some(cell) = self.raw(col, row) else {
            return Ok(None);
        };

        match cell.kind {
            CellKind::SharedString => {
                let id = cell.payload_str().unwrap_or_default();
                let text = self.resolver.resolve(id)?;
                Ok(Some(ResolvedValue::new(col, text)))
            }
            CellKind::Text => Ok(cell
                .payload
                .as_ref()
                .filter(|p| !p.is_empty())
                .map(|p| ResolvedValue::new(col, p.clone()))),
            CellKind::Empty => Ok(None),
        }
    }

    /// Iterate over all rows, top to bottom
    pub fn rows(&self) -> Rows<'_, R> {
        Rows {
            table: self,
            rows: 1..=self.row_count(),
        }
    }

    /// A single row by its 1-based number
    ///
    /// Returns `None` outside `1..=row_count()`.
    pub fn row(&self, row: u32) -> Option<RowView<'_, R>> {
        (row >= 1 && row <= self.row_count()).then_some(RowView { table: self, row })
    }
}

/// One row of a [`SparseTable`]
#[derive(Debug)]
pub struct RowView<'t, R> {
    table: &'t SparseTable<R>,
    row: u32,
}

impl<R> Clone for RowView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RowView<'_, R> {}

impl<'t, R: SharedStringResolver> RowView<'t, R> {
    /// Row number (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Value in one column of this row
    pub fn get(&self, col: u32) -> Result<Option<ResolvedValue>> {
        self.table.value_at(col, self.row)
    }

    /// Every column of the table's rectangle, left to right
    pub fn columns(&self) -> Columns<'t, R> {
        // No extent, no columns
        let cols = match self.table.extent {
            Some(e) => 0..=e.max_col,
            None => 1..=0,
        };
        Columns {
            table: self.table,
            row: self.row,
            cols,
        }
    }
}

/// Iterator over the rows of a table
#[derive(Debug)]
pub struct Rows<'t, R> {
    table: &'t SparseTable<R>,
    rows: RangeInclusive<u32>,
}

impl<'t, R: SharedStringResolver> Iterator for Rows<'t, R> {
    type Item = RowView<'t, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(RowView {
            table: self.table,
            row,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<R: SharedStringResolver> ExactSizeIterator for Rows<'_, R> {}

/// Iterator over the columns of one row
#[derive(Debug)]
pub struct Columns<'t, R> {
    table: &'t SparseTable<R>,
    row: u32,
    cols: RangeInclusive<u32>,
}

impl<R: SharedStringResolver> Iterator for Columns<'_, R> {
    type Item = Result<Option<ResolvedValue>>;

    fn next(&mut self) -> Option<Self::Item> {
        let col = self.cols.next()?;
        Some(self.table.value_at(col, self.row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cols.size_hint()
    }
}

impl<R: SharedStringResolver> ExactSizeIterator for Columns<'_, R> {}
