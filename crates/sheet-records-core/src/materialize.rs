//! Header-driven materialization of records from a dense table
//!
//! The first row of a table names the columns. Every later row becomes one
//! record: every cell of the row is resolved, then each column's text is
//! offered to the field named by that column's header. Columns without a
//! header, columns whose header is excluded, and cells without a value never
//! reach a field.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use ahash::AHashSet;

use crate::cell::SharedString;
use crate::error::Result;
use crate::record::{FieldAssignment, Record};
use crate::shared::SharedStringResolver;
use crate::table::{RowView, Rows, SparseTable};

/// Column index → header name, taken from a table's first row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    names: BTreeMap<u32, SharedString>,
}

impl HeaderRow {
    /// Read the headers out of a row
    ///
    /// Columns with no value have no header. A repeated name is kept on
    /// every column it heads; per row, the leftmost of those columns that
    /// has a value supplies the field.
    pub fn from_row<R: SharedStringResolver>(row: &RowView<'_, R>) -> Result<Self> {
        let mut names = BTreeMap::new();
        let mut seen = AHashSet::new();

        for value in row.columns() {
            let Some(value) = value? else {
                continue;
            };

            if !seen.insert(value.value.clone()) {
                log::warn!(
                    "header {:?} repeats in column {}, the leftmost filled column wins",
                    value.as_str(),
                    value.column
                );
            }
            names.insert(value.column, value.value);
        }

        Ok(Self { names })
    }

    /// Header name of a column
    pub fn get(&self, col: u32) -> Option<&str> {
        self.names.get(&col).map(SharedString::as_str)
    }

    /// Iterate over `(column, name)` pairs, left to right
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names.iter().map(|(col, name)| (*col, name.as_str()))
    }

    /// Number of named columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no column has a header
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u32, SharedString)> for HeaderRow {
    fn from_iter<I: IntoIterator<Item = (u32, SharedString)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Turns data rows into records using a header row
#[derive(Debug, Clone, Default)]
pub struct RecordMaterializer {
    headers: HeaderRow,
    except: AHashSet<String>,
}

impl RecordMaterializer {
    /// Create a materializer for explicit headers
    pub fn new(headers: HeaderRow) -> Self {
        Self {
            headers,
            except: AHashSet::new(),
        }
    }

    /// Create a materializer whose headers are the table's first row
    ///
    /// An empty table yields no headers and, later, no records.
    pub fn from_table<R: SharedStringResolver>(table: &SparseTable<R>) -> Result<Self> {
        let headers = match table.row(1) {
            Some(row) => HeaderRow::from_row(&row)?,
            None => HeaderRow::default(),
        };
        Ok(Self::new(headers))
    }

    /// Skip the columns with these header names
    pub fn with_except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except.extend(names.into_iter().map(Into::into));
        self
    }

    /// The header row in use
    pub fn headers(&self) -> &HeaderRow {
        &self.headers
    }

    /// Build one record from one data row
    ///
    /// Fails when any cell of the row, named or not, refers to a shared
    /// string that cannot be resolved. Unknown columns and text that does
    /// not coerce are skipped.
    pub fn materialize_row<T, R>(&self, row: &RowView<'_, R>) -> Result<T>
    where
        T: Record,
        R: SharedStringResolver,
    {
        let values = row.columns().collect::<Result<Vec<_>>>()?;

        let mut record = T::default();
        let mut filled = AHashSet::new();

        for value in values.iter().flatten() {
            let Some(name) = self.headers.get(value.column) else {
                continue;
            };
            if self.except.contains(name) {
                log::trace!("row {}: skipping excluded column {name:?}", row.row());
                continue;
            }
            // Repeated header: an earlier column already had a value
            if !filled.insert(name) {
                continue;
            }

            match record.set_field(name, value.as_str()) {
                FieldAssignment::Assigned | FieldAssignment::Unknown => {}
                FieldAssignment::Rejected => log::trace!(
                    "row {}: {:?} does not fit field {name:?}, leaving default",
                    row.row(),
                    value.as_str()
                ),
            }
        }

        Ok(record)
    }

    /// Lazily materialize every row after the header row, in order
    ///
    /// Calling this again starts over from the first data row.
    pub fn records<'a, T, R>(&'a self, table: &'a SparseTable<R>) -> Records<'a, T, R>
    where
        T: Record,
        R: SharedStringResolver,
    {
        let mut rows = table.rows();
        rows.next();
        Records {
            materializer: self,
            rows,
            _record: PhantomData,
        }
    }

    /// Number of records [`records`](Self::records) produces for a table
    pub fn data_row_count<R: SharedStringResolver>(table: &SparseTable<R>) -> usize {
        table.row_count().saturating_sub(1) as usize
    }
}

/// Iterator over the records of a table
pub struct Records<'a, T, R> {
    materializer: &'a RecordMaterializer,
    rows: Rows<'a, R>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> Iterator for Records<'_, T, R>
where
    T: Record,
    R: SharedStringResolver,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.materializer.materialize_row(&row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<T, R> ExactSizeIterator for Records<'_, T, R>
where
    T: Record,
    R: SharedStringResolver,
{
}
