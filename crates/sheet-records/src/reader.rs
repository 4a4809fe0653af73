//! Reading typed records out of a document

use std::marker::PhantomData;

use sheet_records_core::{
    select_sheet, HeaderRow, Record, RecordMaterializer, Records, Result, SharedStringTable,
    SheetSource, SparseTable,
};

use crate::options::ReadOptions;

type SheetTable<'a> = SparseTable<Option<&'a SharedStringTable>>;

/// Reads records from any [`SheetSource`]
///
/// ```rust
/// use sheet_records::{ReadOptions, Record, SpreadsheetReader, Workbook};
///
/// #[derive(Debug, Default, Record)]
/// struct Item {
///     name: String,
///     count: i32,
/// }
///
/// let mut workbook = Workbook::new();
/// let sheet = workbook.add_worksheet("Item");
/// let sheet = workbook.worksheet_mut(sheet).unwrap();
/// sheet.set_text("A1", "name").unwrap();
/// sheet.set_text("B1", "count").unwrap();
/// sheet.set_text("A2", "widget").unwrap();
/// sheet.set_text("B2", "3").unwrap();
///
/// let reader = SpreadsheetReader::new(&workbook);
/// let items = reader
///     .deserialize::<Item>(&ReadOptions::default())
///     .unwrap()
///     .unwrap()
///     .to_vec()
///     .unwrap();
/// assert_eq!(items[0].name, "widget");
/// assert_eq!(items[0].count, 3);
/// ```
#[derive(Debug)]
pub struct SpreadsheetReader<S> {
    source: S,
}

impl<S: SheetSource> SpreadsheetReader<S> {
    /// Create a reader over a document
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Sheet names of the document, in document order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.source.sheet_names()
    }

    /// The underlying document
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take the underlying document back
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Open the records of one sheet
    ///
    /// Returns `Ok(None)` when the document has no sheets. Fails when the
    /// requested name matches more than one sheet.
    pub fn deserialize<T: Record>(&self, options: &ReadOptions) -> Result<Option<RecordSet<'_, T>>> {
        let names = self.source.sheet_names();
        let Some(selected) = select_sheet(options.sheet_name.as_deref(), T::type_name(), &names)?
        else {
            log::debug!("document has no sheets, nothing to read");
            return Ok(None);
        };

        let table = self.source.sheet_table(selected.index)?;
        let materializer = RecordMaterializer::from_table(&table)?
            .with_except(options.except_properties.iter().cloned());

        let set = RecordSet {
            sheet_name: names[selected.index],
            exact: selected.exact,
            table,
            materializer,
            _record: PhantomData,
        };

        log::debug!(
            "opened {} on sheet {:?}: {} records, {} headers",
            T::type_name(),
            set.sheet_name,
            set.len(),
            set.headers().len()
        );

        Ok(Some(set))
    }
}

/// The records of one sheet
///
/// Holds the sheet's table; records are produced on demand and iteration
/// can be repeated.
#[derive(Debug)]
pub struct RecordSet<'a, T> {
    sheet_name: &'a str,
    exact: bool,
    table: SheetTable<'a>,
    materializer: RecordMaterializer,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T: Record> RecordSet<'a, T> {
    /// Iterate over the records, in row order
    ///
    /// Each item fails only if its row refers to a shared string that does
    /// not exist.
    pub fn iter(&self) -> Records<'_, T, Option<&'a SharedStringTable>> {
        self.materializer.records(&self.table)
    }

    /// Number of records (rows after the header row)
    pub fn len(&self) -> usize {
        RecordMaterializer::data_row_count(&self.table)
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the sheet the records come from
    pub fn sheet_name(&self) -> &str {
        self.sheet_name
    }

    /// `false` if no sheet had the requested name and the first sheet was used
    pub fn exact_match(&self) -> bool {
        self.exact
    }

    /// The sheet's header row
    pub fn headers(&self) -> &HeaderRow {
        self.materializer.headers()
    }

    /// Materialize every record
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.iter().collect()
    }
}

impl<'s, 'a, T: Record> IntoIterator for &'s RecordSet<'a, T> {
    type Item = Result<T>;
    type IntoIter = Records<'s, T, Option<&'a SharedStringTable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Workbook};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, PartialEq, crate::Record)]
    struct Item {
        name: String,
        count: i32,
    }

    fn workbook(sheets: &[&str]) -> Workbook {
        let mut wb = Workbook::new();
        for (i, name) in sheets.iter().enumerate() {
            let index = wb.add_worksheet(*name);
            let ws = wb.worksheet_mut(index).unwrap();
            ws.set_text("A1", "name").unwrap();
            ws.set_text("B1", "count").unwrap();
            ws.set_text("A2", *name).unwrap();
            ws.set_text("B2", (i + 1).to_string()).unwrap();
        }
        wb
    }

    fn read(wb: &Workbook, options: &ReadOptions) -> Result<Option<(String, bool, Vec<Item>)>> {
        let reader = SpreadsheetReader::new(wb);
        let Some(set) = reader.deserialize::<Item>(options)? else {
            return Ok(None);
        };
        Ok(Some((set.sheet_name().to_string(), set.exact_match(), set.to_vec()?)))
    }

    #[test]
    fn test_default_sheet_is_type_name() {
        let wb = workbook(&["Other", "Item"]);

        let (sheet, exact, items) = read(&wb, &ReadOptions::default()).unwrap().unwrap();
        assert_eq!(sheet, "Item");
        assert!(exact);
        assert_eq!(
            items,
            vec![Item {
                name: "Item".into(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_fallback_to_first_sheet() {
        let wb = workbook(&["First", "Second"]);

        let (sheet, exact, _) = read(&wb, &ReadOptions::new().sheet_name("Missing"))
            .unwrap()
            .unwrap();
        assert_eq!(sheet, "First");
        assert!(!exact);
    }

    #[test]
    fn test_ambiguous_sheet() {
        let wb = workbook(&["Sheet", "Sheet"]);

        assert_eq!(
            read(&wb, &ReadOptions::new().sheet_name("Sheet")),
            Err(Error::AmbiguousSheetName {
                name: "Sheet".into(),
                count: 2
            })
        );
    }

    #[test]
    fn test_no_sheets() {
        assert_eq!(read(&Workbook::new(), &ReadOptions::default()), Ok(None));
    }

    #[test]
    fn test_record_set_is_restartable() {
        let wb = workbook(&["Item"]);
        let reader = SpreadsheetReader::new(&wb);
        let set = reader
            .deserialize::<Item>(&ReadOptions::default())
            .unwrap()
            .unwrap();

        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert_eq!(set.headers().get(1), Some("count"));

        let mut seen = 0;
        for record in &set {
            assert_eq!(record.unwrap().count, 1);
            seen += 1;
        }
        assert_eq!(seen, 1);
        assert_eq!(set.to_vec().unwrap().len(), 1);
        assert_eq!(reader.sheet_names(), vec!["Item"]);
    }
}
