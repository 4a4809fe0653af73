//! Choosing which sheet of a document to read

use crate::error::{Error, Result};

/// The sheet chosen by [`select_sheet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetMatch {
    /// Position of the sheet in document order
    pub index: usize,
    /// `false` when no sheet had the requested name and the first one was used
    pub exact: bool,
}

/// Resolve a requested sheet name against the document's sheet names
///
/// An absent or empty request uses `default_name` instead. A single sheet
/// with that exact name is selected; several are ambiguous. With no match
/// the first sheet is used, and a document with no sheets yields `Ok(None)`.
pub fn select_sheet<S: AsRef<str>>(
    requested: Option<&str>,
    default_name: &str,
    sheets: &[S],
) -> Result<Option<SheetMatch>> {
    let name = match requested {
        Some(name) if !name.is_empty() => name,
        _ => default_name,
    };

    let mut matches = sheets
        .iter()
        .enumerate()
        .filter(|(_, sheet)| sheet.as_ref() == name)
        .map(|(index, _)| index);

    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(Some(SheetMatch { index, exact: true })),
        (Some(_), Some(_)) => Err(Error::AmbiguousSheetName {
            name: name.to_string(),
            count: 2 + matches.count(),
        }),
        (None, _) if sheets.is_empty() => Ok(None),
        (None, _) => {
            log::debug!(
                "no sheet named {name:?}, using first sheet {:?}",
                sheets[0].as_ref()
            );
            Ok(Some(SheetMatch {
                index: 0,
                exact: false,
            }))
        }
    }
}
