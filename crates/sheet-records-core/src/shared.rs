//! Shared string table and the resolver capability built on it
//!
//! Documents store repeated text once, in an ordered table, and cells refer
//! to it by 0-based ordinal. Tables only ever see that indirection through
//! [`SharedStringResolver`].

use ahash::AHashMap;

use crate::cell::SharedString;
use crate::error::{Error, Result};

/// Resolves a shared string id (an ordinal in decimal text form) to its text
pub trait SharedStringResolver {
    /// Look up the string with the given id
    ///
    /// Fails with [`Error::UnresolvedSharedString`] when the id is not a
    /// non-negative integer, is out of range, or there is no table at all.
    fn resolve(&self, id: &str) -> Result<SharedString>;
}

impl<T: SharedStringResolver + ?Sized> SharedStringResolver for &T {
    fn resolve(&self, id: &str) -> Result<SharedString> {
        (**self).resolve(id)
    }
}

/// `None` models a document that has no shared string table
impl<T: SharedStringResolver> SharedStringResolver for Option<T> {
    fn resolve(&self, id: &str) -> Result<SharedString> {
        match self {
            Some(table) => table.resolve(id),
            None => Err(Error::unresolved(
                id,
                "shared string cell found, but no shared string table",
            )),
        }
    }
}

/// Ordered table of shared strings
///
/// Writers [`intern`](SharedStringTable::intern) text to get its ordinal,
/// so each distinct string is stored once.
#[derive(Debug, Clone, Default)]
pub struct SharedStringTable {
    strings: Vec<SharedString>,
    index: AHashMap<SharedString, usize>,
}

impl SharedStringTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string, even if an equal one is already present
    ///
    /// Returns the new string's ordinal. Tables read from documents may
    /// legitimately hold duplicates.
    pub fn push<S: Into<SharedString>>(&mut self, s: S) -> usize {
        let shared = s.into();
        let ordinal = self.strings.len();
        self.index.entry(shared.clone()).or_insert(ordinal);
        self.strings.push(shared);
        ordinal
    }

    /// Get the ordinal of a string, adding it if it is not present yet
    pub fn intern<S: AsRef<str>>(&mut self, s: S) -> usize {
        let s = s.as_ref();
        if let Some(&ordinal) = self.index.get(s) {
            ordinal
        } else {
            self.push(s)
        }
    }

    /// Get a string by ordinal
    pub fn get(&self, ordinal: usize) -> Option<&SharedString> {
        self.strings.get(ordinal)
    }

    /// Iterate over strings in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = &SharedString> {
        self.strings.iter()
    }

    /// Get the number of strings in the table
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl SharedStringResolver for SharedStringTable {
    fn resolve(&self, id: &str) -> Result<SharedString> {
        let ordinal: usize = id
            .trim()
            .parse()
            .map_err(|_| Error::unresolved(id, "id is not a non-negative integer"))?;

        self.strings
            .get(ordinal)
            .cloned()
            .ok_or_else(|| Error::unresolved(id, "id is out of range"))
    }
}

impl<S: Into<SharedString>> FromIterator<S> for SharedStringTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for s in iter {
            table.push(s);
        }
        table
    }
}
