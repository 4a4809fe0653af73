//! Cell text values

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Interned string for memory efficiency
///
/// Spreadsheets repeat the same text across many cells, and every shared
/// string reference to one ordinal resolves to the same text. Using `Arc<str>`
/// lets all of them share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for SharedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SharedString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString(Arc::from(s))
    }
}

impl PartialEq<str> for SharedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SharedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SharedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SharedString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SharedString::from)
    }
}

/// A value read out of a dense table
///
/// Absence of content is modelled by `Option<ResolvedValue>` being `None`,
/// which is distinct from a present empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    /// Column the value was found in (0-based)
    pub column: u32,
    /// The text found in that column
    pub value: SharedString,
}

impl ResolvedValue {
    /// Create a new resolved value
    pub fn new(column: u32, value: SharedString) -> Self {
        Self { column, value }
    }

    /// Get the value as a string slice
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

/// How a record field is written back to a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Numeric text (integers, decimals, 0/1 booleans, serial dates) stored inline
    Number(String),
    /// Free text, stored through the shared string table
    Text(String),
}

impl CellContent {
    /// The text that will land in the cell
    pub fn as_str(&self) -> &str {
        match self {
            CellContent::Number(s) | CellContent::Text(s) => s,
        }
    }
}
