//! Read options

use ahash::AHashSet;

/// Options for reading records out of a document
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Sheet to read; `None` or empty uses the record type's name
    pub sheet_name: Option<String>,
    /// Header names whose columns are never read
    pub except_properties: AHashSet<String>,
}

impl ReadOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the sheet with this name
    pub fn sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Skip the columns with these header names
    pub fn except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except_properties
            .extend(names.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ReadOptions::new().sheet_name("Items").except(["a", "b"]);

        assert_eq!(options.sheet_name.as_deref(), Some("Items"));
        assert_eq!(options.except_properties.len(), 2);
        assert!(options.except_properties.contains("b"));
    }

    #[test]
    fn test_default() {
        let options = ReadOptions::default();

        assert!(options.sheet_name.is_none());
        assert!(options.except_properties.is_empty());
    }
}
