//! Cell address codec
//!
//! Spreadsheet columns are named with a bijective base-26 numeral (`A`..`Z`,
//! then `AA`..`ZZ`, `AAA`, ...). Columns are 0-based (`A` = 0) and rows are
//! 1-based, exactly as they appear in an `A1`-style reference.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AF12")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row number (1-based, as displayed)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., AA=26)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from a 0-based column and a 1-based row
    pub fn new(col: u32, row: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheet_records_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("C5").unwrap();
    /// assert_eq!(addr.col, 2);
    /// assert_eq!(addr.row, 5);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (letters, row) = Self::split(s)?;
        let col = Self::letters_to_column(letters)?;
        Ok(Self { row, col })
    }

    /// Split an address into its letter run and its row number
    ///
    /// The whole string must be one run of ASCII letters followed by one run
    /// of ASCII digits. Row 0 does not exist and is rejected.
    pub fn split(s: &str) -> Result<(&str, u32)> {
        let digits_at = s
            .bytes()
            .position(|b| !b.is_ascii_alphabetic())
            .ok_or_else(|| Error::malformed(s))?;

        let (letters, digits) = s.split_at(digits_at);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::malformed(s));
        }

        let row: u32 = digits.parse().map_err(|_| Error::malformed(s))?;
        if row == 0 {
            return Err(Error::malformed(s));
        }

        Ok((letters, row))
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = Vec::new();
        let mut n = col as u64 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            result.push((n % 26) as u8 + b'A');
            n /= 26;
        }

        result.iter().rev().map(|&b| b as char).collect()
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    ///
    /// The empty sequence maps to 0. Letters are case-insensitive.
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Ok(0);
        }

        let mut col: u64 = 0;
        for b in letters.bytes() {
            if !b.is_ascii_alphabetic() {
                return Err(Error::malformed(letters));
            }
            col = col * 26 + u64::from(b.to_ascii_uppercase() - b'A' + 1);
            if col > u64::from(u32::MAX) + 1 {
                return Err(Error::malformed(letters));
            }
        }

        Ok((col - 1) as u32)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = Self::column_to_letters(self.col);
        result.push_str(&self.row.to_string());
        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The recursive definition the loop-based codec must agree with
    fn reference_letters(index: u32) -> String {
        if index < 26 {
            ((b'A' + index as u8) as char).to_string()
        } else {
            reference_letters(index / 26 - 1) + &reference_letters(index % 26)
        }
    }

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(51), "AZ");
        assert_eq!(CellAddress::column_to_letters(52), "BA");
        assert_eq!(CellAddress::column_to_letters(701), "ZZ");
        assert_eq!(CellAddress::column_to_letters(702), "AAA");
        assert_eq!(CellAddress::column_to_letters(16383), "XFD");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("").unwrap(), 0);
        assert_eq!(CellAddress::letters_to_column("A").unwrap(), 0);
        assert_eq!(CellAddress::letters_to_column("Z").unwrap(), 25);
        assert_eq!(CellAddress::letters_to_column("AA").unwrap(), 26);
        assert_eq!(CellAddress::letters_to_column("AZ").unwrap(), 51);
        assert_eq!(CellAddress::letters_to_column("BA").unwrap(), 52);
        assert_eq!(CellAddress::letters_to_column("ZZ").unwrap(), 701);
        assert_eq!(CellAddress::letters_to_column("AAA").unwrap(), 702);

        // Case insensitive
        assert_eq!(CellAddress::letters_to_column("af").unwrap(), 31);
    }

    #[test]
    fn test_letters_to_column_errors() {
        assert!(CellAddress::letters_to_column("A1").is_err());
        assert!(CellAddress::letters_to_column("A-").is_err());
        // Past u32::MAX
        assert!(CellAddress::letters_to_column("ZZZZZZZZ").is_err());
    }

    #[test]
    fn test_split() {
        assert_eq!(CellAddress::split("A1").unwrap(), ("A", 1));
        assert_eq!(CellAddress::split("AF120").unwrap(), ("AF", 120));
        assert_eq!(CellAddress::split("b7").unwrap(), ("b", 7));
    }

    #[test]
    fn test_split_errors() {
        for bad in ["", "A", "1", "12A", "A1B2", "A0", "$A$1", " A1", "A1 ", "A99999999999"] {
            assert_eq!(
                CellAddress::split(bad),
                Err(Error::MalformedAddress(bad.to_string())),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_and_display() {
        let addr = CellAddress::parse("C5").unwrap();
        assert_eq!(addr, CellAddress::new(2, 5));
        assert_eq!(addr.to_string(), "C5");

        let addr: CellAddress = "aa10".parse().unwrap();
        assert_eq!(addr, CellAddress::new(26, 10));
        assert_eq!(addr.to_a1_string(), "AA10");
    }

    #[test]
    fn test_row_major_ordering() {
        let mut addrs = vec![
            CellAddress::new(0, 2),
            CellAddress::new(3, 1),
            CellAddress::new(1, 2),
        ];
        addrs.sort();
        assert_eq!(
            addrs,
            vec![
                CellAddress::new(3, 1),
                CellAddress::new(0, 2),
                CellAddress::new(1, 2)
            ]
        );
    }

    proptest! {
        #[test]
        fn column_round_trip(n in 0u32..=u32::MAX) {
            let letters = CellAddress::column_to_letters(n);
            prop_assert_eq!(CellAddress::letters_to_column(&letters).unwrap(), n);
        }

        #[test]
        fn matches_recursive_definition(n in 0u32..1_000_000) {
            prop_assert_eq!(CellAddress::column_to_letters(n), reference_letters(n));
        }

        #[test]
        fn letters_round_trip(s in "[A-Z]{1,5}") {
            let col = CellAddress::letters_to_column(&s).unwrap();
            prop_assert_eq!(CellAddress::column_to_letters(col), s);
        }

        #[test]
        fn address_round_trip(col in 0u32..100_000, row in 1u32..=u32::MAX) {
            let addr = CellAddress::new(col, row);
            prop_assert_eq!(CellAddress::parse(&addr.to_a1_string()).unwrap(), addr);
        }
    }
}
