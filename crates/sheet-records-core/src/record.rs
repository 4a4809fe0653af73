//! Typed records and the cell text coercions behind their fields
//!
//! A [`Record`] is a struct whose fields can be looked up by header name.
//! Each field's type implements [`CellField`], which decides how cell text
//! becomes a value. The mapping from name to field is generated at compile
//! time by `#[derive(Record)]`; nothing is inspected at runtime.
//!
//! Coercion is best effort: text that does not parse leaves the field at its
//! default. Spreadsheets are edited by hand and a stray `n/a` in an integer
//! column must not fail the whole read.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::cell::CellContent;
use crate::date;

/// The coercion rule a field type follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Serial day count (OLE automation date)
    DateTime,
    /// Base-10 signed or unsigned integer
    Integer,
    /// Base-10 fixed point decimal
    Decimal,
    /// `0`/non-zero integer, or `true`/`false`
    Boolean,
    /// Trimmed, non-empty text
    Text,
    /// Symbolic name of an enumeration variant
    Enumeration,
}

/// Outcome of offering cell text to a named field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAssignment {
    /// The text was coerced and stored
    Assigned,
    /// The field exists but the text did not coerce; the field is unchanged
    Rejected,
    /// No settable field has that name
    Unknown,
}

/// A field's header name and coercion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Header name the field is matched against
    pub name: &'static str,
    /// How text is coerced into it
    pub kind: FieldKind,
    /// Whether the field is an `Option`
    pub nullable: bool,
}

impl FieldInfo {
    /// Create a new field descriptor
    pub const fn new(name: &'static str, kind: FieldKind, nullable: bool) -> Self {
        Self {
            name,
            kind,
            nullable,
        }
    }
}

/// A type that can be read from, and written to, a single cell
pub trait CellField: Sized {
    /// Coercion rule for this type
    const KIND: FieldKind;

    /// Whether the type is an `Option` wrapper
    const NULLABLE: bool = false;

    /// Convert cell text, or `None` if it does not fit
    fn coerce(text: &str) -> Option<Self>;

    /// Cell content to write for this value, or `None` to leave the cell out
    fn to_cell(&self) -> Option<CellContent>;

    /// Store the coerced text in `slot`, leaving it alone when coercion fails
    fn assign(slot: &mut Self, text: &str) -> FieldAssignment {
        match Self::coerce(text) {
            Some(value) => {
                *slot = value;
                FieldAssignment::Assigned
            }
            None => FieldAssignment::Rejected,
        }
    }
}

/// An enumeration read and written by variant name
///
/// Implemented by `#[derive(CellEnum)]` on fieldless enums.
pub trait CellEnum: Sized + Copy + 'static {
    /// All variants with their names, in declaration order
    const VARIANTS: &'static [(&'static str, Self)];

    /// Look up a variant by its exact name
    fn from_name(name: &str) -> Option<Self>;

    /// Name of this variant
    fn name(&self) -> &'static str;
}

/// A struct that can be materialized from one table row
///
/// Implemented by `#[derive(Record)]`. `Default` supplies the value of every
/// field no column sets.
pub trait Record: Default {
    /// Name used as the sheet name when none is requested
    fn type_name() -> &'static str;

    /// Settable fields, in declaration order
    fn fields() -> &'static [FieldInfo];

    /// Offer cell text to the field with header name `name`
    fn set_field(&mut self, name: &str, text: &str) -> FieldAssignment;

    /// Cell content of every field in [`fields`](Record::fields) order
    fn field_cells(&self) -> Vec<Option<CellContent>>;
}

impl CellField for String {
    const KIND: FieldKind = FieldKind::Text;

    fn coerce(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn to_cell(&self) -> Option<CellContent> {
        (!self.is_empty()).then(|| CellContent::Text(self.clone()))
    }
}

impl CellField for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    /// `0`/`1` is the stored encoding; `true`/`false` is accepted as well
    fn coerce(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(n) = text.parse::<i32>() {
            return Some(n != 0);
        }

        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn to_cell(&self) -> Option<CellContent> {
        Some(CellContent::Number(if *self { "1" } else { "0" }.to_string()))
    }
}

macro_rules! integer_fields {
    ($($ty:ty),*) => {
        $(
            impl CellField for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn coerce(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }

                fn to_cell(&self) -> Option<CellContent> {
                    Some(CellContent::Number(self.to_string()))
                }
            }
        )*
    };
}

integer_fields!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl CellField for Decimal {
    const KIND: FieldKind = FieldKind::Decimal;

    fn coerce(text: &str) -> Option<Self> {
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }

    fn to_cell(&self) -> Option<CellContent> {
        Some(CellContent::Number(self.to_string()))
    }
}

impl CellField for NaiveDateTime {
    const KIND: FieldKind = FieldKind::DateTime;

    fn coerce(text: &str) -> Option<Self> {
        let serial: f64 = text.trim().parse().ok()?;
        date::from_ole_date(serial)
    }

    fn to_cell(&self) -> Option<CellContent> {
        Some(CellContent::Number(date::to_ole_date(*self).to_string()))
    }
}

impl CellField for NaiveDate {
    const KIND: FieldKind = FieldKind::DateTime;

    fn coerce(text: &str) -> Option<Self> {
        let serial: f64 = text.trim().parse().ok()?;
        date::date_from_ole(serial)
    }

    fn to_cell(&self) -> Option<CellContent> {
        Some(CellContent::Number(date::date_to_ole(*self).to_string()))
    }
}

impl<T: CellField> CellField for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;

    fn coerce(text: &str) -> Option<Self> {
        T::coerce(text).map(Some)
    }

    fn to_cell(&self) -> Option<CellContent> {
        self.as_ref().and_then(T::to_cell)
    }
}

/// Coerce by variant name; used by `#[derive(CellEnum)]`
pub fn coerce_enum<E: CellEnum>(text: &str) -> Option<E> {
    E::from_name(text.trim())
}

/// Write a variant by name; used by `#[derive(CellEnum)]`
pub fn enum_to_cell<E: CellEnum>(value: &E) -> Option<CellContent> {
    Some(CellContent::Text(value.name().to_string()))
}
