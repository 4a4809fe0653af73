//! Raw cells as handed over by a document reader

use super::{CellAddress, SharedString};
use crate::error::Result;

/// What a raw cell's payload means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Payload is the cell's literal text
    #[default]
    Text,
    /// Payload is a 0-based ordinal into the shared string table
    SharedString,
    /// Cell carries no value
    Empty,
}

impl CellKind {
    /// Map a package-level cell type attribute (`t="s"`, `t="n"`, ...) to a kind
    ///
    /// Only `s` is a shared string reference; every other tag, and a missing
    /// tag, means the payload is literal text.
    pub fn from_type_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("s") => CellKind::SharedString,
            _ => CellKind::Text,
        }
    }
}

/// A single addressed cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawCell {
    /// Where the cell sits
    pub address: CellAddress,
    /// How to interpret the payload
    pub kind: CellKind,
    /// Raw text of the cell, if any
    pub payload: Option<SharedString>,
}

impl RawCell {
    /// Create a new raw cell
    pub fn new(address: CellAddress, kind: CellKind, payload: Option<SharedString>) -> Self {
        Self {
            address,
            kind,
            payload,
        }
    }

    /// Create a raw cell from an A1-style reference
    pub fn parse<S: Into<SharedString>>(
        reference: &str,
        kind: CellKind,
        payload: Option<S>,
    ) -> Result<Self> {
        let address = CellAddress::parse(reference)?;
        Ok(Self::new(address, kind, payload.map(Into::into)))
    }

    /// A literal text cell
    pub fn text<S: Into<SharedString>>(address: CellAddress, text: S) -> Self {
        Self::new(address, CellKind::Text, Some(text.into()))
    }

    /// A cell referring to shared string number `id`
    pub fn shared(address: CellAddress, id: usize) -> Self {
        Self::new(
            address,
            CellKind::SharedString,
            Some(SharedString::from(id.to_string())),
        )
    }

    /// A cell with no value
    pub fn empty(address: CellAddress) -> Self {
        Self::new(address, CellKind::Empty, None)
    }

    /// Payload as a string slice
    pub fn payload_str(&self) -> Option<&str> {
        self.payload.as_ref().map(SharedString::as_str)
    }
}
