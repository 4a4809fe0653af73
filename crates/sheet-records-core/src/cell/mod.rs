//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`RawCell`] - An addressed cell as read from a document
//! - [`SharedString`] - Cheaply clonable cell text
//! - [`ResolvedValue`] - Text read out of a dense table

mod address;
mod raw;
mod value;

pub use address::CellAddress;
pub use raw::{CellKind, RawCell};
pub use value::{CellContent, ResolvedValue, SharedString};
