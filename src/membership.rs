//! Membership Module
//!
//! Guarded "element of a set" entry points over type-tagged [`Cell`]s.
//!
//! Each routine checks its arguments before delegating to the search:
//! 1. the item is present (character form only)
//! 2. the cell carries the expected data type
//! 3. the cell is flagged as a set
//!
//! A rejected call returns the error and logs it at `debug`; the search
//! itself never fails.

use crate::cell::{Cell, CellData, CellType};
use crate::error::{CellError, Result};
use crate::search::{self, Lookup};

/// Is `item` an element of the character set `set`?
///
/// Trailing blanks in `item` and in the set's members are not significant;
/// the comparison is case-sensitive.
pub fn elemc(item: Option<&[u8]>, set: &Cell) -> Result<bool> {
    Ok(locate_char(item, set)?.is_found())
}

/// Is `item` an element of the integer set `set`?
pub fn elemi(item: i32, set: &Cell) -> Result<bool> {
    match checked(set, CellType::Int)? {
        CellData::Int(values) => Ok(search::locate_ordered(&item, values).is_found()),
        _ => Err(mismatch(set, CellType::Int)),
    }
}

/// Is `item` an element of the double precision set `set`?
pub fn elemd(item: f64, set: &Cell) -> Result<bool> {
    match checked(set, CellType::Double)? {
        CellData::Double(values) => Ok(search::locate_ordered(&item, values).is_found()),
        _ => Err(mismatch(set, CellType::Double)),
    }
}

/// Index of `item` within the character set `set`
pub fn locate_char(item: Option<&[u8]>, set: &Cell) -> Result<Lookup> {
    let Some(item) = item else {
        tracing::debug!("rejected character membership query: null item");
        return Err(CellError::NullPointer("item"));
    };

    match checked(set, CellType::Char)? {
        CellData::Char(cell) => Ok(search::locate(
            item,
            cell.card(),
            cell.stride(),
            cell.as_bytes(),
        )),
        _ => Err(mismatch(set, CellType::Char)),
    }
}

/// Apply the type and set-flag checks, returning the payload
fn checked(set: &Cell, expected: CellType) -> Result<&CellData> {
    if set.cell_type() != expected {
        let err = mismatch(set, expected);
        tracing::debug!(%err, "rejected membership query");
        return Err(err);
    }
    if !set.is_set() {
        tracing::debug!(cell_type = %expected, "rejected membership query: cell is not a set");
        return Err(CellError::NotASet(format!(
            "{} cell has not been validated",
            expected
        )));
    }
    Ok(set.data())
}

fn mismatch(set: &Cell, expected: CellType) -> CellError {
    CellError::TypeMismatch {
        expected,
        found: set.cell_type(),
    }
}
