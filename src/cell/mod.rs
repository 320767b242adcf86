//! Cell Module
//!
//! Fixed-capacity containers for set data.
//!
//! ## Responsibilities
//! - Fixed-stride, blank-padded storage for character data
//! - Validated construction of ordered, duplicate-free character sets
//! - A type-tagged cell carrying character, integer or double data plus a
//!   "this is a set" flag, as handed around by callers of the guarded
//!   membership routines
//!
//! ## Set State
//! ```text
//!   Cell::char / int / double          Cell::validate (sort + dedupe)
//!   ─────────────────────────► Unvalidated ─────────────────────► Validated
//!                                   │                                ▲
//!                                   └──── Cell::mark_set (ordered) ──┘
//! ```

mod chars;
mod set;

use std::fmt;

pub use chars::CharCell;
pub use set::CharSet;

use crate::error::{CellError, Result};

/// Data type carried by a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Char,
    Int,
    Double,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Char => write!(f, "character"),
            CellType::Int => write!(f, "integer"),
            CellType::Double => write!(f, "double precision"),
        }
    }
}

/// Whether a cell's data is known to be a set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetState {
    /// Order and uniqueness have not been established
    Unvalidated,

    /// Strictly ascending, no duplicates
    Validated,
}

/// Payload of a [`Cell`]
#[derive(Debug, Clone, PartialEq)]
pub enum CellData {
    Char(CharCell),
    Int(Vec<i32>),
    Double(Vec<f64>),
}

/// Type-tagged cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    data: CellData,
    state: SetState,
}

impl Cell {
    /// Character cell, not yet a set
    pub fn char(cell: CharCell) -> Self {
        Self::unvalidated(CellData::Char(cell))
    }

    /// Integer cell, not yet a set
    pub fn int(values: Vec<i32>) -> Self {
        Self::unvalidated(CellData::Int(values))
    }

    /// Double precision cell, not yet a set
    pub fn double(values: Vec<f64>) -> Self {
        Self::unvalidated(CellData::Double(values))
    }

    fn unvalidated(data: CellData) -> Self {
        Self {
            data,
            state: SetState::Unvalidated,
        }
    }

    pub fn cell_type(&self) -> CellType {
        match self.data {
            CellData::Char(_) => CellType::Char,
            CellData::Int(_) => CellType::Int,
            CellData::Double(_) => CellType::Double,
        }
    }

    pub fn state(&self) -> SetState {
        self.state
    }

    pub fn is_set(&self) -> bool {
        self.state == SetState::Validated
    }

    /// Number of elements in use
    pub fn card(&self) -> usize {
        match &self.data {
            CellData::Char(cell) => cell.card(),
            CellData::Int(values) => values.len(),
            CellData::Double(values) => values.len(),
        }
    }

    pub fn data(&self) -> &CellData {
        &self.data
    }

    /// Turn the cell into a set: sort, remove duplicates, set the flag
    ///
    /// Double cells containing NaN are rejected and left untouched.
    pub fn validate(&mut self) -> Result<()> {
        match &mut self.data {
            CellData::Char(cell) => {
                set::sort_unique(cell);
            }
            CellData::Int(values) => {
                values.sort_unstable();
                values.dedup();
            }
            CellData::Double(values) => {
                if let Some(index) = values.iter().position(|v| v.is_nan()) {
                    return Err(CellError::InvalidElement {
                        index,
                        reason: "NaN has no place in an ordered set".to_string(),
                    });
                }
                values.sort_unstable_by(f64::total_cmp);
                values.dedup();
            }
        }
        self.state = SetState::Validated;
        Ok(())
    }

    /// Set the flag only if the data is already strictly ascending
    pub fn mark_set(&mut self) -> Result<()> {
        match &self.data {
            CellData::Char(cell) => set::check_order(cell)?,
            CellData::Int(values) => check_ascending(values)?,
            CellData::Double(values) => check_ascending(values)?,
        }
        self.state = SetState::Validated;
        Ok(())
    }
}

impl From<CharSet> for Cell {
    fn from(set: CharSet) -> Self {
        Self {
            data: CellData::Char(set.into_cell()),
            state: SetState::Validated,
        }
    }
}

fn check_ascending<T: PartialOrd>(values: &[T]) -> Result<()> {
    // `!(a < b)` also catches NaN
    match values.windows(2).position(|pair| !(pair[0] < pair[1])) {
        Some(pos) => Err(set::not_ascending(pos + 1)),
        None => Ok(()),
    }
}
