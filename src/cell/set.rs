//! Validated character sets
//!
//! A [`CharSet`] can only be obtained through a constructor that proves the
//! rows are strictly ascending under the blank-trimmed comparator, so queries
//! against it need no further checks.

use crate::compare;
use crate::error::{CellError, Result};
use crate::search::{self, Lookup};

use super::CharCell;

/// Ordered, duplicate-free character store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    cell: CharCell,
}

impl CharSet {
    /// Validate a cell: sort its rows and drop blank-trimmed duplicates
    ///
    /// The first of each run of equal rows is kept.
    pub fn new(mut cell: CharCell) -> Self {
        sort_unique(&mut cell);
        Self { cell }
    }

    /// Accept a cell that is already strictly ascending
    ///
    /// Fails with `NotASet` at the first row not greater than its predecessor.
    pub fn from_sorted(cell: CharCell) -> Result<Self> {
        check_order(&cell)?;
        Ok(Self { cell })
    }

    /// Build a set from arbitrary items (sorting and deduplicating)
    pub fn from_items<I, T>(stride: usize, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        Ok(Self::new(CharCell::from_items(stride, items)?))
    }

    /// A set with no elements
    pub fn empty(stride: usize) -> Result<Self> {
        Ok(Self {
            cell: CharCell::new(stride, 0)?,
        })
    }

    /// Find the index of `query`, ignoring trailing blanks
    pub fn locate(&self, query: &[u8]) -> Lookup {
        search::locate(
            query,
            self.cell.card(),
            self.cell.stride(),
            self.cell.as_bytes(),
        )
    }

    /// Membership test, ignoring trailing blanks
    pub fn contains(&self, query: &[u8]) -> bool {
        self.locate(query).is_found()
    }

    pub fn card(&self) -> usize {
        self.cell.card()
    }

    pub fn stride(&self) -> usize {
        self.cell.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.cell.is_empty()
    }

    /// Element `index` without its padding
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.cell.get(index).map(compare::trim_blanks)
    }

    /// Elements in ascending order, without padding
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cell.rows().map(compare::trim_blanks)
    }

    pub fn as_cell(&self) -> &CharCell {
        &self.cell
    }

    pub fn into_cell(self) -> CharCell {
        self.cell
    }
}

/// Sort rows in place and remove duplicates; returns the number removed
pub(crate) fn sort_unique(cell: &mut CharCell) -> usize {
    let before = cell.card();
    let mut rows: Vec<Vec<u8>> = cell
        .rows()
        .map(|row| compare::trim_blanks(row).to_vec())
        .collect();

    // Rows are already trimmed, so plain slice ordering is the blank-trimmed order
    rows.sort();
    rows.dedup();
    cell.rewrite(&rows);

    let removed = before - cell.card();
    tracing::debug!(
        card = cell.card(),
        removed,
        "validated character cell"
    );
    removed
}

/// Verify strict ascending order of the rows in use
pub(crate) fn check_order(cell: &CharCell) -> Result<()> {
    let mut previous: Option<&[u8]> = None;
    for (index, row) in cell.rows().enumerate() {
        if let Some(prev) = previous {
            if compare::compare(prev, row).is_ge() {
                return Err(not_ascending(index));
            }
        }
        previous = Some(row);
    }
    Ok(())
}

/// Error for a row that does not strictly follow its predecessor
pub(crate) fn not_ascending(index: usize) -> CellError {
    CellError::NotASet(format!(
        "element {} is not strictly greater than its predecessor",
        index
    ))
}
