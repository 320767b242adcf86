//! Character cell storage
//!
//! Fixed-stride rows, each right-padded with blanks to `stride` bytes.

use crate::compare::{self, BLANK};
use crate::error::{CellError, Result};

/// Raw fixed-stride character storage
///
/// Holds `capacity` rows of `stride` bytes; only the first `card` rows are
/// logically part of the cell. No ordering is implied; see
/// [`CharSet`](super::CharSet) for the validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCell {
    /// Maximum content length of every row
    stride: usize,
    /// Rows allocated in `data`
    capacity: usize,
    /// Rows in use
    card: usize,
    /// `capacity * stride` bytes, unused rows all blank
    data: Vec<u8>,
}

impl CharCell {
    /// Create an empty cell with room for `capacity` rows
    pub fn new(stride: usize, capacity: usize) -> Result<Self> {
        if stride == 0 {
            return Err(CellError::Config("cell stride must be positive".to_string()));
        }
        let len = stride.checked_mul(capacity).ok_or_else(|| {
            CellError::Config(format!(
                "cell of {} rows at stride {} is too large",
                capacity, stride
            ))
        })?;

        Ok(Self {
            stride,
            capacity,
            card: 0,
            data: vec![BLANK; len],
        })
    }

    /// Build a cell holding exactly `items`, in the given order
    pub fn from_items<I, T>(stride: usize, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let mut cell = Self::new(stride, items.len())?;
        for item in &items {
            cell.push(item.as_ref())?;
        }
        Ok(cell)
    }

    /// Append a row
    ///
    /// Trailing blanks are not counted against the stride.
    pub fn push(&mut self, item: &[u8]) -> Result<()> {
        let content = compare::trim_blanks(item);
        if content.len() > self.stride {
            return Err(CellError::ElementTooLong {
                len: content.len(),
                stride: self.stride,
            });
        }
        if self.card == self.capacity {
            return Err(CellError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let start = self.card * self.stride;
        self.data[start..start + content.len()].copy_from_slice(content);
        self.card += 1;
        Ok(())
    }

    /// Number of rows in use
    pub fn card(&self) -> usize {
        self.card
    }

    /// Number of rows allocated
    pub fn size(&self) -> usize {
        self.capacity
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.card == 0
    }

    /// Padded row `index`, if it is in use
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.card {
            return None;
        }
        let start = index * self.stride;
        Some(&self.data[start..start + self.stride])
    }

    /// Padded rows in use, in storage order
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.stride).take(self.card)
    }

    /// The whole backing buffer, including unused rows
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Move the contents out, leaving an empty zero-capacity cell behind
    pub(crate) fn take(&mut self) -> CharCell {
        let empty = Self {
            stride: self.stride,
            capacity: 0,
            card: 0,
            data: Vec::new(),
        };
        std::mem::replace(self, empty)
    }

    /// Replace the rows in use; `rows` must fit in the current capacity
    pub(crate) fn rewrite(&mut self, rows: &[Vec<u8>]) {
        debug_assert!(rows.len() <= self.capacity);
        self.data.fill(BLANK);
        self.card = 0;
        for row in rows {
            let start = self.card * self.stride;
            self.data[start..start + row.len()].copy_from_slice(row);
            self.card += 1;
        }
    }
}
