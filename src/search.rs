//! Blank-Insensitive Binary Search
//!
//! Locates a query within the first `count` rows of a fixed-stride buffer.
//!
//! ## Layout
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────────────┐
//! │ row 0        │ row 1        │ row count-1  │ unused ...  │
//! │ stride bytes │ stride bytes │ stride bytes │             │
//! └──────────────┴──────────────┴──────────────┴─────────────┘
//! ```
//!
//! Rows are blank padded. All comparisons go through [`crate::compare`].
//!
//! ## Bounds
//! `count` is clamped to the number of whole rows in the buffer and the
//! bisection keeps a half-open window `[low, high)`, so a malformed (unsorted)
//! buffer can only produce a wrong answer, never an out-of-range read.

use std::cmp::Ordering;

use crate::compare;

/// Outcome of a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Query matched the element at this index
    Found(usize),

    /// No element compares equal to the query
    NotFound,
}

impl Lookup {
    /// True for `Found(_)`
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Index of the match, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            Lookup::Found(index) => Some(index),
            Lookup::NotFound => None,
        }
    }
}

/// Bisect `[0, count)` with a probe that compares the query against row `i`
///
/// `probe(i)` returns the ordering of the *query* relative to element `i`.
/// The probe is only ever called with `i < count`.
pub fn locate_by<F>(count: usize, mut probe: F) -> Lookup
where
    F: FnMut(usize) -> Ordering,
{
    let mut low = 0usize;
    let mut high = count;

    while low < high {
        let mid = low + (high - low) / 2;
        match probe(mid) {
            Ordering::Equal => return Lookup::Found(mid),
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
        }
    }

    Lookup::NotFound
}

/// Locate `query` among the first `count` rows of a fixed-stride buffer
///
/// Returns `NotFound` for an empty set or a zero stride.
pub fn locate(query: &[u8], count: usize, stride: usize, elements: &[u8]) -> Lookup {
    if stride == 0 {
        return Lookup::NotFound;
    }
    let count = count.min(elements.len() / stride);

    locate_by(count, |i| {
        let row = &elements[i * stride..(i + 1) * stride];
        compare::compare(query, row)
    })
}

/// Locate an item in an ascending slice of numbers
///
/// Incomparable values (NaN) never match.
pub fn locate_ordered<T: PartialOrd>(item: &T, elements: &[T]) -> Lookup {
    locate_by(elements.len(), |i| {
        // NaN compares as Greater so the window always shrinks
        item.partial_cmp(&elements[i]).unwrap_or(Ordering::Greater)
    })
}

/// Linear reference scan with the same comparator as [`locate`]
///
/// Returns the first matching row. O(count); intended for checking and
/// benchmarking the binary search.
pub fn scan(query: &[u8], count: usize, stride: usize, elements: &[u8]) -> Lookup {
    if stride == 0 {
        return Lookup::NotFound;
    }

    elements
        .chunks_exact(stride)
        .take(count)
        .position(|row| compare::blank_eq(query, row))
        .map_or(Lookup::NotFound, Lookup::Found)
}
