//! Blank-Trimmed Comparator
//!
//! Fortran-style string ordering: trailing blanks on either operand are not
//! significant, everything else compares byte by byte.
//!
//! ```text
//!   "Ceres   "  vs "Ceres"   → Equal
//!   "Ceres"     vs "ceres"   → Less     ('C' = 0x43 < 'c' = 0x63)
//!   "Mar"       vs "Mars"    → Less     (strict prefix)
//!   "ab\t"      vs "ab"      → Greater  (only 0x20 is trimmed)
//! ```
//!
//! The same ordering drives set validation and the binary search; mixing it
//! with any other comparator breaks lookups.

use std::cmp::Ordering;

/// The only byte treated as padding
pub const BLANK: u8 = b' ';

/// Strip trailing blanks (0x20 only)
pub fn trim_blanks(s: &[u8]) -> &[u8] {
    let end = s.iter().rposition(|&b| b != BLANK).map_or(0, |i| i + 1);
    &s[..end]
}

/// Three-way comparison ignoring trailing blanks on both operands
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    trim_blanks(a).cmp(trim_blanks(b))
}

/// Equality under [`compare`]
pub fn blank_eq(a: &[u8], b: &[u8]) -> bool {
    trim_blanks(a) == trim_blanks(b)
}
