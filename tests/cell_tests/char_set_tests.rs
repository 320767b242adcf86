//! Tests for CharSet
//!
//! These tests verify:
//! - Validating construction (sort + dedupe)
//! - Checked construction from already sorted cells
//! - Element access without padding
//! - Membership queries through the set

use cellset::search::Lookup;
use cellset::{CellError, CharCell, CharSet};

// =============================================================================
// Helper Functions
// =============================================================================

fn planets() -> CharSet {
    CharSet::from_items(8, ["Venus", "Earth", "Pluto", "Mars"]).unwrap()
}

fn asteroids() -> CharSet {
    CharSet::from_items(8, ["Apollo", "Ceres"]).unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_sorts_elements() {
    let set = planets();
    let elements: Vec<&[u8]> = set.iter().collect();

    assert_eq!(elements, vec![&b"Earth"[..], b"Mars", b"Pluto", b"Venus"]);
    assert_eq!(set.card(), 4);
    assert_eq!(set.stride(), 8);
}

#[test]
fn test_new_removes_blank_duplicates() {
    let set = CharSet::from_items(6, ["Ceres", "Apollo", "Ceres   ", "Apollo"]).unwrap();
    let elements: Vec<&[u8]> = set.iter().collect();

    assert_eq!(elements, vec![&b"Apollo"[..], b"Ceres"]);
}

#[test]
fn test_new_keeps_case_variants() {
    let set = CharSet::from_items(6, ["ceres", "Ceres"]).unwrap();
    let elements: Vec<&[u8]> = set.iter().collect();

    assert_eq!(elements, vec![&b"Ceres"[..], b"ceres"]);
}

#[test]
fn test_new_keeps_capacity() {
    let cell = CharCell::from_items(4, ["Io", "Io", "Io"]).unwrap();
    let set = CharSet::new(cell);

    assert_eq!(set.card(), 1);
    assert_eq!(set.as_cell().size(), 3);
    assert_eq!(set.as_cell().as_bytes(), b"Io          ");
}

#[test]
fn test_from_sorted_accepts_ascending() {
    let cell = CharCell::from_items(6, ["Apollo", "Ceres"]).unwrap();
    let set = CharSet::from_sorted(cell).unwrap();
    assert_eq!(set.card(), 2);
}

#[test]
fn test_from_sorted_rejects_descending() {
    let cell = CharCell::from_items(6, ["Ceres", "Apollo"]).unwrap();
    let result = CharSet::from_sorted(cell);
    assert!(matches!(result, Err(CellError::NotASet(_))));
}

#[test]
fn test_from_sorted_rejects_padded_duplicate() {
    let cell = CharCell::from_items(6, ["Ceres", "Ceres "]).unwrap();
    let result = CharSet::from_sorted(cell);
    assert!(matches!(result, Err(CellError::NotASet(_))));
}

#[test]
fn test_from_items_element_too_long() {
    let result = CharSet::from_items(4, ["Io", "Callisto"]);
    assert!(matches!(result, Err(CellError::ElementTooLong { .. })));
}

#[test]
fn test_empty_set() {
    let set = CharSet::empty(8).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.card(), 0);
    assert_eq!(set.iter().count(), 0);
}

// =============================================================================
// Access Tests
// =============================================================================

#[test]
fn test_get_returns_trimmed_element() {
    let set = planets();
    assert_eq!(set.get(0), Some(&b"Earth"[..]));
    assert_eq!(set.get(3), Some(&b"Venus"[..]));
    assert_eq!(set.get(4), None);
}

#[test]
fn test_into_cell_round_trip() {
    let set = planets();
    let cell = set.clone().into_cell();
    assert_eq!(CharSet::from_sorted(cell).unwrap(), set);
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_contains_asteroids() {
    let set = asteroids();

    assert!(set.contains(b"Ceres"));
    assert!(!set.contains(b"ceres"));
    assert!(set.contains(b"Ceres   "));
    assert!(!set.contains(b"Vesta"));
}

#[test]
fn test_locate_planets() {
    let set = planets();

    assert_eq!(set.locate(b"Mars"), Lookup::Found(1));
    assert_eq!(set.locate(b"Saturn"), Lookup::NotFound);
    assert_eq!(set.locate(b"Earth"), Lookup::Found(0));
    assert_eq!(set.locate(b"Venus  "), Lookup::Found(3));
}

#[test]
fn test_contains_on_empty_set() {
    let set = CharSet::empty(8).unwrap();
    assert!(!set.contains(b"Earth"));
    assert!(!set.contains(b""));
}

#[test]
fn test_contains_query_longer_than_stride() {
    let set = asteroids();
    assert!(!set.contains(b"Ceres and Vesta"));
    assert!(!set.contains(b"Apollonius"));
}

#[test]
fn test_from_sorted_error_names_first_bad_index() {
    let cell = CharCell::from_items(6, ["Apollo", "Ceres", "Bennu", "Vesta"]).unwrap();
    let err = CharSet::from_sorted(cell).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cell is not a set: element 2 is not strictly greater than its predecessor"
    );
}
