//! Tests for the guarded membership routines
//!
//! These tests verify:
//! - elemc / elemi / elemd answers on validated cells
//! - Null item, type mismatch and not-a-set rejections
//! - Check order when several arguments are bad

use cellset::cell::{Cell, CellType, CharCell};
use cellset::membership::{elemc, elemd, elemi, locate_char};
use cellset::search::Lookup;
use cellset::{CellError, CharSet};

// =============================================================================
// Helper Functions
// =============================================================================

fn planets() -> Cell {
    Cell::from(CharSet::from_items(8, ["Earth", "Mars", "Pluto", "Venus"]).unwrap())
}

fn asteroids() -> Cell {
    let mut cell = Cell::char(CharCell::from_items(8, ["Apollo", "Ceres"]).unwrap());
    cell.mark_set().unwrap();
    cell
}

// =============================================================================
// elemc Tests
// =============================================================================

#[test]
fn test_elemc_true_cases() {
    assert!(elemc(Some(b"Earth".as_slice()), &planets()).unwrap());
    assert!(elemc(Some(b"Pluto".as_slice()), &planets()).unwrap());
    assert!(elemc(Some(b"Ceres".as_slice()), &asteroids()).unwrap());
    assert!(elemc(Some(b"Ceres   ".as_slice()), &asteroids()).unwrap());
}

#[test]
fn test_elemc_false_cases() {
    assert!(!elemc(Some(b"saturn".as_slice()), &planets()).unwrap());
    assert!(!elemc(Some(b"pluto".as_slice()), &asteroids()).unwrap());
    assert!(!elemc(Some(b"ceres".as_slice()), &asteroids()).unwrap());
    assert!(!elemc(Some(b"Vesta".as_slice()), &asteroids()).unwrap());
}

#[test]
fn test_elemc_empty_set() {
    let mut cell = Cell::char(CharCell::new(8, 4).unwrap());
    cell.validate().unwrap();
    assert!(!elemc(Some(b"Earth".as_slice()), &cell).unwrap());
}

#[test]
fn test_locate_char_index() {
    assert_eq!(locate_char(Some(b"Mars".as_slice()), &planets()).unwrap(), Lookup::Found(1));
    assert_eq!(locate_char(Some(b"Saturn".as_slice()), &planets()).unwrap(), Lookup::NotFound);
}

#[test]
fn test_elemc_after_validate() {
    let items = ["Venus", "Mars", "Earth", "Mars"];
    let mut cell = Cell::char(CharCell::from_items(8, items).unwrap());
    cell.validate().unwrap();

    assert_eq!(locate_char(Some(b"Venus".as_slice()), &cell).unwrap(), Lookup::Found(2));
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_elemc_null_item() {
    let result = elemc(None, &planets());
    assert!(matches!(result, Err(CellError::NullPointer(_))));
}

#[test]
fn test_elemc_type_mismatch() {
    let mut cell = Cell::int(vec![1, 2, 3]);
    cell.validate().unwrap();

    let result = elemc(Some(b"Earth".as_slice()), &cell);
    assert!(matches!(
        result,
        Err(CellError::TypeMismatch {
            expected: CellType::Char,
            found: CellType::Int,
        })
    ));
}

#[test]
fn test_elemc_not_a_set() {
    let cell = Cell::char(CharCell::from_items(8, ["Apollo", "Ceres"]).unwrap());
    let result = elemc(Some(b"Ceres".as_slice()), &cell);
    assert!(matches!(result, Err(CellError::NotASet(_))));
}

#[test]
fn test_null_item_checked_before_type() {
    let cell = Cell::double(vec![1.0]);
    assert!(matches!(elemc(None, &cell), Err(CellError::NullPointer(_))));
}

#[test]
fn test_type_checked_before_set_flag() {
    let cell = Cell::double(vec![2.0, 1.0]);
    assert!(matches!(
        elemc(Some(b"x".as_slice()), &cell),
        Err(CellError::TypeMismatch { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = elemc(Some(b"x".as_slice()), &Cell::int(vec![])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch: expected character cell, found integer cell"
    );

    let err = elemc(Some(b"x".as_slice()), &Cell::char(CharCell::new(4, 0).unwrap())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cell is not a set: character cell has not been validated"
    );
}

// =============================================================================
// elemi / elemd Tests
// =============================================================================

#[test]
fn test_elemi() {
    let mut cell = Cell::int(vec![42, -1, 7, 7]);
    cell.validate().unwrap();

    assert!(elemi(7, &cell).unwrap());
    assert!(elemi(-1, &cell).unwrap());
    assert!(!elemi(8, &cell).unwrap());
}

#[test]
fn test_elemi_rejections() {
    assert!(matches!(
        elemi(1, &planets()),
        Err(CellError::TypeMismatch { expected: CellType::Int, .. })
    ));
    assert!(matches!(
        elemi(1, &Cell::int(vec![1])),
        Err(CellError::NotASet(_))
    ));
}

#[test]
fn test_elemd() {
    let mut cell = Cell::double(vec![3.5, -2.0, 0.125]);
    cell.validate().unwrap();

    assert!(elemd(0.125, &cell).unwrap());
    assert!(!elemd(0.126, &cell).unwrap());
    assert!(!elemd(f64::NAN, &cell).unwrap());
}

#[test]
fn test_elemd_rejections() {
    let mut ints = Cell::int(vec![1]);
    ints.validate().unwrap();

    assert!(matches!(
        elemd(1.0, &ints),
        Err(CellError::TypeMismatch { expected: CellType::Double, found: CellType::Int })
    ));
    assert!(matches!(
        elemd(1.0, &Cell::double(vec![1.0])),
        Err(CellError::NotASet(_))
    ));
}
