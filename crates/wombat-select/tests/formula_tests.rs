//! Tests for the an+b position arithmetic in isolation: which 1-based
//! positions each formula selects, independent of any tree.

use wombat_select::NthFormula;

/// Positions in 1..=limit selected by the formula.
fn selected(formula: NthFormula, limit: usize) -> Vec<usize> {
    (1..=limit)
        .filter(|&position| formula.matches_position(position))
        .collect()
}

#[test]
fn test_odd_and_even() {
    assert_eq!(selected(NthFormula::ODD, 6), vec![1, 3, 5]);
    assert_eq!(selected(NthFormula::EVEN, 6), vec![2, 4, 6]);
}

#[test]
fn test_zero_step_selects_one_fixed_position() {
    assert_eq!(selected(NthFormula::new(0, 3), 6), vec![3]);
    // A fixed position outside the list selects nothing.
    assert_eq!(selected(NthFormula::new(0, 9), 6), vec![]);
    assert_eq!(selected(NthFormula::new(0, -1), 6), vec![]);
}

#[test]
fn test_positive_step() {
    assert_eq!(selected(NthFormula::new(3, 1), 10), vec![1, 4, 7, 10]);
    assert_eq!(selected(NthFormula::new(2, 0), 7), vec![2, 4, 6]);
    // b may push the first selected position past 1.
    assert_eq!(selected(NthFormula::new(3, 5), 10), vec![5, 8]);
}

#[test]
fn test_negative_offset() {
    // 2n-1 is another spelling of odd.
    assert_eq!(selected(NthFormula::new(2, -1), 6), vec![1, 3, 5]);
    assert_eq!(selected(NthFormula::new(3, -2), 10), vec![1, 4, 7, 10]);
}

#[test]
fn test_negative_step_rejects_negative_repetition() {
    // -n+2: positions 1 and 2 need n = 1 and n = 0; position 3 would
    // need n = -1 and must not match.
    assert_eq!(selected(NthFormula::new(-1, 2), 6), vec![1, 2]);
    assert_eq!(selected(NthFormula::new(-2, 5), 6), vec![1, 3, 5]);
    assert_eq!(selected(NthFormula::new(-1, 0), 6), vec![]);
}

#[test]
fn test_step_one_selects_everything() {
    assert_eq!(selected(NthFormula::new(1, 0), 4), vec![1, 2, 3, 4]);
    // 1n+3 starts at 3.
    assert_eq!(selected(NthFormula::new(1, 3), 6), vec![3, 4, 5, 6]);
}
