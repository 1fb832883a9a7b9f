use super::*;

#[test]
fn start_is_one_one() {
    assert_eq!(Position::start(), Position::new(1, 1));
}

#[test]
fn advance_column_bumps_column_only() {
    let p = Position::new(3, 5).advance_column();
    assert_eq!(p, Position::new(3, 6));
}

#[test]
fn advance_line_resets_column() {
    let p = Position::new(3, 5).advance_line();
    assert_eq!(p, Position::new(4, 1));
}

#[test]
fn ordering_is_lexical() {
    assert!(Position::new(1, 9) < Position::new(2, 1));
    assert!(Position::new(2, 1) < Position::new(2, 2));
}
