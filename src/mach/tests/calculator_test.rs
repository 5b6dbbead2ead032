use super::*;
use crate::lang::{Action, ErrorCode, Key, Operator};

const PLUS: Key = Key::Operator(Operator::Plus);
const DIVIDE: Key = Key::Operator(Operator::Divide);
const EQUALS: Key = Key::Action(Action::Equals);
const DELETE: Key = Key::Action(Action::Delete);
const PERCENT: Key = Key::Action(Action::Percent);

#[test]
fn test_initial_state() {
    let c = Calculator::new();
    assert_eq!(c.current(), "0");
    assert_eq!(c.previous(), "");
    assert_eq!(c.operator(), None);
    assert!(c.fault().is_none());
}

#[test]
fn test_leading_zero_replaced() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(0), Key::Digit(0), Key::Digit(7)]);
    assert_eq!(s.result, "7");
}

#[test]
fn test_single_point() {
    let mut c = Calculator::new();
    let s = press_all(
        &mut c,
        &[Key::Point, Key::Digit(5), Key::Point, Key::Digit(2), Key::Point],
    );
    assert_eq!(s.result, "0.52");
    assert_eq!(c.current().matches('.').count(), 1);
}

#[test]
fn test_operator_moves_operand() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(1), Key::Digit(2), PLUS]);
    assert_eq!(c.previous(), "12");
    assert_eq!(c.operator(), Some(Operator::Plus));
    assert_eq!(s.result, "0");
    assert_eq!(s.expression, "12 +");
}

#[test]
fn test_chained_evaluation() {
    let mut c = Calculator::new();
    let s = press_all(
        &mut c,
        &[Key::Digit(5), PLUS, Key::Digit(3), PLUS, Key::Digit(2), EQUALS],
    );
    assert_eq!(s.result, "10");
    assert_eq!(s.expression, "");
}

#[test]
fn test_chained_expression_line() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(5), PLUS, Key::Digit(3), DIVIDE]);
    assert_eq!(s.expression, "8 /");
    assert_eq!(s.result, "0");
}

#[test]
fn test_equals_without_operator() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(4), EQUALS, EQUALS]);
    assert_eq!(s.result, "4");
}

#[test]
fn test_delete() {
    let mut c = Calculator::new();
    assert_eq!(press_all(&mut c, &[Key::Digit(7), DELETE]).result, "0");
    assert_eq!(press_all(&mut c, &[DELETE]).result, "0");
    let s = press_all(&mut c, &[Key::Digit(1), Key::Point, Key::Digit(5), DELETE]);
    assert_eq!(s.result, "1.");
}

#[test]
fn test_delete_negative_result() {
    let mut c = Calculator::new();
    let s = press_all(
        &mut c,
        &[Key::Digit(2), Key::Operator(Operator::Minus), Key::Digit(7), EQUALS],
    );
    assert_eq!(s.result, "-5");
    assert_eq!(press_all(&mut c, &[DELETE]).result, "0");
}

#[test]
fn test_percent() {
    let mut c = Calculator::new();
    assert_eq!(press_all(&mut c, &[PERCENT]).result, "0");
    let s = press_all(&mut c, &[Key::Digit(5), Key::Digit(0), PERCENT]);
    assert_eq!(s.result, "0.5");
}

#[test]
fn test_division_by_zero_shows_error() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(5), DIVIDE, Key::Digit(0), EQUALS]);
    assert_eq!(s.result, ERROR_TEXT);
    assert_eq!(s.expression, "");
    assert!(c.fault().unwrap().is(ErrorCode::DivisionByZero));
}

#[test]
fn test_error_then_operator_is_ignored() {
    let mut c = Calculator::new();
    let s = press_all(
        &mut c,
        &[Key::Digit(5), DIVIDE, Key::Digit(0), EQUALS, PLUS, EQUALS, PERCENT],
    );
    assert_eq!(s.result, ERROR_TEXT);
    assert_eq!(s.expression, "");
}

#[test]
fn test_error_then_digit_starts_fresh() {
    let mut c = Calculator::new();
    press_all(&mut c, &[Key::Digit(5), DIVIDE, Key::Digit(0), EQUALS]);
    let s = press_all(&mut c, &[Key::Digit(7)]);
    assert_eq!(s.result, "7");
    assert!(c.fault().is_none());
    press_all(&mut c, &[Key::Digit(1), DIVIDE, Key::Digit(0), EQUALS]);
    assert_eq!(press_all(&mut c, &[Key::Point]).result, "0.");
}

#[test]
fn test_chained_division_by_zero() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(5), DIVIDE, Key::Digit(0), PLUS]);
    assert_eq!(s.result, ERROR_TEXT);
    assert_eq!(c.operator(), None);
}

#[test]
fn test_enter_rejects_bad_line() {
    let mut c = Calculator::new();
    let errors = c.enter("5 + foo");
    assert_eq!(errors.len(), 1);
    assert_eq!(c.current(), "0");
    assert!(c.enter("5 + 3 =").is_empty());
    assert_eq!(c.current(), "8");
}

#[test]
fn test_huge_operand_is_overflow() {
    let mut c = Calculator::new();
    assert!(c.enter(&format!("1{}", "0".repeat(400))).is_empty());
    assert!(c.enter("+1=").is_empty());
    assert_eq!(c.screen().result, ERROR_TEXT);
    assert!(c.fault().unwrap().is(ErrorCode::Overflow));
}

#[test]
fn test_huge_operand_percent_is_overflow() {
    let mut c = Calculator::new();
    c.enter(&format!("9{}%", "9".repeat(400)));
    assert!(c.fault().unwrap().is(ErrorCode::Overflow));
}

#[test]
fn test_out_of_range_digit_ignored() {
    let mut c = Calculator::new();
    let s = press_all(&mut c, &[Key::Digit(4), Key::Digit(10), Key::Digit(250)]);
    assert_eq!(s.result, "4");
}

#[test]
fn test_enter_with_sees_every_key() {
    let mut c = Calculator::new();
    let mut seen = vec![];
    let errors = c.enter_with("2*3", |key, calc| {
        seen.push((key, calc.screen().result));
    });
    assert!(errors.is_empty());
    assert_eq!(
        seen,
        [
            (Key::Digit(2), "2".to_string()),
            (Key::Operator(Operator::Multiply), "0".to_string()),
            (Key::Digit(3), "3".to_string())
        ]
    );
    let mut count = 0;
    assert_eq!(c.enter_with("2 ?", |_, _| count += 1).len(), 1);
    assert_eq!(count, 0);
}
