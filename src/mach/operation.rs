use super::val;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Evaluates `lhs op rhs` on operand strings and returns the
    /// display string of the rounded result.
    pub fn apply(op: Operator, lhs: &str, rhs: &str) -> Result<String> {
        let l = match val::parse(lhs) {
            Some(n) => n,
            None => return Err(error!(InternalError; "LEFT OPERAND IS NOT A NUMBER")),
        };
        let r = match val::parse(rhs) {
            Some(n) => n,
            None => return Err(error!(InternalError; "RIGHT OPERAND IS NOT A NUMBER")),
        };
        let n = Operation::evaluate(op, Operation::finite(l)?, Operation::finite(r)?)?;
        Ok(val::format(val::round(n)))
    }

    pub fn evaluate(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn sum(lhs: f64, rhs: f64) -> Result<f64> {
        Operation::finite(lhs + rhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Result<f64> {
        Operation::finite(lhs - rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Result<f64> {
        Operation::finite(lhs * rhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Operation::finite(lhs / rhs)
    }

    pub fn percent(val: f64) -> Result<f64> {
        Operation::finite(Operation::finite(val)? / 100.0)
    }

    fn finite(n: f64) -> Result<f64> {
        if n.is_finite() {
            Ok(n)
        } else {
            Err(error!(Overflow))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_four_functions() {
        assert_eq!(Operation::apply(Operator::Plus, "2", "3"), Ok("5".to_string()));
        assert_eq!(Operation::apply(Operator::Minus, "5", "3"), Ok("2".to_string()));
        assert_eq!(Operation::apply(Operator::Multiply, "4", "5"), Ok("20".to_string()));
        assert_eq!(Operation::apply(Operator::Divide, "10", "4"), Ok("2.5".to_string()));
    }

    #[test]
    fn test_division_by_zero() {
        let err = Operation::apply(Operator::Divide, "5", "0").unwrap_err();
        assert!(err.is(ErrorCode::DivisionByZero));
        let err = Operation::apply(Operator::Divide, "5", "0.").unwrap_err();
        assert!(err.is(ErrorCode::DivisionByZero));
        assert_eq!(Operation::apply(Operator::Divide, "0", "5"), Ok("0".to_string()));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Operation::apply(Operator::Plus, "0.1", "0.2"), Ok("0.3".to_string()));
        assert_eq!(Operation::apply(Operator::Divide, "1", "3"), Ok("0.333333333333".to_string()));
        assert_eq!(Operation::apply(Operator::Minus, "0.3", "0.1"), Ok("0.2".to_string()));
        assert_eq!(Operation::apply(Operator::Multiply, "1.1", "1.1"), Ok("1.21".to_string()));
    }

    #[test]
    fn test_overflow() {
        let err = Operation::apply(Operator::Multiply, "1e+300", "1e+300").unwrap_err();
        assert!(err.is(ErrorCode::Overflow));
    }

    #[test]
    fn test_huge_operand_overflows() {
        let huge = format!("1{}", "0".repeat(400));
        let err = Operation::apply(Operator::Plus, &huge, "1").unwrap_err();
        assert!(err.is(ErrorCode::Overflow));
        let err = Operation::apply(Operator::Divide, "1", &huge).unwrap_err();
        assert!(err.is(ErrorCode::Overflow));
        assert!(Operation::percent(f64::INFINITY).unwrap_err().is(ErrorCode::Overflow));
    }

    #[test]
    fn test_bad_operand() {
        let err = Operation::apply(Operator::Plus, "", "1").unwrap_err();
        assert!(err.is(ErrorCode::InternalError));
        assert_eq!(err.to_string(), "INTERNAL ERROR; LEFT OPERAND IS NOT A NUMBER");
    }
}
