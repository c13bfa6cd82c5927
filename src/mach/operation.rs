use crate::error;
use crate::lang::{token::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
        match op {
            Operator::Plus => Operation::sum(lhs, rhs),
            Operator::Minus => Operation::subtract(lhs, rhs),
            Operator::Multiply => Operation::multiply(lhs, rhs),
            Operator::Divide => Operation::divide(lhs, rhs),
            Operator::Equal => Operation::compare(lhs == rhs),
            Operator::Less => Operation::compare(lhs < rhs),
            Operator::Greater => Operation::compare(lhs > rhs),
        }
    }

    /// True is -1 and false is 0.
    pub fn compare(result: bool) -> Result<f64> {
        Ok(if result { -1.0 } else { 0.0 })
    }

    pub fn negate(val: f64) -> Result<f64> {
        Ok(-val)
    }

    pub fn sum(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs + rhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs - rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs * rhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs / rhs)
    }

    pub fn floor(val: f64) -> Result<f64> {
        Ok(val.floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary() {
        assert_eq!(Operation::binary(Operator::Plus, 1.0, 2.0), Ok(3.0));
        assert_eq!(Operation::binary(Operator::Minus, 1.0, 2.0), Ok(-1.0));
        assert_eq!(Operation::binary(Operator::Multiply, 3.0, 2.0), Ok(6.0));
        assert_eq!(Operation::binary(Operator::Divide, 3.0, 2.0), Ok(1.5));
        assert_eq!(Operation::binary(Operator::Equal, 3.0, 2.0), Ok(0.0));
        assert_eq!(Operation::binary(Operator::Greater, 3.0, 2.0), Ok(-1.0));
        assert_eq!(Operation::binary(Operator::Less, 3.0, 2.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(6.0, 0.0).unwrap_err();
        assert_eq!(e.to_string(), "DIVISION BY ZERO");
    }
}
