use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
pub(crate) fn checked_difference(left: u32, right: u32) -> Result<u32, ExpressionError> {
    match left.checked_sub(right) {
        Some(value) if value > 0 => Ok(value),
        _ => Err(ExpressionError::NonPositiveDifference(left, right)),
    }
}

#[inline]
pub(crate) fn checked_quotient(left: u32, right: u32) -> Result<u32, ExpressionError> {
    if right == 0 {
        return Err(ExpressionError::DivisionByZero);
    }
    if left % right != 0 {
        return Err(ExpressionError::InexactDivision(left, right));
    }
    Ok(left / right)
}

impl Expression {
    /// Recompute the value of the expression, checking every intermediate step.
    ///
    /// # Errors
    ///
    /// Returns an error when a step would leave the positive integers:
    /// - A subtraction whose result is zero or negative
    /// - A division that is not exact, or by zero
    /// - An addition or multiplication overflowing `u32`
    pub fn evaluate(&self) -> Result<u32, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_add(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                checked_difference(left, right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_mul(right).ok_or(ExpressionError::Overflow)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                checked_quotient(left, right)
            }
        };

        if let Err(e) = &result {
            debug!("Expression {} failed to evaluate: {}", self, e);
        }

        result
    }

    /// Tile values consumed by the expression, left to right.
    pub fn leaves(&self) -> Vec<u32> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{checked_difference, checked_quotient};
    use crate::expression::errors::ExpressionError;

    #[test]
    fn test_checked_difference() {
        assert_eq!(checked_difference(7, 3), Ok(4));
        assert_eq!(
            checked_difference(3, 3),
            Err(ExpressionError::NonPositiveDifference(3, 3))
        );
        assert_eq!(
            checked_difference(3, 7),
            Err(ExpressionError::NonPositiveDifference(3, 7))
        );
    }

    #[test]
    fn test_checked_quotient() {
        assert_eq!(checked_quotient(75, 25), Ok(3));
        assert_eq!(
            checked_quotient(75, 50),
            Err(ExpressionError::InexactDivision(75, 50))
        );
        assert_eq!(checked_quotient(1, 0), Err(ExpressionError::DivisionByZero));
    }
}
