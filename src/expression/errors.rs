use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Subtraction {0} - {1} does not give a positive result")]
    NonPositiveDifference(u32, u32),
    #[error("Division {0} / {1} is not exact")]
    InexactDivision(u32, u32),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result does not fit in 32 bits")]
    Overflow,
}
