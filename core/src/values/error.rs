use crate::parser::BinaryOp;
use crate::values::ValueKind;

/// Failures of the value-level operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The right-hand operand's kind is not accepted by the operation.
    #[error("Cannot apply '{op}' to {left} and {right}")]
    TypeMismatch {
        op: BinaryOp,
        left: ValueKind,
        right: ValueKind,
    },

    #[error("Division by zero")]
    DivisionByZero,

    /// String repetition with a count that is negative, not a whole number,
    /// or large enough to exceed the string length limit.
    #[error("Cannot repeat a string {count} times")]
    InvalidRepetition { count: String },
}
