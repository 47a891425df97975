use crate::api::{Diagnostic, Severity};
use crate::parser::BinaryOp;
use crate::types::StaticType;
use crate::values::ValueError;
use crate::vm::StackError;

/// Failure while executing commands.
///
/// Runtime errors carry no source location: commands are not mapped back
/// to the nodes they were compiled from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("Operator '{op}' is not defined for {left} and {right}")]
    BinaryOperator {
        op: BinaryOp,
        left: StaticType,
        right: StaticType,
    },

    #[error("Type judgment failed for '{name}': declared {declared}, found {actual}")]
    JudgmentMismatch {
        name: String,
        declared: StaticType,
        actual: StaticType,
    },

    #[error("Unknown type '{name}'")]
    UnknownType { name: String },

    #[error("Stack underflow while running {command}")]
    StackUnderflow { command: String },

    #[error("Stack overflow: the stack holds at most {max_size} values")]
    StackOverflow { max_size: usize },

    #[error(transparent)]
    Value(#[from] ValueError),
}

impl RuntimeError {
    pub(crate) fn from_stack(err: StackError, command: &str) -> Self {
        match err {
            StackError::Overflow { max_size } => RuntimeError::StackOverflow { max_size },
            StackError::Underflow { .. } => RuntimeError::StackUnderflow {
                command: command.to_string(),
            },
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            RuntimeError::UndefinedVariable { .. } => "R001",
            RuntimeError::BinaryOperator { .. } => "R002",
            RuntimeError::JudgmentMismatch { .. } => "R003",
            RuntimeError::UnknownType { .. } => "R004",
            RuntimeError::StackUnderflow { .. } => "R005",
            RuntimeError::StackOverflow { .. } => "R006",
            RuntimeError::Value(ValueError::TypeMismatch { .. }) => "R010",
            RuntimeError::Value(ValueError::DivisionByZero) => "R011",
            RuntimeError::Value(ValueError::InvalidRepetition { .. }) => "R012",
        };
        let help = match self {
            RuntimeError::StackOverflow { .. } => {
                vec!["Raise the limit with InterpreterOptions::max_stack_size".to_string()]
            }
            RuntimeError::Value(ValueError::InvalidRepetition { .. }) => {
                vec!["Strings can only be repeated a whole, non-negative number of times".to_string()]
            }
            _ => vec![],
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: None,
            help,
            code: Some(code.to_string()),
        }
    }
}
