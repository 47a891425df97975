use crate::api::{Diagnostic, Severity};
use crate::parser::{BinaryOp, Span};
use crate::types::StaticType;

/// Type error found before any command runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Option<Span>,
}

/// Specific kinds of type errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeErrorKind {
    /// Identifier read before any assignment
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },
    /// Judged assignment whose value has another type
    #[error("Type judgment failed for '{name}': declared {declared}, found {actual}")]
    JudgmentMismatch {
        name: String,
        declared: StaticType,
        actual: StaticType,
    },
    /// Operator not in the left operand's table
    #[error("Operator '{op}' is not defined for {left} and {right}")]
    BinaryOperator {
        op: BinaryOp,
        left: StaticType,
        right: StaticType,
    },
    /// Type name not in the registry
    #[error("Unknown type '{name}'")]
    UnknownType { name: String },
    /// Assignment to something other than a name or a judged name
    #[error("Cannot assign to {node}")]
    InvalidAssignmentTarget { node: &'static str },
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            TypeErrorKind::UndefinedVariable { .. } => (
                "E002",
                vec!["Make sure the variable is assigned before use".to_string()],
            ),
            TypeErrorKind::JudgmentMismatch { declared, .. } => (
                "E001",
                vec![format!("The assigned value must have type {}", declared)],
            ),
            TypeErrorKind::BinaryOperator { left, .. } => (
                "E003",
                vec![format!("Operators are looked up on the left operand's type ({})", left)],
            ),
            TypeErrorKind::UnknownType { .. } => {
                ("E004", vec!["Known types are Int and String".to_string()])
            }
            TypeErrorKind::InvalidAssignmentTarget { .. } => ("E005", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}
