//! Public error types for the Kal API.
//!
//! Each phase has its own error type; they are wrapped here so callers deal
//! with one type and can still tell the phases apart.

use core::fmt;

use crate::analyzer::{TypeError, TypeErrorKind};
use crate::compiler::CompileError;
use crate::parser::{ParseError, Span};
use crate::values::ValueError;
use crate::vm::RuntimeError;

/// Public error type for all Kal operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Type error: {0}")]
    Type(#[from] TypeError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Category of an [`Error`], independent of the phase that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    UndefinedVariable,
    TypeJudgmentMismatch,
    BinaryOperatorType,
    UnsupportedNode,
    UnknownType,
    ValueTypeMismatch,
    DivisionByZero,
    InvalidRepetition,
    StackUnderflow,
    StackOverflow,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_) => ErrorKind::Parse,
            Error::Type(err) => match err.kind {
                TypeErrorKind::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
                TypeErrorKind::JudgmentMismatch { .. } => ErrorKind::TypeJudgmentMismatch,
                TypeErrorKind::BinaryOperator { .. } => ErrorKind::BinaryOperatorType,
                TypeErrorKind::UnknownType { .. } => ErrorKind::UnknownType,
                TypeErrorKind::InvalidAssignmentTarget { .. } => ErrorKind::UnsupportedNode,
            },
            Error::Compile(CompileError::UnsupportedNode { .. }) => ErrorKind::UnsupportedNode,
            Error::Compile(CompileError::UnknownType { .. }) => ErrorKind::UnknownType,
            Error::Runtime(err) => match err {
                RuntimeError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
                RuntimeError::BinaryOperator { .. } => ErrorKind::BinaryOperatorType,
                RuntimeError::JudgmentMismatch { .. } => ErrorKind::TypeJudgmentMismatch,
                RuntimeError::UnknownType { .. } => ErrorKind::UnknownType,
                RuntimeError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
                RuntimeError::StackOverflow { .. } => ErrorKind::StackOverflow,
                RuntimeError::Value(ValueError::TypeMismatch { .. }) => {
                    ErrorKind::ValueTypeMismatch
                }
                RuntimeError::Value(ValueError::DivisionByZero) => ErrorKind::DivisionByZero,
                RuntimeError::Value(ValueError::InvalidRepetition { .. }) => {
                    ErrorKind::InvalidRepetition
                }
            },
        }
    }

    /// Source location of the problem, when the phase that found it knows.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Parse(err) => Some(err.span.clone()),
            Error::Type(err) => err.span.clone(),
            Error::Compile(err) => err.span(),
            Error::Runtime(_) => None,
        }
    }

    /// Convert to a Diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse(err) => err.to_diagnostic(),
            Error::Type(err) => err.to_diagnostic(),
            Error::Compile(err) => err.to_diagnostic(),
            Error::Runtime(err) => err.to_diagnostic(),
        }
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue, if known.
    pub span: Option<Span>,

    /// Hints suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E001").
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - evaluation cannot succeed.
    Error,
    /// Warning - suspicious code that might be wrong.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        for help in &self.help {
            write!(f, "\nhelp: {}", help)?;
        }
        Ok(())
    }
}
