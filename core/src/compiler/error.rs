//! Compilation errors.

use crate::api::{Diagnostic, Severity};
use crate::parser::Span;

/// Errors that can occur while emitting commands.
///
/// The analyzer rejects well-formed programs that cannot run, so these mark
/// nodes that have no command form at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// A node that cannot appear in expression position
    #[error("Cannot compile {node} in expression position")]
    UnsupportedNode { node: &'static str, span: Option<Span> },
    /// Declared type name missing from the registry
    #[error("Unknown type '{name}'")]
    UnknownType { name: String, span: Option<Span> },
}

impl CompileError {
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::UnsupportedNode { span, .. } => span.clone(),
            CompileError::UnknownType { span, .. } => span.clone(),
        }
    }

    /// Convert to a Diagnostic for API boundary.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            CompileError::UnsupportedNode { .. } => "C001",
            CompileError::UnknownType { .. } => "C002",
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: self.span(),
            help: Vec::new(),
            code: Some(code.to_string()),
        }
    }
}
