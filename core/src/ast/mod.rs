//! The Kal abstract syntax tree.
//!
//! Nodes are allocated in a per-evaluation arena by the parser and are never
//! shared between evaluations.

mod expr;

pub use expr::{Expr, ParsedProgram};
