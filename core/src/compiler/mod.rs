//! Linearizes a checked program into VM commands.
//!
//! ## Design
//!
//! - One pass over the AST, emitting into a flat `Vec<Command>`
//! - Binary expressions emit the right operand first so the left one ends
//!   up on top of the stack
//! - Tracks stack depth while emitting, for debugging

mod compiler;
mod error;


pub use compiler::Compiler;
pub use error::CompileError;
