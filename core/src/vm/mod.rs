//! The stack machine that runs compiled commands.
//!
//! A [`VM`] owns everything that outlives a single evaluation: the variable
//! store, the shared [`TypeContext`](crate::types::TypeContext) and the
//! operand stack. Commands run strictly in order; the first failure aborts
//! the rest of the sequence and leaves earlier writes in place.

mod command;
mod error;
mod runtime;
mod stack;

#[cfg(test)]
mod runtime_test;

pub use command::Command;
pub use error::RuntimeError;
pub use runtime::VM;
pub use stack::{Stack, StackError};
