//! Core of the Kal interpreter: parser, analyzer, compiler and the VM.
//!
//! The pipeline for one input is
//! `source → parser::parse → analyzer::analyze → compiler::Compiler → vm::VM`,
//! driven by [`api::Interpreter`], which owns the state that persists between
//! evaluations.

pub mod analyzer;
pub mod api;
pub mod ast;
pub mod compiler;
pub mod parser;
pub mod types;
pub mod values;
pub mod vm;

pub use api::{Error, ErrorKind, Interpreter, InterpreterOptions};
pub use values::Value;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_write_records_type() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
