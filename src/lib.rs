//! Kallipolis - a small expression and assignment language with nominal
//! type judgments, run on a stack machine.
//!
//! # Quick Start
//!
//! ```
//! use kallipolis::{Interpreter, Value};
//!
//! let mut kal = Interpreter::new();
//! kal.evaluate("greeting = 'hello ' + 42").unwrap();
//! assert_eq!(
//!     kal.evaluate("greeting").unwrap(),
//!     Some(Value::string("hello 42"))
//! );
//! ```
//!
//! # Type judgments
//!
//! An assignment target may carry a type: `n: Int = 2 * 3`. The judgment is
//! checked before anything runs and again when the value is written.
//!
//! ```
//! use kallipolis::{ErrorKind, Interpreter};
//!
//! let mut kal = Interpreter::new();
//! let err = kal.evaluate("s: String = 1 + 2").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeJudgmentMismatch);
//! ```

// Re-export public API from kal_core
pub use kal_core::api::{
    Diagnostic, Error, ErrorKind, Interpreter, InterpreterOptions, Severity,
};

// Re-export commonly used types and values
pub use kal_core::types::{self, StaticType};
pub use kal_core::values::{self, Value};
pub use kal_core::vm::Command;

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
