//! Public API for the Kal interpreter.
//!
//! An [`Interpreter`] is one session: variables and their types persist
//! from one [`Interpreter::evaluate`] call to the next.
//!
//! # Example
//!
//! ```
//! use kal_core::{Interpreter, Value};
//!
//! let mut kal = Interpreter::new();
//! kal.evaluate("a = 3").unwrap();
//! assert_eq!(kal.evaluate("a + 4").unwrap(), Some(Value::int(7)));
//! ```

pub mod error;
pub mod interpreter;
pub mod options;


pub use error::{Diagnostic, Error, ErrorKind, Severity};
pub use interpreter::Interpreter;
pub use options::InterpreterOptions;
