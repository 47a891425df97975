//! Configuration options for an interpreter session.

/// Configuration options for an [`Interpreter`](crate::api::Interpreter).
///
/// # Example
///
/// ```
/// use kal_core::api::InterpreterOptions;
///
/// let options = InterpreterOptions {
///     trace_commands: true,
///     ..InterpreterOptions::default()
/// };
/// assert_eq!(options.max_stack_size, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Log every executed command, with its outcome, at `info` level.
    ///
    /// Default: false
    pub trace_commands: bool,

    /// Maximum number of values on the operand stack.
    ///
    /// Default: 1024
    pub max_stack_size: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            trace_commands: false,
            max_stack_size: 1024,
        }
    }
}
