//! VM commands.
//!
//! Stack effect notation: `[..., operand1, operand2] -> [..., result]`.
//! For binary commands the LEFT operand is on top of the stack; the
//! compiler emits the right operand first.

use core::fmt;

use crate::parser::BinaryOp;
use crate::values::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Push a constant.
    ///
    /// Stack: `[...] -> [..., value]`
    Push(Value),

    /// Push the current value of a variable.
    ///
    /// Stack: `[...] -> [..., value]`
    Read(String),

    /// Store the top of the stack without popping it, checking it against
    /// the declared type name first when there is one.
    ///
    /// Stack: `[..., value] -> [..., value]`
    Write {
        key: String,
        declared: Option<String>,
    },

    /// Stack: `[..., right, left] -> [..., left + right]`
    Add,
    /// Stack: `[..., right, left] -> [..., left - right]`
    Subtract,
    /// Stack: `[..., right, left] -> [..., left * right]`
    Multiply,
    /// Stack: `[..., right, left] -> [..., left / right]`
    Divide,
}

impl Command {
    pub fn binary(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Command::Add,
            BinaryOp::Sub => Command::Subtract,
            BinaryOp::Mul => Command::Multiply,
            BinaryOp::Div => Command::Divide,
        }
    }

    /// The operator behind a binary command.
    pub fn as_binary_op(&self) -> Option<BinaryOp> {
        match self {
            Command::Add => Some(BinaryOp::Add),
            Command::Subtract => Some(BinaryOp::Sub),
            Command::Multiply => Some(BinaryOp::Mul),
            Command::Divide => Some(BinaryOp::Div),
            Command::Push(_) | Command::Read(_) | Command::Write { .. } => None,
        }
    }

    /// Net change in stack depth after running this command.
    pub fn stack_effect(&self) -> isize {
        match self {
            Command::Push(_) | Command::Read(_) => 1,
            Command::Write { .. } => 0,
            Command::Add | Command::Subtract | Command::Multiply | Command::Divide => -1,
        }
    }

    /// One-line description used when tracing execution.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Push(value) => write!(f, "PUSH {}", value),
            Command::Read(key) => write!(f, "READ FROM {} ONTO _TOP_", key),
            Command::Write {
                key,
                declared: None,
            } => write!(f, "WRITE _TOP_ TO {}", key),
            Command::Write {
                key,
                declared: Some(ty),
            } => write!(f, "WRITE _TOP_ TO {}: {}", key, ty),
            Command::Add => write!(f, "ADD"),
            Command::Subtract => write!(f, "SUBTRACT"),
            Command::Multiply => write!(f, "MULTIPLY"),
            Command::Divide => write!(f, "DIVIDE"),
        }
    }
}
