use core::fmt;

use crate::parser::BinaryOp;
use crate::values::ValueError;

/// Runtime kind of a [`Value`], used to find its type in the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Str,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Str => "String",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Kal runtime value.
///
/// Values are immutable: every operation returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A value of type `Int`.
    ///
    /// Held as a real number because `/` is real-number division. Literals
    /// and `+ - *` over integral operands stay integral (exactly, up to 2^53).
    Number(f64),
    Str(String),
}

impl Value {
    /// Largest integer magnitude an `Int` holds exactly (2^53).
    pub const MAX_EXACT_INT: i64 = 1 << 53;

    /// Longest string, in bytes, that repetition may produce.
    pub const MAX_STRING_LEN: usize = 1 << 28;

    pub fn int(value: i64) -> Self {
        Value::Number(value as f64)
    }

    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Int,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// The value as an `i64`, if it is a whole number in range.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Some(*n as i64),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Applies `op` with `self` as the left operand.
    pub fn apply(&self, op: BinaryOp, right: &Value) -> Result<Value, ValueError> {
        match op {
            BinaryOp::Add => self.plus(right),
            BinaryOp::Sub => self.minus(right),
            BinaryOp::Mul => self.times(right),
            BinaryOp::Div => self.divide(right),
        }
    }

    /// `Int + Int` adds, `Int + String` and `String + _` concatenate.
    pub fn plus(&self, right: &Value) -> Result<Value, ValueError> {
        match (self, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Number(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", Number(*a), b))),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (Value::Str(a), Value::Number(b)) => Ok(Value::Str(format!("{}{}", a, Number(*b)))),
        }
    }

    /// `String - String` removes the first occurrence of the right operand.
    pub fn minus(&self, right: &Value) -> Result<Value, ValueError> {
        match (self, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a.replacen(b.as_str(), "", 1))),
            _ => Err(self.mismatch(BinaryOp::Sub, right)),
        }
    }

    /// `String * Int` repeats the string. The count must be a whole number
    /// that is not negative, and the result at most
    /// [`MAX_STRING_LEN`](Self::MAX_STRING_LEN) bytes long.
    pub fn times(&self, right: &Value) -> Result<Value, ValueError> {
        match (self, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            (Value::Str(s), Value::Number(count)) => {
                let invalid = || ValueError::InvalidRepetition {
                    count: Number(*count).to_string(),
                };
                if !count.is_finite() || count.fract() != 0.0 || *count < 0.0 {
                    return Err(invalid());
                }
                if s.is_empty() {
                    return Ok(Value::string(""));
                }
                let times = *count as usize;
                let len = s
                    .len()
                    .checked_mul(times)
                    .filter(|&len| len <= Self::MAX_STRING_LEN)
                    .ok_or_else(invalid)?;
                let mut repeated = String::new();
                repeated.try_reserve_exact(len).map_err(|_| invalid())?;
                repeated.extend(core::iter::repeat_n(s.as_str(), times));
                Ok(Value::Str(repeated))
            }
            _ => Err(self.mismatch(BinaryOp::Mul, right)),
        }
    }

    /// Real-number division for `Int`. Dividing a string returns it unchanged.
    pub fn divide(&self, right: &Value) -> Result<Value, ValueError> {
        match (self, right) {
            (Value::Number(_), Value::Number(b)) if *b == 0.0 => Err(ValueError::DivisionByZero),
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            (Value::Str(_), _) => Ok(self.clone()),
            _ => Err(self.mismatch(BinaryOp::Div, right)),
        }
    }

    fn mismatch(&self, op: BinaryOp, right: &Value) -> ValueError {
        ValueError::TypeMismatch {
            op,
            left: self.kind(),
            right: right.kind(),
        }
    }
}

/// Prints Kal literals: integers without a fractional part, strings quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", Number(*n)),
            Value::Str(s) => write!(f, "\"{}\"", escape_string(s)),
        }
    }
}

struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            write!(f, "nan")
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                write!(f, "inf")
            } else {
                write!(f, "-inf")
            }
        } else if value == 0.0 {
            // Avoid printing `-0`.
            write!(f, "0")
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Escape special characters in strings for Kal literals
fn escape_string(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c if c.is_control() => format!("\\u{{{:04x}}}", c as u32).chars().collect(),
            c => vec![c],
        })
        .collect()
}
