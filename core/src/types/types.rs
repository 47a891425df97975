use core::fmt::Display;

use crate::values::ValueKind;

/// The static type of an expression or variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StaticType {
    /// Untyped wildcard. Matches everything and supports no operators.
    Any,
    Int,
    Str,
}

impl StaticType {
    pub fn name(self) -> &'static str {
        match self {
            StaticType::Any => "Any",
            StaticType::Int => "Int",
            StaticType::Str => "String",
        }
    }

    /// The natural static type of values of `kind`.
    pub fn of_kind(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Int => StaticType::Int,
            ValueKind::Str => StaticType::Str,
        }
    }

    pub fn is_any(self) -> bool {
        self == StaticType::Any
    }
}

impl Display for StaticType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
