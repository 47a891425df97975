//! Named types and the binary operators each of them supports.
//!
//! Operator resolution is governed by the LEFT operand: `Int + String` is
//! looked up in `Int`'s table and `String + Int` in `String`'s, so the two
//! orders need not agree.

use hashbrown::HashMap;

use crate::parser::BinaryOp;
use crate::types::StaticType;
use crate::values::Value;

/// One entry of a type's operator table: `self <op> operand -> result`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BinaryOpSignature {
    pub operand: StaticType,
    pub result: StaticType,
}

/// A concrete named type and its operator table.
#[derive(Debug, Clone)]
pub struct TypeDef {
    name: &'static str,
    ty: StaticType,
    binary_ops: HashMap<BinaryOp, Vec<BinaryOpSignature>>,
}

impl TypeDef {
    pub fn new(name: &'static str, ty: StaticType) -> Self {
        Self {
            name,
            ty,
            binary_ops: HashMap::new(),
        }
    }

    /// Adds `self <op> operand -> result` to the operator table.
    pub fn with_binary_op(mut self, op: BinaryOp, operand: StaticType, result: StaticType) -> Self {
        self.binary_ops
            .entry(op)
            .or_default()
            .push(BinaryOpSignature { operand, result });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> StaticType {
        self.ty
    }

    /// Result type of `self <op> rhs`, or `None` if the table has no entry.
    pub fn supports_binary_op(&self, op: BinaryOp, rhs: StaticType) -> Option<StaticType> {
        self.binary_ops
            .get(&op)?
            .iter()
            .find(|sig| sig.operand == rhs)
            .map(|sig| sig.result)
    }

    /// Whether `value` is an inhabitant of this type.
    pub fn check(&self, value: &Value) -> bool {
        self.ty.is_any() || StaticType::of_kind(value.kind()) == self.ty
    }
}

/// The fixed set of named types known to an interpreter.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<&'static str, TypeDef>,
}

impl TypeRegistry {
    /// Creates the registry with the built-in `Int` and `String` types.
    pub fn new() -> Self {
        use BinaryOp::*;
        use StaticType::{Int, Str};

        let int = TypeDef::new("Int", Int)
            .with_binary_op(Add, Int, Int)
            .with_binary_op(Sub, Int, Int)
            .with_binary_op(Mul, Int, Int)
            .with_binary_op(Div, Int, Int)
            .with_binary_op(Mul, Str, Str)
            .with_binary_op(Add, Str, Str);

        let string = TypeDef::new("String", Str)
            .with_binary_op(Add, Int, Str)
            .with_binary_op(Mul, Int, Str)
            .with_binary_op(Add, Str, Str)
            .with_binary_op(Sub, Str, Str);

        let mut types = HashMap::new();
        for def in [int, string] {
            types.insert(def.name(), def);
        }
        Self { types }
    }

    /// Finds a type by its source-level name.
    pub fn lookup(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Finds the definition behind a static type. `Any` has none.
    pub fn get(&self, ty: StaticType) -> Option<&TypeDef> {
        if ty.is_any() {
            return None;
        }
        self.lookup(ty.name())
    }

    /// Resolves a runtime value's type by its kind.
    pub fn type_of_value(&self, value: &Value) -> Option<&TypeDef> {
        self.get(StaticType::of_kind(value.kind()))
    }

    /// Looks `op` up in the left operand's table.
    pub fn binary_op_result(
        &self,
        left: StaticType,
        op: BinaryOp,
        right: StaticType,
    ) -> Option<StaticType> {
        self.get(left)?.supports_binary_op(op, right)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
