use hashbrown::HashMap;
use tracing::{debug, info, trace};

use crate::api::InterpreterOptions;
use crate::parser::BinaryOp;
use crate::types::{StaticType, TypeContext};
use crate::values::Value;
use crate::vm::{Command, RuntimeError, Stack};

/// Executes command sequences against state that persists between them.
#[derive(Debug)]
pub struct VM {
    stack: Stack<Value>,
    store: HashMap<String, Value>,
    types: TypeContext,
    trace_commands: bool,
}

impl VM {
    pub fn new(options: &InterpreterOptions) -> Self {
        Self {
            stack: Stack::new(options.max_stack_size),
            store: HashMap::new(),
            types: TypeContext::new(),
            trace_commands: options.trace_commands,
        }
    }

    pub fn types(&self) -> &TypeContext {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeContext {
        &mut self.types
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Runs `commands` in order and returns the value left on top of the
    /// stack, or `None` if there were no commands.
    ///
    /// The stack is emptied before the first command and after the last.
    /// On failure the remaining commands are skipped; writes that already
    /// happened stay, and the stack keeps whatever it held at that point.
    pub fn execute(&mut self, commands: &[Command]) -> Result<Option<Value>, RuntimeError> {
        self.run(core::iter::once(commands))
    }

    /// Runs one command sequence per statement and returns the value of the
    /// last one.
    ///
    /// The stack is emptied at every statement boundary, so its bound limits
    /// how deep a single statement nests rather than how many statements a
    /// program holds.
    pub fn execute_statements(
        &mut self,
        statements: &[Vec<Command>],
    ) -> Result<Option<Value>, RuntimeError> {
        self.run(statements.iter().map(Vec::as_slice))
    }

    fn run<'c>(
        &mut self,
        statements: impl IntoIterator<Item = &'c [Command]>,
    ) -> Result<Option<Value>, RuntimeError> {
        let mut index = 0;
        let mut result = None;

        for commands in statements {
            self.stack.clear();
            for command in commands {
                match self.step(command) {
                    Ok(()) => {
                        if self.trace_commands {
                            info!(
                                index,
                                command = %command,
                                top = %self.top_description(),
                                "executed"
                            );
                        } else {
                            trace!(index, command = %command, "executed");
                        }
                    }
                    Err(err) => {
                        if self.trace_commands {
                            info!(index, command = %command, error = %err, "failed");
                        }
                        return Err(err);
                    }
                }
                index += 1;
            }
            result = self.stack.pop().ok();
        }

        self.stack.clear();
        debug!(commands = index, result = ?result, "execution finished");
        Ok(result)
    }

    fn step(&mut self, command: &Command) -> Result<(), RuntimeError> {
        match command {
            Command::Push(value) => self.push(command, value.clone()),

            Command::Read(key) => {
                let value = self
                    .store
                    .get(key)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: key.clone() })?;
                self.push(command, value)
            }

            Command::Write { key, declared } => {
                let value = self
                    .stack
                    .peek()
                    .map_err(|err| RuntimeError::from_stack(err, &command.describe()))?
                    .clone();
                if let Some(declared) = declared {
                    let ty = self.check_judgment(key, declared, &value)?;
                    self.types.record(key.as_str(), ty);
                }
                self.store.insert(key.clone(), value);
                Ok(())
            }

            Command::Add => self.binary(command, BinaryOp::Add),
            Command::Subtract => self.binary(command, BinaryOp::Sub),
            Command::Multiply => self.binary(command, BinaryOp::Mul),
            Command::Divide => self.binary(command, BinaryOp::Div),
        }
    }

    fn push(&mut self, command: &Command, value: Value) -> Result<(), RuntimeError> {
        self.stack
            .push(value)
            .map_err(|err| RuntimeError::from_stack(err, &command.describe()))
    }

    /// Resolves `declared` through the registry and checks `value` against it.
    fn check_judgment(
        &self,
        key: &str,
        declared: &str,
        value: &Value,
    ) -> Result<StaticType, RuntimeError> {
        let registry = self.types.registry();
        let def = registry
            .lookup(declared)
            .ok_or_else(|| RuntimeError::UnknownType {
                name: declared.to_string(),
            })?;
        if !def.check(value) {
            return Err(RuntimeError::JudgmentMismatch {
                name: key.to_string(),
                declared: def.ty(),
                actual: StaticType::of_kind(value.kind()),
            });
        }
        Ok(def.ty())
    }

    /// Pops the left operand (top) then the right, re-checks the operator
    /// table against the runtime types and pushes the result.
    fn binary(&mut self, command: &Command, op: BinaryOp) -> Result<(), RuntimeError> {
        let (left, right) = self
            .stack
            .pop_pair()
            .map_err(|err| RuntimeError::from_stack(err, &command.describe()))?;

        let left_ty = StaticType::of_kind(left.kind());
        let right_ty = StaticType::of_kind(right.kind());
        if self
            .types
            .registry()
            .binary_op_result(left_ty, op, right_ty)
            .is_none()
        {
            return Err(RuntimeError::BinaryOperator {
                op,
                left: left_ty,
                right: right_ty,
            });
        }

        let result = left.apply(op, &right)?;
        self.push(command, result)
    }

    fn top_description(&self) -> String {
        match self.stack.peek() {
            Ok(value) => value.to_string(),
            Err(_) => "<empty>".to_string(),
        }
    }
}
