use tracing::debug;

use crate::ast::{Expr, ParsedProgram};
use crate::compiler::CompileError;
use crate::types::TypeRegistry;
use crate::values::Value;
use crate::vm::Command;

/// Turns a [`ParsedProgram`] into the command sequence the VM runs.
pub struct Compiler<'r, 'p, 'a> {
    registry: &'r TypeRegistry,
    parsed: &'p ParsedProgram<'a>,

    /// Commands emitted so far
    commands: Vec<Command>,

    /// Current stack depth during compilation
    current_stack_depth: isize,

    /// Maximum stack depth observed
    max_stack_depth: isize,
}

impl<'r, 'p, 'a> Compiler<'r, 'p, 'a> {
    /// Compiles every statement of `parsed`, in source order, into one
    /// flat sequence.
    pub fn compile(
        registry: &'r TypeRegistry,
        parsed: &'p ParsedProgram<'a>,
    ) -> Result<Vec<Command>, CompileError> {
        Ok(Self::compile_statements(registry, parsed)?
            .into_iter()
            .flatten()
            .collect())
    }

    /// Compiles each top-level statement of `parsed` to its own sequence.
    ///
    /// Every sequence leaves exactly one value on the stack, and no
    /// sequence reads what an earlier one left behind.
    pub fn compile_statements(
        registry: &'r TypeRegistry,
        parsed: &'p ParsedProgram<'a>,
    ) -> Result<Vec<Vec<Command>>, CompileError> {
        let mut compiler = Self {
            registry,
            parsed,
            commands: Vec::new(),
            current_stack_depth: 0,
            max_stack_depth: 0,
        };

        let mut statements = Vec::with_capacity(parsed.statements().len());
        for &stmt in parsed.statements() {
            compiler.current_stack_depth = 0;
            compiler.compile_expr(stmt)?;
            statements.push(core::mem::take(&mut compiler.commands));
        }

        debug!(
            statements = statements.len(),
            max_stack_depth = compiler.max_stack_depth,
            "compiled program"
        );
        Ok(statements)
    }

    fn emit(&mut self, command: Command) {
        self.current_stack_depth += command.stack_effect();
        self.max_stack_depth = self.max_stack_depth.max(self.current_stack_depth);
        self.commands.push(command);
    }

    fn unsupported(&self, expr: &Expr<'a>) -> CompileError {
        CompileError::UnsupportedNode {
            node: expr.kind_name(),
            span: self.parsed.span_of(expr),
        }
    }

    fn compile_expr(&mut self, expr: &Expr<'a>) -> Result<(), CompileError> {
        match expr {
            Expr::Number(n) => self.emit(Command::Push(Value::int(*n))),
            Expr::Str(s) => self.emit(Command::Push(Value::string(*s))),
            Expr::Ident(name) => self.emit(Command::Read(name.to_string())),
            Expr::Paren(inner) => self.compile_expr(inner)?,

            Expr::Binary { op, left, right } => {
                self.compile_expr(right)?;
                self.compile_expr(left)?;
                self.emit(Command::binary(*op));
            }

            Expr::Assignment { target, value } => {
                let (key, declared) = target
                    .assignment_target()
                    .ok_or_else(|| self.unsupported(target))?;
                if let Some(name) = declared {
                    if self.registry.lookup(name).is_none() {
                        return Err(CompileError::UnknownType {
                            name: name.to_string(),
                            span: self.parsed.span_of(target),
                        });
                    }
                }
                self.compile_expr(value)?;
                self.emit(Command::Write {
                    key: key.to_string(),
                    declared: declared.map(str::to_string),
                });
            }

            Expr::Program(stmts) => {
                for &stmt in stmts.iter() {
                    self.compile_expr(stmt)?;
                }
            }

            Expr::SimpleType(_) | Expr::Judgment { .. } => return Err(self.unsupported(expr)),
        }
        Ok(())
    }
}
