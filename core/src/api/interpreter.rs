//! The interpreter session.

use bumpalo::Bump;
use tracing::debug;

use crate::api::{Error, InterpreterOptions};
use crate::ast::ParsedProgram;
use crate::compiler::Compiler;
use crate::types::StaticType;
use crate::values::Value;
use crate::vm::{Command, VM};
use crate::{analyzer, parser};

/// One interpreter session.
///
/// Owns the VM, and through it the variable store and the type context,
/// so independent sessions never see each other's variables.
///
/// # Example
///
/// ```
/// use kal_core::{ErrorKind, Interpreter, Value};
///
/// let mut kal = Interpreter::new();
/// assert_eq!(kal.evaluate("b: Int = 2 * 3").unwrap(), Some(Value::int(6)));
///
/// let err = kal.evaluate("c: String = b").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeJudgmentMismatch);
/// ```
#[derive(Debug)]
pub struct Interpreter {
    vm: VM,
    options: InterpreterOptions,
}

impl Interpreter {
    /// Create a session with default options.
    pub fn new() -> Self {
        Self::with_options(InterpreterOptions::default())
    }

    pub fn with_options(options: InterpreterOptions) -> Self {
        Self {
            vm: VM::new(&options),
            options,
        }
    }

    pub fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    /// Parses, checks, compiles and runs `source`.
    ///
    /// Returns the value of the last statement, or `None` if `source` holds
    /// no statements. A failure before execution changes nothing; a failure
    /// during execution keeps the writes that ran before it.
    pub fn evaluate(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let arena = Bump::new();
        let parsed = parser::parse(&arena, source)?;
        let statements = self.check_and_compile(&parsed)?;
        Ok(self.vm.execute_statements(&statements)?)
    }

    /// Parses, checks and compiles `source` without running it.
    ///
    /// Types inferred for assignments are recorded as if the program had
    /// run.
    pub fn compile(&mut self, source: &str) -> Result<Vec<Command>, Error> {
        let arena = Bump::new();
        let parsed = parser::parse(&arena, source)?;
        let statements = self.check_and_compile(&parsed)?;
        Ok(statements.into_iter().flatten().collect())
    }

    /// Parses `source` and renders the AST with its derived `Debug` form.
    pub fn parse_tree(&self, source: &str) -> Result<String, Error> {
        let arena = Bump::new();
        let parsed = parser::parse(&arena, source)?;
        Ok(format!("{:#?}", parsed.program))
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.vm.variable(name)
    }

    /// The type recorded for `name` by the analyzer or a judged write.
    pub fn variable_type(&self, name: &str) -> Option<StaticType> {
        self.vm.types().inferred_type(name)
    }

    /// All variables, sorted by name.
    pub fn variables(&self) -> Vec<(&str, &Value)> {
        let mut vars: Vec<_> = self.vm.variables().collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }

    fn check_and_compile(
        &mut self,
        parsed: &ParsedProgram<'_>,
    ) -> Result<Vec<Vec<Command>>, Error> {
        let before = self.vm.types().clone();
        let ty = analyzer::analyze(self.vm.types_mut(), parsed)?;
        let statements = match Compiler::compile_statements(self.vm.types().registry(), parsed) {
            Ok(statements) => statements,
            Err(err) => {
                *self.vm.types_mut() = before;
                return Err(err.into());
            }
        };
        debug!(%ty, statements = statements.len(), "ready to execute");
        Ok(statements)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
