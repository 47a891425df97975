use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::analyzer::error::{TypeError, TypeErrorKind};
use crate::ast::{Expr, ParsedProgram};
use crate::types::{StaticType, TypeContext};

/// Type-checks `parsed` against the shared type context.
///
/// Statements are checked in order and the first violation aborts. Types
/// inferred along the way only reach `ctx` once the whole program checks,
/// so a failed input leaves the context untouched.
///
/// Returns the type of the final statement, or `Any` for an empty program.
pub fn analyze<'a>(
    ctx: &mut TypeContext,
    parsed: &ParsedProgram<'a>,
) -> Result<StaticType, TypeError> {
    let mut analyzer = Analyzer {
        ctx,
        parsed,
        pending: HashMap::new(),
    };

    let mut result = StaticType::Any;
    for &stmt in parsed.statements() {
        result = analyzer.analyze(stmt)?;
    }

    let Analyzer { ctx, pending, .. } = analyzer;
    for (name, ty) in pending {
        ctx.record(name, ty);
    }

    debug!(%result, "analyzed program");
    Ok(result)
}

struct Analyzer<'c, 'p, 'a> {
    ctx: &'c mut TypeContext,
    parsed: &'p ParsedProgram<'a>,
    /// Assignments made by this input, not yet committed to `ctx`.
    pending: HashMap<&'a str, StaticType>,
}

impl<'c, 'p, 'a> Analyzer<'c, 'p, 'a> {
    fn error(&self, kind: TypeErrorKind, expr: &Expr<'a>) -> TypeError {
        TypeError::new(kind, self.parsed.span_of(expr))
    }

    fn lookup(&self, name: &str) -> Option<StaticType> {
        self.pending
            .get(name)
            .copied()
            .or_else(|| self.ctx.inferred_type(name))
    }

    fn resolve_type(&self, name: &str, expr: &Expr<'a>) -> Result<StaticType, TypeError> {
        self.ctx
            .registry()
            .lookup(name)
            .map(|def| def.ty())
            .ok_or_else(|| {
                self.error(
                    TypeErrorKind::UnknownType {
                        name: name.to_string(),
                    },
                    expr,
                )
            })
    }

    fn analyze(&mut self, expr: &'a Expr<'a>) -> Result<StaticType, TypeError> {
        let ty = match expr {
            Expr::Number(_) => StaticType::Int,
            Expr::Str(_) => StaticType::Str,

            Expr::Ident(name) => self.lookup(name).ok_or_else(|| {
                self.error(
                    TypeErrorKind::UndefinedVariable {
                        name: name.to_string(),
                    },
                    expr,
                )
            })?,

            Expr::Binary { op, left, right } => {
                let left = self.analyze(left)?;
                let right = self.analyze(right)?;
                self.ctx
                    .registry()
                    .binary_op_result(left, *op, right)
                    .ok_or_else(|| {
                        self.error(
                            TypeErrorKind::BinaryOperator {
                                op: *op,
                                left,
                                right,
                            },
                            expr,
                        )
                    })?
            }

            Expr::Paren(inner) => self.analyze(inner)?,

            Expr::SimpleType(name) => self.resolve_type(name, expr)?,

            Expr::Judgment { declared, .. } => self.analyze(declared)?,

            Expr::Assignment { target, value } => {
                let actual = self.analyze(value)?;
                let (name, declared) = target.assignment_target().ok_or_else(|| {
                    self.error(
                        TypeErrorKind::InvalidAssignmentTarget {
                            node: target.kind_name(),
                        },
                        target,
                    )
                })?;

                if let Some(declared) = declared {
                    let declared = self.resolve_type(declared, target)?;
                    if declared != actual {
                        return Err(self.error(
                            TypeErrorKind::JudgmentMismatch {
                                name: name.to_string(),
                                declared,
                                actual,
                            },
                            expr,
                        ));
                    }
                }

                self.pending.insert(name, actual);
                actual
            }

            Expr::Program(stmts) => {
                let mut ty = StaticType::Any;
                for &stmt in stmts.iter() {
                    ty = self.analyze(stmt)?;
                }
                ty
            }
        };

        trace!(node = expr.kind_name(), %ty, "typed");
        Ok(ty)
    }
}
