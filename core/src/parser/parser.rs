use bumpalo::Bump;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::ast::{Expr, ParsedProgram};
use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{AnnotatedSource, BinaryOp, Span};
use crate::values::Value;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left)
        )                                               // `*`, `/`
        ;
}

#[derive(Parser)]
#[grammar = "parser/kal.pest"]
pub struct KalParser;

/// Parses `source` into an AST allocated in `arena`.
///
/// Every node's span is recorded in the returned program's annotations.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedProgram<'a>, ParseError> {
    let mut pairs = KalParser::parse(Rule::main, source).map_err(convert_pest_error)?;
    let main = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            Span::new(0, source.len()),
        )
    })?;

    let ann = AnnotatedSource::new(source);
    let program = AstBuilder { arena, ann: &ann }.program(main)?;

    tracing::debug!(node = ?program, "parsed program");
    Ok(ParsedProgram { program, ann })
}

/// Turns pest pairs into arena-allocated [`Expr`] nodes.
struct AstBuilder<'a, 'p> {
    arena: &'a Bump,
    ann: &'p AnnotatedSource<'a, Expr<'a>>,
}

impl<'a, 'p> AstBuilder<'a, 'p> {
    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }

    fn span_of(&self, expr: &Expr<'a>) -> Span {
        self.ann.span_of(expr).unwrap_or(Span::new(0, 0))
    }

    fn program(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span = pair.as_span().into();
        let stmts = pair
            .into_inner()
            .filter(|p| p.as_rule() != Rule::EOI)
            .map(|p| self.statement(p))
            .collect::<Result<Vec<_>, _>>()?;
        let stmts = self.arena.alloc_slice_copy(&stmts);
        Ok(self.alloc(Expr::Program(stmts), span))
    }

    fn statement(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        match pair.as_rule() {
            Rule::assignment => self.assignment(pair),
            Rule::expression => self.expression(pair),
            _ => Err(unhandled(&pair)),
        }
    }

    fn assignment(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span: Span = pair.as_span().into();
        let mut inner = pair.into_inner();

        let target = next_pair(&mut inner, &span, "missing assignment target")?;
        let target = match target.as_rule() {
            Rule::judgment => self.judgment(target)?,
            Rule::ident => self.ident(target),
            _ => return Err(unhandled(&target)),
        };
        let value = self.expression(next_pair(&mut inner, &span, "missing assigned value")?)?;

        Ok(self.alloc(Expr::Assignment { target, value }, span))
    }

    fn judgment(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span: Span = pair.as_span().into();
        let mut inner = pair.into_inner();

        let ident = self.ident(next_pair(&mut inner, &span, "missing judged identifier")?);
        let type_expr = next_pair(&mut inner, &span, "missing judged type")?;
        let type_span: Span = type_expr.as_span().into();
        let type_name = type_expr.as_str().trim();
        let declared = self.alloc(Expr::SimpleType(type_name), type_span);

        Ok(self.alloc(Expr::Judgment { ident, declared }, span))
    }

    fn ident(&self, pair: Pair<'a, Rule>) -> &'a Expr<'a> {
        self.alloc(Expr::Ident(pair.as_str()), pair.as_span().into())
    }

    fn expression(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        PRATT_PARSER
            .map_primary(|primary| self.primary(primary))
            .map_infix(|lhs, op, rhs| {
                let (left, right) = (lhs?, rhs?);
                let op = match op.as_rule() {
                    Rule::add => BinaryOp::Add,
                    Rule::sub => BinaryOp::Sub,
                    Rule::mul => BinaryOp::Mul,
                    Rule::div => BinaryOp::Div,
                    _ => return Err(unhandled(&op)),
                };
                let span = Span::combine(&self.span_of(left), &self.span_of(right));
                Ok(self.alloc(Expr::Binary { op, left, right }, span))
            })
            .parse(pair.into_inner())
    }

    fn primary(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span: Span = pair.as_span().into();
        match pair.as_rule() {
            Rule::grouped => {
                let inner = next_pair(&mut pair.into_inner(), &span, "missing grouped expression")?;
                let inner = self.expression(inner)?;
                Ok(self.alloc(Expr::Paren(inner), span))
            }

            Rule::integer => {
                let text = pair.as_str();
                // Ints are held as f64; larger literals would round silently.
                let value = text
                    .parse::<i64>()
                    .ok()
                    .filter(|n| *n <= Value::MAX_EXACT_INT)
                    .ok_or_else(|| {
                        ParseError::new(
                            ParseErrorKind::InvalidNumber {
                                text: text.to_string(),
                            },
                            span.clone(),
                        )
                    })?;
                Ok(self.alloc(Expr::Number(value), span))
            }

            Rule::string => {
                let contents = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
                Ok(self.alloc(Expr::Str(contents), span))
            }

            Rule::ident => Ok(self.ident(pair)),

            _ => Err(unhandled(&pair)),
        }
    }
}

fn next_pair<'a>(
    pairs: &mut Pairs<'a, Rule>,
    span: &Span,
    message: &str,
) -> Result<Pair<'a, Rule>, ParseError> {
    pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: message.to_string(),
            },
            span.clone(),
        )
    })
}

fn unhandled(pair: &Pair<'_, Rule>) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("Unhandled rule: {:?}", pair.as_rule()),
        },
        pair.as_span().into(),
    )
}
