use crate::parser::{AnnotatedSource, BinaryOp, Span};

/// A program together with the source annotations produced while parsing it.
#[derive(Debug)]
pub struct ParsedProgram<'a> {
    pub program: &'a Expr<'a>,
    pub ann: AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> ParsedProgram<'a> {
    pub fn source(&self) -> &'a str {
        self.ann.source
    }

    pub fn span_of(&self, expr: &Expr<'a>) -> Option<Span> {
        self.ann.span_of(expr)
    }

    /// The top-level statements, in source order.
    pub fn statements(&self) -> &'a [&'a Expr<'a>] {
        match self.program {
            Expr::Program(stmts) => stmts,
            // The parser always produces a `Program` root.
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Ident(&'a str),
    Number(i64),
    Str(&'a str),
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Paren(&'a Expr<'a>),
    /// A bare type name, e.g. `Int`.
    SimpleType(&'a str),
    /// `ident: Type`, only valid as an assignment target.
    Judgment {
        ident: &'a Expr<'a>,
        declared: &'a Expr<'a>,
    },
    Assignment {
        target: &'a Expr<'a>,
        value: &'a Expr<'a>,
    },
    Program(&'a [&'a Expr<'a>]),
}

impl<'a> Expr<'a> {
    /// Short node-kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "identifier",
            Expr::Number(_) => "number literal",
            Expr::Str(_) => "string literal",
            Expr::Binary { .. } => "binary expression",
            Expr::Paren(_) => "parenthesized expression",
            Expr::SimpleType(_) => "type expression",
            Expr::Judgment { .. } => "type judgment",
            Expr::Assignment { .. } => "assignment",
            Expr::Program(_) => "program",
        }
    }

    /// Resolves an assignment target to the assigned name and, for judged
    /// targets, the declared type name.
    ///
    /// Returns `None` for anything that is not an identifier or a judgment
    /// about one.
    pub fn assignment_target(&self) -> Option<(&'a str, Option<&'a str>)> {
        match self {
            Expr::Ident(name) => Some((*name, None)),
            Expr::Judgment {
                ident: Expr::Ident(name),
                declared: Expr::SimpleType(ty),
            } => Some((*name, Some(*ty))),
            _ => None,
        }
    }
}
