// Syntax structures shared by the parser, the AST and the diagnostics.

use core::{cell::RefCell, fmt, ops::Range};

use hashbrown::HashMap;

/// Source text plus the span of every node parsed out of it.
///
/// Spans are kept in a side table keyed by node address so that AST nodes
/// stay plain data and compare structurally.
#[derive(Debug)]
pub struct AnnotatedSource<'a, T> {
    pub source: &'a str,
    spans: RefCell<HashMap<*const T, Span>>,
}

impl<'a, T> AnnotatedSource<'a, T> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            spans: RefCell::new(HashMap::new()),
        }
    }
    pub fn add_span(&self, node: &T, span: Span) {
        let p = node as *const _;
        self.spans.borrow_mut().insert(p, span);
    }
    pub fn span_of(&self, node: &T) -> Option<Span> {
        let p = node as *const _;
        self.spans.borrow().get(&p).cloned()
    }
    pub fn snippet(&self, span: Span) -> &str {
        &self.source[span.0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
