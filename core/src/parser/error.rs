use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with the location it refers to.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Input does not match the grammar
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Integer literal above 2^53, which an `Int` cannot hold exactly
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ("P001", vec![]),
            ParseErrorKind::InvalidNumber { .. } => (
                "P003",
                vec!["Integer literals must be at most 2^53 (9007199254740992)".to_string()],
            ),
            ParseErrorKind::Other { .. } => ("P999", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: Some(self.span.clone()),
            help,
            code: Some(code.to_string()),
        }
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: format_found_rules(&negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, span)
}

fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "valid syntax".to_string();
    }

    let mut names: Vec<&str> = rules.iter().map(|r| rule_to_name(*r)).collect();
    names.sort_unstable();
    names.dedup();

    match names.as_slice() {
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
        [] => "valid syntax".to_string(),
    }
}

fn format_found_rules(rules: &[Rule]) -> String {
    match rules.first() {
        Some(rule) => rule_to_name(*rule).to_string(),
        None => "unexpected input".to_string(),
    }
}

fn rule_to_name(rule: Rule) -> &'static str {
    match rule {
        Rule::EOI => "end of input",
        Rule::main | Rule::statement => "statement",
        Rule::assignment => "assignment",
        Rule::assign_target => "assignment target",
        Rule::judgment => "type judgment",
        Rule::type_expr => "type name",
        Rule::expression | Rule::primary => "expression",
        Rule::grouped => "'('",
        Rule::infix_op | Rule::add | Rule::sub | Rule::mul | Rule::div => "operator",
        Rule::integer => "number",
        Rule::string | Rule::dq_contents | Rule::sq_contents => "string",
        Rule::ident => "identifier",
        Rule::WHITESPACE | Rule::COMMENT => "whitespace",
        #[allow(unreachable_patterns)]
        _ => "input",
    }
}
