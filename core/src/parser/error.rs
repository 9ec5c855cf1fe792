use thiserror::Error;

use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::parser::{Rule, Span};

/// Parser error with the source it was raised for.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Unclosed delimiter
    #[error("Unclosed delimiter '{delimiter}'")]
    UnclosedDelimiter { delimiter: char },
    /// Number literal that does not fit a finite float
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Integer part with a superfluous leading zero, e.g. `007`
    #[error("Number literal '{text}' has a leading zero")]
    LeadingZero { text: String },
    /// Maximum nesting depth exceeded
    #[error("Expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, src: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            src: src.into(),
            span,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help, related) = match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ("P001", vec![], vec![]),
            ParseErrorKind::UnclosedDelimiter { .. } => (
                "P002",
                vec!["Add the missing closing parenthesis".to_string()],
                vec![RelatedInfo {
                    span: Span::new(self.src.len(), self.src.len()),
                    message: "input ends here".to_string(),
                }],
            ),
            ParseErrorKind::InvalidNumber { .. } => {
                ("P003", vec!["Use a smaller number".to_string()], vec![])
            }
            ParseErrorKind::LeadingZero { .. } => {
                ("P005", vec!["Remove the leading zero".to_string()], vec![])
            }
            ParseErrorKind::MaxDepthExceeded { .. } => (
                "P004",
                vec!["Remove some of the nested parentheses".to_string()],
                vec![],
            ),
            ParseErrorKind::Other { .. } => ("P999", vec![], vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            related,
            help,
            code: Some(code.to_string()),
        }
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    match err.variant {
        ErrorVariant::ParsingError { positives, .. } => {
            let wants_operand = positives.iter().any(|rule| is_operand_rule(*rule));
            if span.0.start >= source.len() && !wants_operand {
                if let Some(open) = unclosed_paren(source) {
                    return ParseError::new(
                        ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
                        source,
                        Span::new(open, open + 1),
                    );
                }
            }

            let kind = ParseErrorKind::UnexpectedToken {
                expected: format_expected_rules(&positives),
                found: describe_found(source, span.0.start),
            };
            ParseError::new(kind, source, span)
        }
        ErrorVariant::CustomError { message } => {
            ParseError::new(ParseErrorKind::Other { message }, source, span)
        }
    }
}

fn is_operand_rule(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::number | Rule::grouped | Rule::neg | Rule::pos | Rule::expression
    )
}

/// Position of the innermost `(` left open at the end of `source`.
fn unclosed_paren(source: &str) -> Option<usize> {
    let mut open = Vec::new();
    for (pos, c) in source.char_indices() {
        match c {
            '(' => open.push(pos),
            ')' => {
                open.pop();
            }
            _ => {}
        }
    }
    open.pop()
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number => "number",
            Rule::add | Rule::sub | Rule::mul | Rule::div => "operator",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe what sits at `pos` in `source`
fn describe_found(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}
