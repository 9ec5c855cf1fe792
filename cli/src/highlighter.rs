use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::{Token, tokenize, unmatched_closers};

const PLAIN: Color = Color::White;
const NUMBER: Color = Color::Cyan;
const OPERATOR: Color = Color::White;
const PAREN: Color = Color::Yellow;
const ACTION: Color = Color::Magenta;
const COMMAND: Color = Color::Blue;
const STRAY: Color = Color::DarkGray;
const UNMATCHED: Color = Color::Red;

/// Colors REPL input. Characters the calculator would drop are dimmed and
/// closing parentheses without a partner are shown in red.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();

        if line.trim_start().starts_with(':') {
            output.push((Style::new().fg(COMMAND), line.to_string()));
            return output;
        }

        let unmatched = unmatched_closers(line);
        let mut curr_end = 0;

        for (token, span) in tokenize(line) {
            if span.start > curr_end {
                output.push((Style::new().fg(PLAIN), line[curr_end..span.start].to_string()));
            }

            let fg = match token {
                Some(Token::Number) => NUMBER,
                Some(Token::Operator) => OPERATOR,
                Some(Token::LParen) => PAREN,
                Some(Token::RParen) if unmatched.contains(&span) => UNMATCHED,
                Some(Token::RParen) => PAREN,
                Some(Token::Action) => ACTION,
                None => STRAY,
            };
            let mut style = Style::new().fg(fg);
            if token == Some(Token::Action) {
                style = style.bold();
            }
            output.push((style, line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(PLAIN), line[curr_end..].to_string()));
        }

        output
    }
}
