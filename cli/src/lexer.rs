use core::ops::Range;

use logos::Logos;

/// Tokens of a REPL line. Characters that match nothing are dropped by the
/// calculator and come out of the lexer as errors.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\f]+")]
pub enum Token {
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Keys bound to a calculator action.
    #[token("s")]
    #[token("r")]
    #[token("t")]
    #[token("=")]
    Action,
}

/// Tokens of `line` with their byte ranges. `None` marks a stray character.
pub fn tokenize(line: &str) -> Vec<(Option<Token>, Range<usize>)> {
    Token::lexer(line)
        .spanned()
        .map(|(token, span)| (token.ok(), span))
        .collect()
}

/// Byte ranges of `)` that close nothing.
pub fn unmatched_closers(line: &str) -> Vec<Range<usize>> {
    let mut depth = 0usize;
    let mut unmatched = Vec::new();
    for (token, span) in tokenize(line) {
        match token {
            Some(Token::LParen) => depth += 1,
            Some(Token::RParen) if depth > 0 => depth -= 1,
            Some(Token::RParen) => unmatched.push(span),
            _ => {}
        }
    }
    unmatched
}
