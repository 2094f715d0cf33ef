//! Lexer for the module matrix text format using logos

use logos::Logos;

pub use crate::error::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    #[token("#")]
    #[token("1")]
    #[token("X")]
    #[token("x")]
    Lit,

    #[token(".")]
    #[token("0")]
    #[token("_")]
    #[token("-")]
    Unlit,

    #[token("\n")]
    Newline,

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,
}

/// Tokenize matrix text, yielding the span of any unrecognized input as an error
pub fn lex(input: &str) -> impl Iterator<Item = Result<(Token, Span), Span>> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| tok.map(|t| (t, span.clone())).map_err(|_| span))
}
