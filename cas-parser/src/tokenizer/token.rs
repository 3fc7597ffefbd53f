use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Float,

    /// Any character that does not start another token.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }

    /// Returns true if the token is a numeric literal.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
