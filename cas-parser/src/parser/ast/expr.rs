use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            literal::{Literal, LitSym},
            paren::Paren,
            unary::Unary,
        },
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),

    /// A unary operation, such as `-1`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is a [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression: an expression that binds tighter than any operator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Call(call) => call.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some(token_kind) = input.current_token().map(|token| token.kind) else {
            return Err(input.error(kind::UnexpectedEof));
        };

        match token_kind {
            TokenKind::OpenParen => input.try_parse().map(Primary::Paren),
            TokenKind::CloseParen => Err(input.error(kind::UnclosedParenthesis { opening: false })),
            TokenKind::Name => {
                // a name immediately followed by `(` is a function call
                let name = input.try_parse::<LitSym>()?;
                match input.current_token().map(|token| token.kind) {
                    Some(TokenKind::OpenParen) => {
                        Call::parse_args(input, name).map(Primary::Call)
                    },
                    _ => Ok(Primary::Literal(Literal::Symbol(name))),
                }
            },
            number if number.is_number() => input.try_parse().map(Primary::Literal),
            found => Err(input.error(kind::UnexpectedToken {
                expected: &[
                    TokenKind::Int,
                    TokenKind::Float,
                    TokenKind::Name,
                    TokenKind::OpenParen,
                    TokenKind::Sub,
                ],
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Expr::Literal(literal),
            Primary::Paren(paren) => Expr::Paren(paren),
            Primary::Call(call) => Expr::Call(call),
        }
    }
}
