use crate::{
    parser::{
        error::{kind, Error},
        token::{Float, Int, Name},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, such as `3`, `3.` or `.25`. Signs are parsed as unary negation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal. This value is always finite.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = input.try_parse::<Int>()
            .map(|int| (int.lexeme, int.span))
            .or_else(|_| input.try_parse::<Float>().map(|float| (float.lexeme, float.span)))?;

        match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self { value, span }),
            _ => Err(Error::new(vec![span], kind::NumberOutOfRange)),
        }
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol literal: the name of a variable, constant or function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;
        Ok(Self {
            name: name.lexeme,
            span: name.span,
        })
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a literal value in an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.current_token().map(|token| token.kind) {
            Some(TokenKind::Name) => input.try_parse().map(Literal::Symbol),
            Some(number) if number.is_number() => input.try_parse().map(Literal::Number),
            Some(found) => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name],
                found,
            })),
            None => Err(input.error(kind::UnexpectedEof)),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
