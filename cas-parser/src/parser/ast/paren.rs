use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression in the parenthesized expression, consuming the [`Paren`].
    pub fn into_innermost(self) -> Expr {
        let mut inner = self.expr;
        while let Expr::Paren(paren) = *inner {
            inner = paren.expr;
        }
        *inner
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        if let Some(close_paren) = input.peek::<CloseParen>() {
            return Err(Error::new(
                vec![open_paren.span.start..close_paren.span.end],
                kind::EmptyParenthesis,
            ));
        }

        let expr = input.try_parse::<Expr>()?;
        match input.current_token().map(|token| token.kind) {
            Some(TokenKind::CloseParen) => {
                let close_paren = input.try_parse::<CloseParen>()?;
                Ok(Self {
                    expr: Box::new(expr),
                    span: open_paren.span.start..close_paren.span.end,
                })
            },
            Some(found) => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::CloseParen],
                found,
            })),
            None => Err(Error::new(
                vec![open_paren.span],
                kind::UnclosedParenthesis { opening: true },
            )),
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
