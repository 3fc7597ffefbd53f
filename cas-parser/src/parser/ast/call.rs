use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error::{kind, Error},
        token::{CloseParen, Comma, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sin(x)` or `int(x^2, x)`.
///
/// The parser accepts any name here; whether the function exists and how many arguments it takes
/// is checked when the tree is lowered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function being called.
    pub name: LitSym,

    /// The arguments passed to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that the parentheses and arguments were parsed from.
    pub paren_span: Range<usize>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the parenthesized, comma-separated arguments of a call to the already parsed
    /// function `name`.
    pub fn parse_args(input: &mut Parser, name: LitSym) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        let mut args = Vec::new();

        let close_paren = match input.peek::<CloseParen>() {
            Some(_) => input.try_parse::<CloseParen>()?,
            None => loop {
                args.push(input.try_parse::<Expr>()?);

                match input.current_token().map(|token| token.kind) {
                    Some(TokenKind::Comma) => {
                        input.try_parse::<Comma>()?;
                    },
                    Some(TokenKind::CloseParen) => break input.try_parse::<CloseParen>()?,
                    Some(found) => return Err(input.error(kind::UnexpectedToken {
                        expected: &[TokenKind::Comma, TokenKind::CloseParen],
                        found,
                    })),
                    None => return Err(Error::new(
                        vec![open_paren.span],
                        kind::UnclosedParenthesis { opening: true },
                    )),
                }
            },
        };

        let span = name.span.start..close_paren.span.end;
        Ok(Self {
            name,
            args,
            paren_span: open_paren.span.start..close_paren.span.end,
            span,
        })
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        Self::parse_args(input, name)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if let Some((last, rest)) = self.args.split_last() {
            for arg in rest {
                write!(f, "{}, ", arg)?;
            }
            last.fmt(f)?;
        }
        write!(f, ")")
    }
}
