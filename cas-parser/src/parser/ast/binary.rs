use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    token::op::BinOp,
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, before we build the
    /// corresponding AST node, we should check if the operator after `2` has higher precedence
    /// than `+` (if it exists).
    ///
    /// If it does, we should parse the expression starting with `2` first, so that we get `2 * 3`
    /// as the right-hand-side to the `1 +` node. This works by calling into [`Self::parse_expr`]
    /// again, but with `rhs` (`2` in this case) as the `lhs` argument.
    ///
    /// If it does not (such as in the expression `3 * 2 + 1`), we build the AST node `3 * 2`
    /// first. Then, [`Self::parse_expr`] will pick up the `+ 1` part of the expression, and
    /// build the AST node `3 * 2 + 1`.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        while let Some(next_op) = input.peek::<BinOp>() {
            let binds_tighter = next_op.precedence() > precedence
                || (next_op.precedence() == precedence
                    && next_op.associativity() == Associativity::Right);

            if binds_tighter {
                // `1 + 2 * 3` or `2 ^ 3 ^ 4`: the operator claims `rhs` as its left operand
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            } else {
                // `1 * 2 + 3` or `1 * 2 * 3`: build `lhs op rhs` first; the outer loop in
                // `parse_expr` picks this operator up afterwards
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// Parses a binary expression with the given left-hand-side, consuming every following
    /// operator whose precedence is at least `precedence`.
    ///
    /// If no such operator follows, `lhs` is returned as-is.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        while let Some(op) = input.peek::<BinOp>() {
            if op.precedence() < precedence {
                break;
            }

            let op = input.try_parse::<BinOp>().map(|_| op)?;
            let rhs = Unary::parse_or_lower(input)?;
            lhs = Self::complete_rhs(input, lhs, op, rhs)?;
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.lhs, self.op, self.rhs)
    }
}
