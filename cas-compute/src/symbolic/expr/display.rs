//! Text rendering of expressions. The output can always be parsed back into an expression that
//! evaluates identically.

use cas_parser::parser::{Associativity, Precedence};
use std::fmt::{self, Display, Formatter};
use super::{BinaryOp, Expr, UnaryOp};

impl BinaryOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns the symbol of the operator, surrounded by the spacing it is printed with.
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Sub => " - ",
            Self::Mul => " * ",
            Self::Div => " / ",
            Self::Pow => "^",
        }
    }
}

/// Returns the precedence at which the expression is printed, or [`None`] if it prints as an
/// atom that never needs parentheses (a symbol, a non-negative number, or a function call).
fn precedence(expr: &Expr) -> Option<Precedence> {
    match expr {
        Expr::Number(n) if n.is_sign_negative() => Some(Precedence::Neg),
        Expr::Binary(op, ..) => Some(op.precedence()),
        Expr::Unary(UnaryOp::Neg, _) => Some(Precedence::Neg),
        Expr::Number(_) | Expr::Symbol(_) | Expr::Unary(..) | Expr::Call(..) => None,
    }
}

/// Returns true if `child` must be parenthesized when printed as an operand of an operator with
/// the given precedence and associativity. `right_side` is true if `child` is the right operand.
fn needs_parens(child: &Expr, parent: Precedence, associativity: Associativity, right_side: bool) -> bool {
    // negative numbers are always parenthesized as operands
    if matches!(child, Expr::Number(n) if n.is_sign_negative()) {
        return true;
    }

    let Some(child) = precedence(child) else {
        return false;
    };

    match child.cmp(&parent) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Equal => match associativity {
            Associativity::Left => right_side,
            Associativity::Right => !right_side,
        },
        std::cmp::Ordering::Greater => false,
    }
}

/// Writes the operand, parenthesizing it if `parens` is true.
fn write_operand(f: &mut Formatter, operand: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // `Display` for `f64` never uses exponent notation and prints integral values
            // without a fractional part
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::Binary(op, lhs, rhs) => {
                let (precedence, associativity) = (op.precedence(), op.associativity());
                write_operand(f, lhs, needs_parens(lhs, precedence, associativity, false))?;
                write!(f, "{}", op.symbol())?;
                write_operand(f, rhs, needs_parens(rhs, precedence, associativity, true))
            },
            Expr::Unary(UnaryOp::Neg, operand) => {
                write!(f, "-")?;
                // `-(-x)` is parenthesized, as is `-(a * b)`
                write_operand(f, operand, needs_parens(operand, Precedence::Neg, Associativity::Left, true))
            },
            Expr::Unary(op, operand) => write!(f, "{}({})", op.name(), operand),
            Expr::Call(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}
