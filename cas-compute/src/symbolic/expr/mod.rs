//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](cas_parser::parser::ast::expr::Expr) type from `cas_parser` remembers where each
//! node came from in the source text, and keeps parentheses as explicit nodes. That's convenient
//! for reporting errors, but not for manipulation. This module defines a separate [`Expr`], which
//! drops spans and parentheses, resolves named constants to numbers, and resolves function names
//! to a closed set of [`UnaryOp`]s.
//!
//! Every transformation in this crate (differentiation, integration, simplification) consumes
//! an [`Expr`] by reference and produces a brand new tree; trees are never mutated in place.
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] compare trees **structurally**: two
//! expressions are equal if they have the same shape, operators and symbols, and their numbers
//! are equal. `x + 1` and `1 + x` are different expressions.
//!
//! To keep equality reflexive, `NaN` is considered equal to `NaN`. Parsed expressions never
//! contain `NaN`, but nothing stops a tree from being built by hand with one.

mod display;
mod iter;
mod lower;

pub use iter::ExprIter;
pub use lower::parse;

use std::{collections::BTreeSet, ops::{Add, Div, Mul, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Applies the operator to two numbers, following IEEE 754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// A unary operator: negation, or one of the built-in functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    Neg,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
}

impl UnaryOp {
    /// Every built-in function, excluding negation.
    pub const FUNCTIONS: [UnaryOp; 14] = [
        Self::Sin, Self::Cos, Self::Tan,
        Self::Asin, Self::Acos, Self::Atan,
        Self::Sinh, Self::Cosh, Self::Tanh,
        Self::Exp, Self::Ln, Self::Log10,
        Self::Sqrt, Self::Abs,
    ];

    /// Returns the canonical name of the operator, as it is printed.
    pub fn name(self) -> &'static str {
        match self {
            Self::Neg => "neg",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Returns the function with the given name. The aliases `arcsin`, `arccos`, `arctan` and
    /// `log` are accepted as well.
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name {
            "arcsin" => Self::Asin,
            "arccos" => Self::Acos,
            "arctan" => Self::Atan,
            "log" => Self::Ln,
            _ => return Self::FUNCTIONS.into_iter().find(|op| op.name() == name),
        };
        Some(op)
    }

    /// Returns true if this operator is a trigonometric function whose input is an angle.
    pub fn takes_angle(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Returns true if this operator is an inverse trigonometric function whose output is an
    /// angle.
    pub fn returns_angle(self) -> bool {
        matches!(self, Self::Asin | Self::Acos | Self::Atan)
    }

    /// Applies the operator to a number, with angles measured in radians.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Neg => -x,
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
        }
    }
}

/// The name of the pseudo-function that integrates its first argument with respect to the
/// variable given as its second argument.
pub const INTEGRAL: &str = "int";

/// The name of the pseudo-function that differentiates its first argument with respect to the
/// variable given as its second argument.
pub const DERIVATIVE: &str = "diff";

/// A mathematical expression.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal number, such as `2` or `0.5`.
    Number(f64),

    /// A variable, such as `x` or `y`.
    Symbol(String),

    /// A binary operation, such as `x + 1`.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),

    /// A unary operation, such as `-x` or `sin(x)`.
    Unary(UnaryOp, Box<Expr>),

    /// A call to a pseudo-function that the engine resolves into another expression, such as
    /// `int(x^2, x)`. See [`resolve`](crate::symbolic::resolve::resolve).
    Call(String, Vec<Expr>),
}

impl Expr {
    /// Creates a symbol with the given name.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates the binary expression `lhs op rhs`.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Applies the given unary operator to this expression.
    pub fn apply(self, op: UnaryOp) -> Self {
        Self::Unary(op, Box::new(self))
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Self::binary(BinaryOp::Pow, self, exponent.into())
    }

    /// Returns the numeric value of this expression if it is a number literal, or the negation
    /// of one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Unary(UnaryOp::Neg, operand) => match **operand {
                Self::Number(n) => Some(-n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns true if this expression is the number literal `value`.
    pub fn is_number(&self, value: f64) -> bool {
        matches!(self, Self::Number(n) if *n == value)
    }

    /// Returns the name of the symbol if this expression is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the given variable occurs anywhere in the expression.
    pub fn depends_on(&self, var: &str) -> bool {
        self.post_order_iter()
            .any(|expr| matches!(expr, Self::Symbol(name) if name == var))
    }

    /// Returns the names of all the variables in the expression, in sorted order.
    pub fn free_symbols(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Self::as_symbol)
            .collect()
    }

    /// Returns true if the expression contains no variables.
    pub fn is_constant(&self) -> bool {
        !self.post_order_iter().any(|expr| matches!(expr, Self::Symbol(_)))
    }

    /// Returns the number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns a copy of this expression with every occurrence of the variable `var` replaced by
    /// `replacement`.
    pub fn substitute(&self, var: &str, replacement: &Expr) -> Expr {
        match self {
            Self::Symbol(name) if name == var => replacement.clone(),
            Self::Number(_) | Self::Symbol(_) => self.clone(),
            Self::Binary(op, lhs, rhs) => Self::binary(
                *op,
                lhs.substitute(var, replacement),
                rhs.substitute(var, replacement),
            ),
            Self::Unary(op, operand) => operand.substitute(var, replacement).apply(*op),
            Self::Call(name, args) => Self::Call(
                name.clone(),
                args.iter().map(|arg| arg.substitute(var, replacement)).collect(),
            ),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Binary(op_a, lhs_a, rhs_a), Self::Binary(op_b, lhs_b, rhs_b)) => {
                op_a == op_b && lhs_a == lhs_b && rhs_a == rhs_b
            },
            (Self::Unary(op_a, a), Self::Unary(op_b, b)) => op_a == op_b && a == b,
            (Self::Call(name_a, args_a), Self::Call(name_b, args_b)) => {
                name_a == name_b && args_a == args_b
            },
            _ => false,
        }
    }
}

/// Equality is reflexive, since `NaN` compares equal to itself.
impl Eq for Expr {}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Generates operator implementations that build the corresponding [`Expr::Binary`] node as-is,
/// without simplifying anything.
macro_rules! impl_binary_ops {
    ($($trait:ident $method:ident => $op:ident),* $(,)?) => {
        $(
            impl $trait for Expr {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOp::$op, self, rhs)
                }
            }
        )*
    };
}

impl_binary_ops!(
    Add add => Add,
    Sub sub => Sub,
    Mul mul => Mul,
    Div div => Div,
);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.apply(UnaryOp::Neg)
    }
}
