//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the root of the expression they are given; the
//! simplifier is responsible for walking the tree.

pub mod add;
pub mod divide;
pub mod fold;
pub mod multiply;
pub mod negate;
pub mod power;

use crate::symbolic::{expr::{BinaryOp, Expr, UnaryOp}, step_collector::StepCollector};
use super::step::Step;

/// Creates a number expression, normalizing `-0` to `0` so that it prints without a sign.
pub(crate) fn number(value: f64) -> Expr {
    Expr::Number(value + 0.0)
}

/// Returns the value of the expression if it is a number literal.
pub(crate) fn literal(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Number(n) => Some(*n),
        _ => None,
    }
}

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinaryOp,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(target_op, lhs, rhs) if *target_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a negation, calls the given transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_negate(expr: &Expr, f: impl Fn(&Expr) -> Option<Expr>) -> Option<Expr> {
    match expr {
        Expr::Unary(UnaryOp::Neg, operand) => f(operand),
        _ => None,
    }
}

/// Applies the first rule that matches the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold::all(expr, step_collector)
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| negate::all(expr, step_collector))
}
