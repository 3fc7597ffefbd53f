//! Constant folding.

use crate::symbolic::{
    expr::{Expr, UnaryOp},
    simplify::{rules::{literal, number}, step::Step},
    step_collector::StepCollector,
};

/// Evaluates the expression if all of its operands are numbers.
///
/// `2 + 3 = 5`
/// `-(2) = -2`
/// `sqrt(16) = 4`
///
/// Results that are not finite are left unevaluated, so `1 / 0` stays as it is. Functions other
/// than negation are only evaluated when the result is an integer; `sin(0)` becomes `0`, but
/// `sin(1)` is kept exact.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let value = match expr {
        Expr::Binary(op, lhs, rhs) => op.apply(literal(lhs)?, literal(rhs)?),
        Expr::Unary(UnaryOp::Neg, operand) => -literal(operand)?,
        Expr::Unary(op, operand) => Some(op.apply(literal(operand)?))
            .filter(|value| value.fract() == 0.0)?,
        _ => return None,
    };

    if !value.is_finite() {
        return None;
    }

    step_collector.push(Step::FoldConstants);
    Some(number(value))
}

/// Applies all constant folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
}
