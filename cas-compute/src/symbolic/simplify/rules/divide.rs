//! Simplification rules for division.
//!
//! A division by a number, such as `x / 2`, is kept as a division.

use crate::symbolic::{
    expr::{BinaryOp, Expr},
    simplify::{rules::{do_binary, literal, number}, step::Step},
    step_collector::StepCollector,
};

/// `a / 1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Div, |lhs, rhs| {
        rhs.is_number(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0 / a = 0`, unless `a` is the number `0`
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Div, |lhs, rhs| {
        (lhs.is_number(0.0) && !rhs.is_number(0.0)).then(|| Expr::Number(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a / a = 1`, unless `a` is the number `0`
pub fn divide_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Div, |lhs, rhs| {
        (lhs == rhs && !rhs.is_number(0.0)).then(|| Expr::Number(1.0))
    })?;

    step_collector.push(Step::DivideSelf);
    Some(opt)
}

/// Returns `(c1 / c2) * term`, if the quotient is finite. The factor is dropped when it is `1`.
fn scale(c1: f64, c2: f64, term: &Expr) -> Option<Expr> {
    let quotient = c1 / c2;
    if !quotient.is_finite() {
        None
    } else if quotient == 1.0 {
        Some(term.clone())
    } else {
        Some(number(quotient) * term.clone())
    }
}

/// `(6 * x) / 2 = 3 * x`
pub fn divide_constant_factor(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Div, |lhs, rhs| {
        let c2 = literal(rhs)?;
        do_binary(lhs, BinaryOp::Mul, |factor, term| {
            scale(literal(factor)?, c2, term)
        })
    })?;

    step_collector.push(Step::DivideConstantFactor);
    Some(opt)
}

/// `6 * (x / 2) = 3 * x`
pub fn multiply_fraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Mul, |lhs, rhs| {
        let c1 = literal(lhs)?;
        do_binary(rhs, BinaryOp::Div, |term, divisor| {
            scale(c1, literal(divisor)?, term)
        })
    })?;

    step_collector.push(Step::MultiplyFraction);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_one(expr, step_collector)
        .or_else(|| divide_zero(expr, step_collector))
        .or_else(|| divide_self(expr, step_collector))
        .or_else(|| divide_constant_factor(expr, step_collector))
        .or_else(|| multiply_fraction(expr, step_collector))
}
