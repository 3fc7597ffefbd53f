//! Simplification rules for multiplication.

use crate::symbolic::{
    expr::{BinaryOp, Expr},
    simplify::{rules::{do_binary, literal, number}, step::Step},
    step_collector::StepCollector,
};

/// `a * 1 = a`
/// `1 * a = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Mul, |lhs, rhs| {
        if rhs.is_number(1.0) {
            Some(lhs.clone())
        } else if lhs.is_number(1.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a * 0 = 0`
/// `0 * a = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Mul, |lhs, rhs| {
        (lhs.is_number(0.0) || rhs.is_number(0.0)).then(|| Expr::Number(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Moves a numeric factor to the left.
///
/// `x * 2 = 2 * x`
pub fn constant_first(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Mul, |lhs, rhs| {
        match (lhs, rhs) {
            (Expr::Number(_), _) => None,
            (_, Expr::Number(_)) => Some(rhs.clone() * lhs.clone()),
            _ => None,
        }
    })?;

    step_collector.push(Step::ConstantFirst);
    Some(opt)
}

/// `2 * (3 * x) = 6 * x`
pub fn combine_constant_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Mul, |lhs, rhs| {
        let c1 = literal(lhs)?;
        do_binary(rhs, BinaryOp::Mul, |inner_lhs, inner_rhs| {
            let product = c1 * literal(inner_lhs)?;
            product.is_finite().then(|| number(product) * inner_rhs.clone())
        })
    })?;

    step_collector.push(Step::CombineConstantFactors);
    Some(opt)
}

/// `(-1) * a = -a`
pub fn multiply_negative_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Mul, |lhs, rhs| {
        lhs.is_number(-1.0).then(|| -rhs.clone())
    })?;

    step_collector.push(Step::MultiplyNegativeOne);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_one(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| constant_first(expr, step_collector))
        .or_else(|| combine_constant_factors(expr, step_collector))
        .or_else(|| multiply_negative_one(expr, step_collector))
}
