//! Simplification rules for addition and subtraction.

use crate::symbolic::{
    expr::{BinaryOp, Expr, UnaryOp},
    simplify::{rules::{do_binary, number}, step::Step},
    step_collector::StepCollector,
};

/// Returns `b` if the expression is `-b`, or the negation of a negative number.
fn negated(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Unary(UnaryOp::Neg, operand) => Some((**operand).clone()),
        Expr::Number(n) if *n < 0.0 => Some(number(-n)),
        _ => None,
    }
}

/// `a + 0 = a`
/// `0 + a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Add, |lhs, rhs| {
        if rhs.is_number(0.0) {
            Some(lhs.clone())
        } else if lhs.is_number(0.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a - 0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Sub, |lhs, rhs| {
        rhs.is_number(0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0 - a = -a`
pub fn subtract_from_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Sub, |lhs, rhs| {
        lhs.is_number(0.0).then(|| -rhs.clone())
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a - a = 0`
pub fn subtract_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Sub, |lhs, rhs| {
        (lhs == rhs).then(|| Expr::Number(0.0))
    })?;

    step_collector.push(Step::SubtractSelf);
    Some(opt)
}

/// `a + (-b) = a - b`
/// `a + (-2) = a - 2`
pub fn add_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Add, |lhs, rhs| {
        negated(rhs).map(|rhs| lhs.clone() - rhs)
    })?;

    step_collector.push(Step::AddNegative);
    Some(opt)
}

/// `a - (-b) = a + b`
/// `a - (-2) = a + 2`
pub fn subtract_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Sub, |lhs, rhs| {
        negated(rhs).map(|rhs| lhs.clone() + rhs)
    })?;

    step_collector.push(Step::SubtractNegative);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| subtract_from_zero(expr, step_collector))
        .or_else(|| subtract_self(expr, step_collector))
        .or_else(|| add_negative(expr, step_collector))
        .or_else(|| subtract_negative(expr, step_collector))
}
