//! Simplification rules for negation.

use crate::symbolic::{
    expr::{BinaryOp, Expr},
    simplify::{rules::{do_binary, do_negate, literal, number}, step::Step},
    step_collector::StepCollector,
};

/// `-(-a) = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |operand| {
        do_negate(operand, |inner| Some(inner.clone()))
    })?;

    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `-(2 * x) = (-2) * x`
pub fn negate_constant_factor(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_negate(expr, |operand| {
        do_binary(operand, BinaryOp::Mul, |factor, term| {
            Some(number(-literal(factor)?) * term.clone())
        })
    })?;

    step_collector.push(Step::NegateConstantFactor);
    Some(opt)
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    double_negation(expr, step_collector)
        .or_else(|| negate_constant_factor(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(source: &str) -> Option<String> {
        all(&parse(source).unwrap(), &mut ()).map(|expr| expr.to_string())
    }

    #[test]
    fn double() {
        assert_eq!(apply("-(-x)").as_deref(), Some("x"));
        assert_eq!(apply("-x"), None);
    }

    #[test]
    fn constant_factor() {
        assert_eq!(apply("-(2 * x)").as_deref(), Some("(-2) * x"));
        assert_eq!(apply("-(x * y)"), None);
    }
}
