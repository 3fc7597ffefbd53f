//! Simplification rules for exponentiation.

use crate::symbolic::{
    expr::{BinaryOp, Expr},
    simplify::{rules::{do_binary, literal, number}, step::Step},
    step_collector::StepCollector,
};

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Pow, |lhs, rhs| {
        rhs.is_number(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`, unless `a` is the number `0`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Pow, |lhs, rhs| {
        (rhs.is_number(0.0) && !lhs.is_number(0.0)).then(|| Expr::Number(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `1^a = 1`
pub fn one_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Pow, |lhs, _| {
        lhs.is_number(1.0).then(|| Expr::Number(1.0))
    })?;

    step_collector.push(Step::OnePower);
    Some(opt)
}

/// `(x^2)^3 = x^6`, for numeric exponents
///
/// Not applied when the inner exponent is an even integer and the outer one is not an integer,
/// since `(x^2)^0.5` is `|x|`, not `x`.
pub fn power_of_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinaryOp::Pow, |lhs, rhs| {
        let outer = literal(rhs)?;
        do_binary(lhs, BinaryOp::Pow, |base, inner| {
            let inner = literal(inner)?;
            let even_inner = inner.fract() == 0.0 && inner % 2.0 == 0.0;
            if even_inner && outer.fract() != 0.0 {
                return None;
            }

            let exponent = inner * outer;
            exponent.is_finite().then(|| base.clone().pow(number(exponent)))
        })
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_one(expr, step_collector)
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| one_power(expr, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
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
    fn identities() {
        assert_eq!(apply("x^1").as_deref(), Some("x"));
        assert_eq!(apply("x^0").as_deref(), Some("1"));
        assert_eq!(apply("0^0"), None);
        assert_eq!(apply("1^x").as_deref(), Some("1"));
    }

    #[test]
    fn nested_powers() {
        assert_eq!(apply("(x^2)^3").as_deref(), Some("x^6"));
        assert_eq!(apply("(x^y)^3"), None);
        assert_eq!(apply("x^2^3"), None);
    }

    #[test]
    fn nested_powers_keep_sign() {
        assert_eq!(apply("(x^2)^0.5"), None);
        assert_eq!(apply("(x^4)^0.25"), None);
        assert_eq!(apply("(x^2)^3").as_deref(), Some("x^6"));
        assert_eq!(apply("(x^3)^0.5").as_deref(), Some("x^1.5"));
        assert_eq!(apply("(x^0.5)^2").as_deref(), Some("x^1"));
    }
}
