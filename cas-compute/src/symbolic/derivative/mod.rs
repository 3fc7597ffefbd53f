//! Symbolic differentiation.
//!
//! The derivative is computed structurally with the sum, product, quotient, power and chain
//! rules. The result is **not** simplified: `d/dx x^2` is `2 * x^(2 - 1) * 1`. Pass the result
//! to [`simplify`](crate::symbolic::simplify::simplify) to clean it up.

mod function;

use cas_error::Error;
use super::{
    error::UnsupportedDerivative,
    expr::{BinaryOp, Expr, UnaryOp, DERIVATIVE, INTEGRAL},
    integrate::integrate,
};

/// `(a^b)'`, choosing the simplest applicable form of the power rule.
fn power_rule(base: &Expr, exponent: &Expr, var: &str) -> Result<Expr, Error> {
    let power = base.clone().pow(exponent.clone());
    if !exponent.depends_on(var) {
        // (a^n)' = n * a^(n - 1) * a'
        Ok(exponent.clone()
            * base.clone().pow(exponent.clone() - Expr::Number(1.0))
            * derivative(base, var)?)
    } else if !base.depends_on(var) {
        // (c^b)' = c^b * ln(c) * b'
        Ok(power * base.clone().apply(UnaryOp::Ln) * derivative(exponent, var)?)
    } else {
        // (a^b)' = a^b * (b' * ln(a) + b * a' / a)
        let da = derivative(base, var)?;
        let db = derivative(exponent, var)?;
        Ok(power * (
            db * base.clone().apply(UnaryOp::Ln)
                + exponent.clone() * da / base.clone()
        ))
    }
}

/// Computes the derivative of `expr` with respect to the variable `var`. Returns
/// [`UnsupportedDerivative`] if `expr` contains a function without a known derivative.
pub fn derivative(expr: &Expr, var: &str) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) => Ok(Expr::Number(0.0)),
        Expr::Symbol(name) => Ok(Expr::Number(if name == var { 1.0 } else { 0.0 })),
        Expr::Binary(op, lhs, rhs) => match op {
            BinaryOp::Add => Ok(derivative(lhs, var)? + derivative(rhs, var)?),
            BinaryOp::Sub => Ok(derivative(lhs, var)? - derivative(rhs, var)?),
            // (u * v)' = u' * v + u * v'
            BinaryOp::Mul => Ok(
                derivative(lhs, var)? * *rhs.clone() + *lhs.clone() * derivative(rhs, var)?
            ),
            // (u / c)' = u' / c
            BinaryOp::Div if !rhs.depends_on(var) => Ok(derivative(lhs, var)? / (**rhs).clone()),
            // (u / v)' = (u' * v - u * v') / v^2
            BinaryOp::Div => Ok(
                (derivative(lhs, var)? * *rhs.clone() - *lhs.clone() * derivative(rhs, var)?)
                    / (**rhs).clone().pow(2.0)
            ),
            BinaryOp::Pow => power_rule(lhs, rhs, var),
        },
        Expr::Unary(UnaryOp::Neg, operand) => Ok(-derivative(operand, var)?),
        Expr::Unary(op, operand) => {
            let outer = function::outer_derivative(*op, operand)
                .ok_or_else(|| Error::without_span(UnsupportedDerivative {
                    name: op.name().to_string(),
                }))?;
            // chain rule
            Ok(outer * derivative(operand, var)?)
        },
        Expr::Call(name, args) => match (name.as_str(), args.as_slice()) {
            // d/dx int(f, x) = f
            (INTEGRAL, [integrand, Expr::Symbol(bound)]) if bound == var => Ok(integrand.clone()),
            (INTEGRAL, [integrand, Expr::Symbol(bound)]) => derivative(&integrate(integrand, bound)?, var),
            (DERIVATIVE, [inner, Expr::Symbol(inner_var)]) => derivative(&derivative(inner, inner_var)?, var),
            _ => Err(Error::without_span(UnsupportedDerivative { name: name.clone() })),
        },
    }
}

impl Expr {
    /// Computes the derivative of this expression with respect to `var`. See [`derivative`].
    pub fn differentiate(&self, var: &str) -> Result<Expr, Error> {
        derivative(self, var)
    }
}
