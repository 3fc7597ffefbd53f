//! Derivatives of the built-in functions.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use crate::symbolic::expr::{Expr, UnaryOp};

/// Given the argument `u` of a function `f`, builds `f'(u)`. The chain rule is applied by the
/// caller.
type OuterDerivative = fn(&Expr) -> Expr;

/// Derivatives of the built-in functions that have one in closed form.
///
/// `abs` has no entry, so differentiating it fails.
static DERIVATIVES: Lazy<HashMap<UnaryOp, OuterDerivative>> = Lazy::new(|| {
    let entries: [(UnaryOp, OuterDerivative); 13] = [
        // sin' = cos
        (UnaryOp::Sin, |u| u.clone().apply(UnaryOp::Cos)),
        // cos' = -sin
        (UnaryOp::Cos, |u| -u.clone().apply(UnaryOp::Sin)),
        // tan' = 1 / cos^2
        (UnaryOp::Tan, |u| Expr::Number(1.0) / u.clone().apply(UnaryOp::Cos).pow(2.0)),
        // asin' = 1 / sqrt(1 - u^2)
        (UnaryOp::Asin, |u| {
            Expr::Number(1.0) / (Expr::Number(1.0) - u.clone().pow(2.0)).apply(UnaryOp::Sqrt)
        }),
        // acos' = -1 / sqrt(1 - u^2)
        (UnaryOp::Acos, |u| {
            -(Expr::Number(1.0) / (Expr::Number(1.0) - u.clone().pow(2.0)).apply(UnaryOp::Sqrt))
        }),
        // atan' = 1 / (1 + u^2)
        (UnaryOp::Atan, |u| Expr::Number(1.0) / (Expr::Number(1.0) + u.clone().pow(2.0))),
        (UnaryOp::Sinh, |u| u.clone().apply(UnaryOp::Cosh)),
        (UnaryOp::Cosh, |u| u.clone().apply(UnaryOp::Sinh)),
        (UnaryOp::Tanh, |u| Expr::Number(1.0) / u.clone().apply(UnaryOp::Cosh).pow(2.0)),
        (UnaryOp::Exp, |u| u.clone().apply(UnaryOp::Exp)),
        (UnaryOp::Ln, |u| Expr::Number(1.0) / u.clone()),
        // log10' = 1 / (u * ln(10))
        (UnaryOp::Log10, |u| {
            Expr::Number(1.0) / (u.clone() * Expr::Number(10.0).apply(UnaryOp::Ln))
        }),
        // sqrt' = 1 / (2 * sqrt(u))
        (UnaryOp::Sqrt, |u| {
            Expr::Number(1.0) / (Expr::Number(2.0) * u.clone().apply(UnaryOp::Sqrt))
        }),
    ];
    HashMap::from(entries)
});

/// Returns `f'(u)` for the function `op` applied to `u`, or [`None`] if `op` has no known
/// derivative.
pub(super) fn outer_derivative(op: UnaryOp, u: &Expr) -> Option<Expr> {
    DERIVATIVES.get(&op).map(|derivative| derivative(u))
}
