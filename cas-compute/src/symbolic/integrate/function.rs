//! Antiderivatives of the built-in functions.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use crate::symbolic::expr::{Expr, UnaryOp};

/// Given the argument `u` of a function `f`, builds `F(u)`, where `F' = f`.
type Antiderivative = fn(&Expr) -> Expr;

static ANTIDERIVATIVES: Lazy<HashMap<UnaryOp, Antiderivative>> = Lazy::new(|| {
    let entries: [(UnaryOp, Antiderivative); 7] = [
        (UnaryOp::Sin, |u| -u.clone().apply(UnaryOp::Cos)),
        (UnaryOp::Cos, |u| u.clone().apply(UnaryOp::Sin)),
        (UnaryOp::Exp, |u| u.clone().apply(UnaryOp::Exp)),
        (UnaryOp::Sinh, |u| u.clone().apply(UnaryOp::Cosh)),
        (UnaryOp::Cosh, |u| u.clone().apply(UnaryOp::Sinh)),
        // sqrt(u) = u^(1/2), so F = u^(3/2) / (3/2)
        (UnaryOp::Sqrt, |u| u.clone().pow(1.5) / Expr::Number(1.5)),
        // F = u * ln(u) - u
        (UnaryOp::Ln, |u| u.clone() * u.clone().apply(UnaryOp::Ln) - u.clone()),
    ];
    HashMap::from(entries)
});

/// Returns `F(u)` for the function `op` applied to `u`, or [`None`] if `op` is not in the table.
pub(super) fn antiderivative(op: UnaryOp, u: &Expr) -> Option<Expr> {
    ANTIDERIVATIVES.get(&op).map(|antiderivative| antiderivative(u))
}
