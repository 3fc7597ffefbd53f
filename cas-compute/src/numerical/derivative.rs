//! Numerical differentiation.

use cas_error::Error;
use crate::symbolic::expr::Expr;
use super::{ctxt::Ctxt, error::UndefinedVariable};

/// The default step size for [`central_difference`].
pub const DEFAULT_STEP: f64 = 1e-5;

/// Approximates the derivative of `expr` with respect to `var` at the value `var` has in `ctxt`,
/// using the central difference `(f(v + h) - f(v - h)) / 2h`.
pub fn central_difference(expr: &Expr, var: &str, ctxt: &Ctxt, h: f64) -> Result<f64, Error> {
    let value = ctxt.get_var(var).ok_or_else(|| {
        Error::without_span(UndefinedVariable {
            name: var.to_string(),
            suggestions: ctxt.similar_vars(var),
        })
    })?;

    let mut shifted = ctxt.clone();
    shifted.add_var(var, value + h);
    let ahead = expr.eval(&shifted)?;
    shifted.add_var(var, value - h);
    let behind = expr.eval(&shifted)?;

    Ok((ahead - behind) / (2.0 * h))
}
