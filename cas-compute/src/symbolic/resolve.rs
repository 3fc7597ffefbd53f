//! Replaces `int(...)` and `diff(...)` calls with their results.

use cas_error::Error;
use super::{
    derivative::derivative,
    expr::{Expr, DERIVATIVE, INTEGRAL},
    integrate::integrate,
};

/// Walks the expression bottom-up, replacing every `int(e, v)` call with the antiderivative of
/// `e` with respect to `v`, and every `diff(e, v)` call with the derivative of `e`.
///
/// Arguments are resolved before the call itself, so nested calls such as `int(diff(x^3, x), x)`
/// work inside out. The first failure is returned.
pub fn resolve(expr: &Expr) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => Ok(expr.clone()),
        Expr::Binary(op, lhs, rhs) => Ok(Expr::binary(*op, resolve(lhs)?, resolve(rhs)?)),
        Expr::Unary(op, operand) => Ok(resolve(operand)?.apply(*op)),
        Expr::Call(name, args) => {
            let args = args.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
            match (name.as_str(), args.as_slice()) {
                (INTEGRAL, [integrand, Expr::Symbol(var)]) => integrate(integrand, var),
                (DERIVATIVE, [inner, Expr::Symbol(var)]) => derivative(inner, var),
                _ => Ok(Expr::Call(name.clone(), args)),
            }
        },
    }
}
