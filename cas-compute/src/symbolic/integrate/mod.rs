//! Symbolic integration by table lookup.
//!
//! [`integrate`] matches the integrand against a fixed set of rules: linearity, the power rule,
//! reciprocals, exponentials with a constant base, and a table of antiderivatives for the
//! built-in functions. Arguments that are linear in the variable (`a*x + b`) are substituted,
//! so that `∫cos(2x + 1) dx = sin(2x + 1) / 2`. There is no integration by parts; a product of
//! two factors that both depend on the variable is not integrable here.
//!
//! No constant of integration is added.

mod function;

use cas_error::Error;
use log::{debug, trace};
use super::{
    derivative::derivative,
    error::NonIntegrable,
    expr::{BinaryOp, Expr, UnaryOp},
    resolve::resolve,
    simplify::simplify,
};

fn non_integrable(expr: &Expr) -> Error {
    debug!("no integration rule matches `{}`", expr);
    Error::without_span(NonIntegrable { expr: expr.clone() })
}

/// Returns `a` if `u` has the form `a*var + b`, where `a` is a finite, nonzero number.
fn linear_coefficient(u: &Expr, var: &str) -> Option<f64> {
    let slope = simplify(&derivative(u, var).ok()?);
    slope.as_number().filter(|a| a.is_finite() && *a != 0.0)
}

/// Given `F(u)`, returns the integral of `f(u)` with respect to `var`, if `u` is linear in `var`.
fn substitute_linear(antiderivative: Expr, u: &Expr, var: &str) -> Option<Expr> {
    if u.as_symbol() == Some(var) {
        return Some(antiderivative);
    }

    match linear_coefficient(u, var)? {
        a if a == 1.0 => Some(antiderivative),
        a => {
            trace!("substituting linear argument `{}` with slope {}", u, a);
            Some(antiderivative / Expr::Number(a))
        },
    }
}

/// `∫base^exponent`, where one of `base` and `exponent` depends on `var`.
fn integrate_power(expr: &Expr, base: &Expr, exponent: &Expr, var: &str) -> Result<Expr, Error> {
    if !exponent.depends_on(var) {
        // fold constant exponents such as `1 - 2`
        let exponent = &simplify(exponent);
        let antiderivative = if exponent.as_number() == Some(-1.0) {
            // ∫u^(-1) = ln(u)
            base.clone().apply(UnaryOp::Ln)
        } else {
            // ∫u^n = u^(n + 1) / (n + 1)
            let raised = match exponent.as_number() {
                Some(n) => Expr::Number(n + 1.0),
                None => exponent.clone() + Expr::Number(1.0),
            };
            base.clone().pow(raised.clone()) / raised
        };
        substitute_linear(antiderivative, base, var).ok_or_else(|| non_integrable(expr))
    } else if !base.depends_on(var) {
        // ∫a^u = a^u / ln(a)
        let antiderivative = expr.clone() / base.clone().apply(UnaryOp::Ln);
        substitute_linear(antiderivative, exponent, var).ok_or_else(|| non_integrable(expr))
    } else {
        Err(non_integrable(expr))
    }
}

/// `∫c/d`, where the numerator `c` does not depend on `var`.
fn integrate_reciprocal(
    expr: &Expr,
    numerator: &Expr,
    denominator: &Expr,
    var: &str,
) -> Result<Expr, Error> {
    let integral = match denominator {
        // c/u^n = c * u^(-n)
        Expr::Binary(BinaryOp::Pow, base, exponent) if !exponent.depends_on(var) => {
            let negated = match exponent.as_number() {
                Some(n) => Expr::Number(-n),
                None => -(**exponent).clone(),
            };
            integrate(&(**base).clone().pow(negated), var)?
        },
        // c/u = c * ln(u)
        _ => substitute_linear(denominator.clone().apply(UnaryOp::Ln), denominator, var)
            .ok_or_else(|| non_integrable(expr))?,
    };

    if numerator.is_number(1.0) {
        Ok(integral)
    } else {
        Ok(numerator.clone() * integral)
    }
}

/// Computes an antiderivative of `expr` with respect to the variable `var`. Returns
/// [`NonIntegrable`] if no rule applies.
///
/// Unresolved `int(...)` and `diff(...)` calls inside `expr` are resolved first.
pub fn integrate(expr: &Expr, var: &str) -> Result<Expr, Error> {
    let integral = integrate_expr(expr, var)?;
    trace!("∫ {} d{} = {}", expr, var, integral);
    Ok(integral)
}

fn integrate_expr(expr: &Expr, var: &str) -> Result<Expr, Error> {
    if let Expr::Call(..) = expr {
        let resolved = resolve(expr)?;
        if let Expr::Call(..) = resolved {
            return Err(non_integrable(expr));
        }
        return integrate(&resolved, var);
    }

    if !expr.depends_on(var) {
        // ∫c = c*x
        return Ok(expr.clone() * Expr::sym(var));
    }

    match expr {
        // ∫x = x^2 / 2
        Expr::Symbol(_) => Ok(expr.clone().pow(2.0) / Expr::Number(2.0)),
        Expr::Binary(op, lhs, rhs) => match op {
            BinaryOp::Add => Ok(integrate(lhs, var)? + integrate(rhs, var)?),
            BinaryOp::Sub => Ok(integrate(lhs, var)? - integrate(rhs, var)?),
            BinaryOp::Mul if !lhs.depends_on(var) => Ok((**lhs).clone() * integrate(rhs, var)?),
            BinaryOp::Mul if !rhs.depends_on(var) => Ok((**rhs).clone() * integrate(lhs, var)?),
            BinaryOp::Div if !rhs.depends_on(var) => Ok(integrate(lhs, var)? / (**rhs).clone()),
            BinaryOp::Div if !lhs.depends_on(var) => integrate_reciprocal(expr, lhs, rhs, var),
            BinaryOp::Pow => integrate_power(expr, lhs, rhs, var),
            BinaryOp::Mul | BinaryOp::Div => Err(non_integrable(expr)),
        },
        Expr::Unary(UnaryOp::Neg, operand) => Ok(-integrate(operand, var)?),
        Expr::Unary(op, operand) => function::antiderivative(*op, operand)
            .and_then(|antiderivative| substitute_linear(antiderivative, operand, var))
            .ok_or_else(|| non_integrable(expr)),
        Expr::Number(_) | Expr::Call(..) => Err(non_integrable(expr)),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use crate::numerical::{ctxt::Ctxt, derivative::central_difference};
    use crate::symbolic::expr::parse;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;

    fn integrate_str(source: &str) -> Result<Expr, Error> {
        integrate(&parse(source).unwrap(), "x")
    }

    fn eval_x(expr: &Expr, x: f64) -> f64 {
        expr.eval(&Ctxt::new().with_var("x", x)).unwrap()
    }

    /// Checks that the derivative of the antiderivative of `integrand` matches `integrand` at
    /// each of the given points, using a numerical derivative.
    fn test_antiderivative(integrand: &'static str, points: impl IntoIterator<Item = f64>) {
        let expr = parse(integrand).unwrap();
        let antiderivative = integrate(&expr, "x")
            .unwrap_or_else(|err| panic!("could not integrate \"{integrand}\": {err}"));

        for point in points {
            let ctxt = Ctxt::new().with_var("x", point);
            let expected = expr.eval(&ctxt).unwrap();
            let actual = central_difference(&antiderivative, "x", &ctxt, 1e-5).unwrap();
            assert!(
                (expected - actual).abs() / expected.abs().max(1.0) < 1e-4,
                "for \"{integrand}\" at x={point}, the derivative of `{antiderivative}` was {actual}, expected {expected}",
            );
        }
    }

    #[test]
    fn two_x() {
        let integral = integrate_str("2*x").unwrap();
        assert_eq!(integral.to_string(), "2 * (x^2 / 2)");
        assert_float_relative_eq!(eval_x(&integral, 3.0), 9.0);
    }

    #[test]
    fn square() {
        let integral = integrate_str("x^2").unwrap();
        assert_eq!(integral.to_string(), "x^3 / 3");
        assert_float_relative_eq!(eval_x(&integral, 3.0), 9.0);
    }

    #[test]
    fn constants() {
        assert_eq!(integrate_str("5").unwrap().to_string(), "5 * x");
        assert_eq!(integrate_str("y").unwrap().to_string(), "y * x");
        assert_eq!(integrate_str("sin(y)").unwrap().to_string(), "sin(y) * x");
        assert_eq!(integrate(&parse("x").unwrap(), "t").unwrap().to_string(), "x * t");
    }

    #[test]
    fn reciprocals() {
        assert_eq!(integrate_str("1/x").unwrap().to_string(), "ln(x)");
        assert_eq!(integrate_str("3/x").unwrap().to_string(), "3 * ln(x)");
        assert_eq!(integrate_str("x^-1").unwrap().to_string(), "ln(x)");
        assert_eq!(integrate_str("1/x^2").unwrap().to_string(), "x^(-1) / (-1)");
        assert_float_relative_eq!(eval_x(&integrate_str("1/x^2").unwrap(), 2.0), -0.5);
    }

    #[test]
    fn constant_exponents() {
        for source in ["x^(1-2)", "x^(0-1)", "x^(-2+1)", "1/x^(3-2)"] {
            assert_eq!(integrate_str(source).unwrap().to_string(), "ln(x)", "for \"{source}\"");
        }
        assert_eq!(integrate_str("x^(2-1)").unwrap().to_string(), "x^2 / 2");
        assert_eq!(integrate_str("x^(y+1)").unwrap().to_string(), "x^(y + 1 + 1) / (y + 1 + 1)");
        test_antiderivative("x^(1-3)", [0.5, 2.]);
    }

    #[test]
    fn polynomials() {
        test_antiderivative("3*x^2 + 2*x + 1", [-2., 0., 1.5, 4.]);
        test_antiderivative("x^5 - x^3 / 4 + 7", [-1., 0.5, 2.]);
        test_antiderivative("-x + x^0.5", [0.5, 3.]);
    }

    /// Asserts that differentiating the integral of the polynomial gives back the polynomial, after
    /// simplifying both.
    fn assert_inverse(source: &str) {
        let poly = parse(source).unwrap();
        let integral = integrate(&poly, "x").unwrap();
        let differentiated = simplify(&derivative(&integral, "x").unwrap());
        assert_eq!(differentiated, simplify(&poly), "for \"{source}\", with integral `{integral}`");
    }

    /// Generates a sum of monomials in `x`, each with a coefficient or a constant divisor,
    /// optionally followed by a constant term.
    fn random_polynomial(rng: &mut StdRng) -> String {
        const COEFFICIENTS: [f64; 6] = [2.0, 3.0, 7.0, 0.5, 1.5, 0.25];

        let terms = rng.gen_range(1..=4);
        let mut source = (0..terms)
            .map(|_| {
                let power = rng.gen_range(1..=5);
                let monomial = match power {
                    1 => "x".to_string(),
                    n => format!("x^{n}"),
                };
                if rng.gen_bool(0.5) {
                    format!("{} * {monomial}", COEFFICIENTS[rng.gen_range(0..COEFFICIENTS.len())])
                } else {
                    format!("{monomial} / {}", rng.gen_range(2..=9))
                }
            })
            .collect::<Vec<_>>()
            .join(" + ");

        if rng.gen_bool(0.5) {
            source.push_str(&format!(" + {}", COEFFICIENTS[rng.gen_range(0..COEFFICIENTS.len())]));
        }
        source
    }

    #[test]
    fn differentiate_integral_of_polynomial() {
        for source in ["3*x^2 + 2*x + 1", "x / 2", "x^2/3 + 4", "7*x^2 - x/4", "x^3 - x", "-x^2"] {
            assert_inverse(source);
        }

        let poly = parse("3*x^2 + 2*x + 1").unwrap();
        let differentiated = simplify(&derivative(&integrate(&poly, "x").unwrap(), "x").unwrap());
        assert_eq!(differentiated.to_string(), "3 * x^2 + 2 * x + 1");
    }

    #[test]
    fn differentiate_integral_of_random_polynomials() {
        let mut rng = StdRng::seed_from_u64(0xface);
        for _ in 0..200 {
            assert_inverse(&random_polynomial(&mut rng));
        }
    }

    #[test]
    fn functions() {
        test_antiderivative("sin(x) + cos(x)", [0., 1., 2.]);
        test_antiderivative("exp(x)", [0., 1.]);
        test_antiderivative("sinh(x) - cosh(x)", [-1., 1.]);
        test_antiderivative("sqrt(x)", [0.5, 4.]);
        test_antiderivative("ln(x)", [0.5, 2.]);
        test_antiderivative("-sin(x) / 3", [0., 1.]);
    }

    #[test]
    fn linear_substitution() {
        assert_eq!(integrate_str("cos(2*x)").unwrap().to_string(), "sin(2 * x) / 2");
        test_antiderivative("cos(2*x + 1)", [0., 1.]);
        test_antiderivative("exp(3 - x)", [0., 1.]);
        test_antiderivative("(2*x + 1)^3", [-1., 0., 2.]);
        test_antiderivative("1 / (2*x + 1)", [0., 1., 3.]);
        test_antiderivative("1 / (x + 1)^2", [0., 1.]);
    }

    #[test]
    fn constant_base() {
        test_antiderivative("2^x", [0., 1., 3.]);
        test_antiderivative("e^(2*x)", [0., 0.5]);
    }

    #[test]
    fn nested_integral() {
        let integral = integrate_str("int(x, x)").unwrap();
        assert_float_relative_eq!(eval_x(&integral, 3.0), 4.5);
    }

    #[test]
    fn non_integrable() {
        for source in ["x * sin(x)", "tan(x)", "sin(x^2)", "x^x", "abs(x)", "1 / sin(x)"] {
            let expr = parse(source).unwrap();
            let err = integrate(&expr, "x").unwrap_err();
            assert!(err.is::<NonIntegrable>(), "\"{source}\" should not be integrable");
        }

        let err = integrate_str("x * sin(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NonIntegrable>(),
            Some(&NonIntegrable { expr: parse("x * sin(x)").unwrap() }),
        );
    }

    #[test]
    fn nested_failure_reports_the_failing_part() {
        let err = integrate_str("x + x * sin(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NonIntegrable>(),
            Some(&NonIntegrable { expr: parse("x * sin(x)").unwrap() }),
        );
    }
}
