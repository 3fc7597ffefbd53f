use cas_error::Error;
use crate::symbolic::expr::{Expr, UnaryOp, INTEGRAL};
use super::{
    ctxt::Ctxt,
    error::{UndefinedVariable, UnresolvedCall, UnresolvedIntegral},
    trig_mode::TrigMode,
};

impl UnaryOp {
    /// Applies the operator to a number, measuring angles in the given trigonometric mode.
    pub fn apply_in(self, x: f64, trig_mode: TrigMode) -> f64 {
        if self.takes_angle() {
            self.apply(trig_mode.to_radians(x))
        } else if self.returns_angle() {
            trig_mode.from_radians(self.apply(x))
        } else {
            self.apply(x)
        }
    }
}

impl Expr {
    /// Evaluates the expression, looking up the values of variables in the given context.
    ///
    /// Arithmetic follows IEEE 754 semantics: dividing by zero, or taking the logarithm of a
    /// negative number, produces an infinity or `NaN` instead of an error.
    pub fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Symbol(name) => ctxt.get_var(name).ok_or_else(|| {
                Error::without_span(UndefinedVariable {
                    name: name.clone(),
                    suggestions: ctxt.similar_vars(name),
                })
            }),
            Expr::Binary(op, lhs, rhs) => Ok(op.apply(lhs.eval(ctxt)?, rhs.eval(ctxt)?)),
            Expr::Unary(op, operand) => Ok(op.apply_in(operand.eval(ctxt)?, ctxt.trig_mode)),
            Expr::Call(name, _) if name == INTEGRAL => Err(Error::without_span(UnresolvedIntegral)),
            Expr::Call(name, _) => Err(Error::without_span(UnresolvedCall { name: name.clone() })),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use crate::symbolic::expr::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval(source: &str, ctxt: &Ctxt) -> Result<f64, Error> {
        parse(source).unwrap().eval(ctxt)
    }

    #[test]
    fn arithmetic() {
        let ctxt = Ctxt::new();
        assert_eq!(eval("1 + 2 * 3", &ctxt).unwrap(), 7.0);
        assert_eq!(eval("(1 + 2) * 3", &ctxt).unwrap(), 9.0);
        assert_eq!(eval("2^3^2", &ctxt).unwrap(), 512.0);
        assert_eq!(eval("-2^2", &ctxt).unwrap(), -4.0);
        assert_eq!(eval("10 - 4 - 3", &ctxt).unwrap(), 3.0);
        assert_eq!(eval("12 / 3 / 2", &ctxt).unwrap(), 2.0);
    }

    #[test]
    fn variables() {
        let ctxt = Ctxt::new().with_var("x", 3.0).with_var("y", 0.5);
        assert_eq!(eval("x^2 + 2*x + 1", &ctxt).unwrap(), 16.0);
        assert_eq!(eval("x * y", &ctxt).unwrap(), 1.5);
    }

    #[test]
    fn functions() {
        let ctxt = Ctxt::new().with_var("x", 2.0);
        assert_float_relative_eq!(eval("sin(x)^2 + cos(x)^2", &ctxt).unwrap(), 1.0);
        assert_float_relative_eq!(eval("exp(ln(x))", &ctxt).unwrap(), 2.0);
        assert_float_relative_eq!(eval("sqrt(x) * sqrt(x)", &ctxt).unwrap(), 2.0);
        assert_float_relative_eq!(eval("log10(1000)", &ctxt).unwrap(), 3.0);
        assert_eq!(eval("abs(-x)", &ctxt).unwrap(), 2.0);
        assert_float_relative_eq!(eval("cosh(x)^2 - sinh(x)^2", &ctxt).unwrap(), 1.0, 1e-6);
    }

    #[test]
    fn degrees() {
        let ctxt = Ctxt::new().with_trig_mode(TrigMode::Degrees);
        assert_float_relative_eq!(eval("sin(90)", &ctxt).unwrap(), 1.0);
        assert_float_relative_eq!(eval("cos(180)", &ctxt).unwrap(), -1.0);
        assert_float_relative_eq!(eval("atan(1)", &ctxt).unwrap(), 45.0);
        assert_float_relative_eq!(eval("asin(1)", &ctxt).unwrap(), 90.0);
    }

    #[test]
    fn ieee_semantics() {
        let ctxt = Ctxt::new();
        assert_eq!(eval("1 / 0", &ctxt).unwrap(), f64::INFINITY);
        assert!(eval("0 / 0", &ctxt).unwrap().is_nan());
        assert!(eval("ln(-1)", &ctxt).unwrap().is_nan());
    }

    #[test]
    fn undefined_variable() {
        let ctxt = Ctxt::new().with_var("rate", 1.0);
        let err = eval("rat + 1", &ctxt).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UndefinedVariable>(),
            Some(&UndefinedVariable {
                name: "rat".to_string(),
                suggestions: vec!["rate".to_string()],
            }),
        );
    }

    #[test]
    fn unresolved_calls() {
        let ctxt = Ctxt::new().with_var("x", 1.0);
        assert!(eval("int(x, x)", &ctxt).unwrap_err().is::<UnresolvedIntegral>());
        assert!(eval("diff(x, x)", &ctxt).unwrap_err().is::<UnresolvedCall>());
    }
}
