//! Compiles an expression into a plain numeric function of one variable.
//!
//! ```
//! use cas_compute::compile;
//!
//! let f = compile("int(2*x, x) + 1", "x").unwrap();
//! assert_eq!(f.call(3.0), 10.0);
//! assert_eq!(f.expr().to_string(), "x^2 + 1");
//! ```

use cas_error::Error;
use log::debug;
use std::fmt;
use crate::numerical::{
    error::{UndefinedVariable, UnresolvedCall, UnresolvedIntegral},
    trig_mode::TrigMode,
};
use crate::symbolic::{
    expr::{parse, Expr, INTEGRAL},
    resolve::resolve,
    simplify::simplify,
};

/// Options for [`compile_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Whether to simplify the expression before building the function. Defaults to `true`.
    ///
    /// Simplifying first produces fewer operations per call, and does not change the value of the
    /// function wherever it is defined.
    pub simplify: bool,

    /// The angle unit used by trigonometric functions. Defaults to [`TrigMode::Radians`].
    pub trig_mode: TrigMode,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            simplify: true,
            trig_mode: TrigMode::default(),
        }
    }
}

impl CompileOptions {
    /// Wraps the given [`CompileOptions`] into a builder for further customization.
    pub fn into_builder(self) -> CompileOptionsBuilder {
        CompileOptionsBuilder(self)
    }
}

/// Helper struct to build a [`CompileOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptionsBuilder(CompileOptions);

impl CompileOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to simplify the expression before building the function.
    pub fn simplify(mut self, simplify: bool) -> Self {
        self.0.simplify = simplify;
        self
    }

    /// Sets the angle unit used by trigonometric functions. See [`TrigMode`] for more
    /// information.
    pub fn trig_mode(mut self, trig_mode: TrigMode) -> Self {
        self.0.trig_mode = trig_mode;
        self
    }

    /// Builds the [`CompileOptions`] struct.
    pub fn build(self) -> CompileOptions {
        self.0
    }
}

type Func = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// A function of one variable, compiled from an expression.
///
/// Calling the function walks a tree of closures built once at compile time; the text is never
/// parsed again, and a call cannot fail.
pub struct CompiledFn {
    expr: Expr,
    var: String,
    func: Func,
}

impl CompiledFn {
    /// Evaluates the function at `x`.
    pub fn call(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// Returns the expression that the function was built from, after resolution and
    /// simplification.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns the name of the variable of the function.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Returns the underlying closure, discarding the expression.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Send + Sync {
        self.func
    }
}

impl fmt::Debug for CompiledFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFn")
            .field("expr", &self.expr.to_string())
            .field("var", &self.var)
            .finish_non_exhaustive()
    }
}

/// Builds the closure tree for an expression whose only free symbol is the variable.
fn build(expr: &Expr, trig_mode: TrigMode) -> Result<Func, Error> {
    let func: Func = match expr {
        Expr::Number(n) => {
            let n = *n;
            Box::new(move |_| n)
        },
        Expr::Symbol(_) => Box::new(|x| x),
        Expr::Binary(op, lhs, rhs) => {
            let op = *op;
            let lhs = build(lhs, trig_mode)?;
            let rhs = build(rhs, trig_mode)?;
            Box::new(move |x| op.apply(lhs(x), rhs(x)))
        },
        Expr::Unary(op, operand) => {
            let op = *op;
            let operand = build(operand, trig_mode)?;
            Box::new(move |x| op.apply_in(operand(x), trig_mode))
        },
        Expr::Call(name, _) if name == INTEGRAL => return Err(Error::without_span(UnresolvedIntegral)),
        Expr::Call(name, _) => return Err(Error::without_span(UnresolvedCall { name: name.clone() })),
    };
    Ok(func)
}

/// Compiles the text into a function of the variable `var`, with the default
/// [`CompileOptions`].
pub fn compile(text: &str, var: &str) -> Result<CompiledFn, Error> {
    compile_with(text, var, &CompileOptions::default())
}

/// Compiles the text into a function of the variable `var`.
///
/// The text is parsed, its `int(...)` and `diff(...)` calls are resolved, and it is optionally
/// simplified. Every variable in the result must be `var`; any other variable is reported as an
/// [`UndefinedVariable`].
pub fn compile_with(text: &str, var: &str, options: &CompileOptions) -> Result<CompiledFn, Error> {
    let mut expr = resolve(&parse(text)?)?;
    if options.simplify {
        expr = simplify(&expr);
    }

    if let Some(name) = expr.free_symbols().into_iter().find(|name| *name != var) {
        return Err(Error::without_span(UndefinedVariable {
            name: name.to_string(),
            suggestions: vec![var.to_string()],
        }));
    }

    let func = build(&expr, options.trig_mode)?;
    debug!("compiled `{}` as a function of {}: {} nodes", text, var, expr.node_count());
    Ok(CompiledFn {
        expr,
        var: var.to_string(),
        func,
    })
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use crate::numerical::ctxt::Ctxt;
    use crate::symbolic::error::{NonIntegrable, UnknownFunction};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn polynomial() {
        let f = compile("x^2 + 2*x + 1", "x").unwrap();
        assert_eq!(f.call(3.0), 16.0);
        assert_eq!(f.call(-1.0), 0.0);
        assert_eq!(f.var(), "x");
    }

    #[test]
    fn matches_evaluation() {
        let source = "sin(x)^2 + cos(x)^2 - exp(x / 3) * ln(x + 4) + sqrt(abs(x))";
        let f = compile(source, "x").unwrap();
        let expr = parse(source).unwrap();
        for x in [-2.5, -1.0, 0.0, 0.5, 3.0] {
            let expected = expr.eval(&Ctxt::new().with_var("x", x)).unwrap();
            assert_float_relative_eq!(f.call(x), expected, 1e-12);
        }
    }

    #[test]
    fn constant_function() {
        let f = compile("2 * pi", "x").unwrap();
        assert_eq!(f.call(5.0), 2.0 * std::f64::consts::PI);
        assert_eq!(f.expr(), &Expr::Number(2.0 * std::f64::consts::PI));
    }

    #[test]
    fn other_variable_name() {
        let f = compile("t^3", "t").unwrap();
        assert_eq!(f.call(2.0), 8.0);
    }

    #[test]
    fn resolves_integrals() {
        let f = compile("int(x, x)", "x").unwrap();
        assert_eq!(f.call(1.0), 0.5);
        assert_eq!(f.expr().to_string(), "x^2 / 2");
    }

    #[test]
    fn without_simplification() {
        let options = CompileOptionsBuilder::new().simplify(false).build();
        let f = compile_with("x + 0", "x", &options).unwrap();
        assert_eq!(f.expr().to_string(), "x + 0");
        assert_eq!(f.call(4.0), 4.0);

        let f = compile("x + 0", "x").unwrap();
        assert_eq!(f.expr().to_string(), "x");
    }

    #[test]
    fn degrees() {
        let options = CompileOptions::default()
            .into_builder()
            .trig_mode(TrigMode::Degrees)
            .build();
        let f = compile_with("sin(x)", "x", &options).unwrap();
        assert_float_relative_eq!(f.call(90.0), 1.0);
        assert_float_relative_eq!(f.call(30.0), 0.5, 1e-12);
    }

    #[test]
    fn undefined_variable() {
        let err = compile("x + y", "x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UndefinedVariable>(),
            Some(&UndefinedVariable { name: "y".to_string(), suggestions: vec!["x".to_string()] }),
        );
    }

    #[test]
    fn cancelled_variable_is_not_an_error() {
        // `y - y` simplifies away before validation
        let f = compile("x + (y - y)", "x").unwrap();
        assert_eq!(f.call(2.0), 2.0);
    }

    #[test]
    fn errors_propagate() {
        assert!(compile("x +", "x").is_err());
        assert!(compile("foo(x)", "x").unwrap_err().is::<UnknownFunction>());
        assert!(compile("int(x * sin(x), x)", "x").unwrap_err().is::<NonIntegrable>());
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let f = compile("x^2", "x").unwrap();
        assert_send_sync(&f);
        let g = f.into_fn();
        assert_eq!(std::thread::spawn(move || g(4.0)).join().unwrap(), 16.0);
    }
}
