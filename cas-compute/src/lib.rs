//! Symbolic manipulation and numerical evaluation of algebraic expressions.
//!
//! Expressions are parsed from infix text with [`parse`], and can then be differentiated
//! ([`Expr::differentiate`]), integrated ([`integrate`]), simplified ([`simplify`]), evaluated
//! ([`Expr::eval`]), printed back as text (through [`std::fmt::Display`]), or compiled into a
//! plain numeric function of one variable ([`compile`]).
//!
//! ```
//! use cas_compute::{compile, parse, resolve, simplify};
//!
//! let expr = resolve(&parse("int(2*x, x)").unwrap()).unwrap();
//! assert_eq!(simplify(&expr).to_string(), "x^2");
//!
//! let f = compile("x^2 + 2*x + 1", "x").unwrap();
//! assert_eq!(f.call(3.0), 16.0);
//! ```

pub mod compile;
pub mod consts;
pub mod numerical;
pub mod symbolic;

pub use compile::{compile, compile_with, CompileOptions, CompileOptionsBuilder, CompiledFn};
pub use numerical::{ctxt::Ctxt, trig_mode::TrigMode};
pub use symbolic::{
    derivative::derivative,
    expr::{parse, BinaryOp, Expr, UnaryOp},
    integrate::integrate,
    resolve::resolve,
    simplify::{simplify, simplify_with_steps, Simplifier},
};
