//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. It's similar to the
//! [`cas_parser::parser::ast::Expr`] nodes produced by [`cas_parser`], with the main difference
//! being that [`Expr`] nodes do not store span information or parentheses, and that function
//! calls are resolved to a known [`UnaryOp`](expr::UnaryOp) when the text is converted.
//!
//! Named constants (`pi` and `e`) are replaced with their values during conversion, so the only
//! symbols left in the tree are variables.
//!
//! ```
//! use cas_compute::symbolic::expr::{parse, BinaryOp, Expr};
//!
//! let expr = parse("x + (y + 2)").unwrap();
//! assert_eq!(expr, Expr::binary(
//!     BinaryOp::Add,
//!     Expr::sym("x"),
//!     Expr::binary(BinaryOp::Add, Expr::sym("y"), Expr::Number(2.0)),
//! ));
//! ```
//!
//! # Calculus
//!
//! [`derivative()`](derivative::derivative) differentiates an expression with the usual rules,
//! and [`integrate()`](integrate::integrate) finds an antiderivative by matching a table of
//! rules. Neither simplifies its output.
//!
//! Integrals and derivatives can also be written in the text itself, as `int(expr, var)` and
//! `diff(expr, var)`. These are kept as [`Expr::Call`] nodes until [`resolve()`](resolve::resolve)
//! replaces them with their results.
//!
//! ```
//! use cas_compute::symbolic::{expr::parse, resolve::resolve, simplify::simplify};
//!
//! let expr = resolve(&parse("diff(x^3, x)").unwrap()).unwrap();
//! assert_eq!(simplify(&expr).to_string(), "3 * x^2");
//! ```
//!
//! # Simplification
//!
//! The output of the calculus functions is cluttered with terms such as `x^(2 - 1) * 1`.
//! [`simplify()`](simplify::simplify) cleans it up with a set of local rewriting rules. See the
//! [`mod@simplify`] module for details.

pub mod derivative;
pub mod error;
pub mod expr;
pub mod integrate;
pub mod resolve;
pub mod simplify;
pub mod step_collector;

pub use expr::Expr;
pub use step_collector::StepCollector;
