//! Simplification of expressions.
//!
//! [`simplify`] repeatedly rewrites an expression with the rules in [`rules`] until none of them
//! apply. Each pass walks the tree bottom-up: the children of a node are simplified first, then
//! the first rule that matches the node itself is applied. Passes are repeated until a full pass
//! changes nothing, so the result is a fixpoint and simplifying it again returns it unchanged.
//!
//! The rules are deliberately local (folding constants, removing identities such as `x + 0` and
//! `1 * x`, and normalizing signs), so the simplified expression is never larger than the
//! original, and it evaluates to the same value wherever the original is defined.
//!
//! ```
//! use cas_compute::symbolic::{expr::parse, simplify::simplify};
//!
//! let expr = parse("2 * x^(2 - 1) * 1").unwrap();
//! assert_eq!(simplify(&expr).to_string(), "2 * x");
//! ```

pub mod rules;
pub mod step;

use log::debug;
use super::{expr::Expr, step_collector::StepCollector};

pub use step::Step;

/// The default maximum number of passes made by a [`Simplifier`].
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// Runs simplification passes over expressions.
///
/// The only setting is the maximum number of passes. Every rule moves an expression closer to a
/// fixpoint, so the limit is never reached in practice; reaching it panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplifier {
    max_passes: usize,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self { max_passes: DEFAULT_MAX_PASSES }
    }
}

impl Simplifier {
    /// Creates a simplifier with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of passes.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Simplifies the given expression.
    pub fn simplify(&self, expr: &Expr) -> Expr {
        self.simplify_with(expr, &mut ())
    }

    /// Simplifies the given expression, returning the rules that were applied, in order.
    pub fn simplify_with_steps(&self, expr: &Expr) -> (Expr, Vec<Step>) {
        let mut steps = Vec::new();
        let simplified = self.simplify_with(expr, &mut steps);
        (simplified, steps)
    }

    /// Simplifies the given expression, reporting each applied rule to the step collector.
    ///
    /// # Panics
    ///
    /// Panics if the expression has not stopped changing after the maximum number of passes.
    pub fn simplify_with(&self, expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
        let mut current = expr.clone();
        for pass in 1..=self.max_passes {
            match simplify_pass(&current, step_collector) {
                Some(next) => current = next,
                None => {
                    debug!(
                        "simplified in {} pass(es): {} nodes -> {} nodes",
                        pass,
                        expr.node_count(),
                        current.node_count(),
                    );
                    return current;
                },
            }
        }

        panic!(
            "simplification of `{}` did not terminate after {} passes (last: `{}`)",
            expr,
            self.max_passes,
            current,
        );
    }
}

/// Makes one bottom-up pass over the expression. Returns [`None`] if no rule applied anywhere in
/// the tree.
fn simplify_pass(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let rebuilt = match expr {
        Expr::Number(_) | Expr::Symbol(_) => None,
        Expr::Binary(op, lhs, rhs) => {
            let new_lhs = simplify_pass(lhs, step_collector);
            let new_rhs = simplify_pass(rhs, step_collector);
            if new_lhs.is_none() && new_rhs.is_none() {
                None
            } else {
                Some(Expr::binary(
                    *op,
                    new_lhs.unwrap_or_else(|| (**lhs).clone()),
                    new_rhs.unwrap_or_else(|| (**rhs).clone()),
                ))
            }
        },
        Expr::Unary(op, operand) => simplify_pass(operand, step_collector)
            .map(|operand| operand.apply(*op)),
        Expr::Call(name, args) => {
            let new_args = args.iter()
                .map(|arg| simplify_pass(arg, step_collector))
                .collect::<Vec<_>>();
            if new_args.iter().all(Option::is_none) {
                None
            } else {
                Some(Expr::Call(
                    name.clone(),
                    new_args.into_iter()
                        .zip(args)
                        .map(|(new_arg, arg)| new_arg.unwrap_or_else(|| arg.clone()))
                        .collect(),
                ))
            }
        },
    };

    match rebuilt {
        Some(rebuilt) => Some(rules::all(&rebuilt, step_collector).unwrap_or(rebuilt)),
        None => rules::all(expr, step_collector),
    }
}

/// Simplifies the given expression with the default [`Simplifier`].
pub fn simplify(expr: &Expr) -> Expr {
    Simplifier::default().simplify(expr)
}

/// Simplifies the given expression with the default [`Simplifier`], returning the rules that
/// were applied, in order.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    Simplifier::default().simplify_with_steps(expr)
}

#[cfg(test)]
mod tests {
    use crate::numerical::ctxt::Ctxt;
    use crate::symbolic::expr::{parse, BinaryOp, UnaryOp};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;

    fn simplify_str(source: &str) -> String {
        simplify(&parse(source).unwrap()).to_string()
    }

    /// Generates a random expression in `x` and `y` with at most the given depth.
    fn random_expr(rng: &mut StdRng, depth: usize) -> Expr {
        if depth == 0 || rng.gen_bool(0.25) {
            return match rng.gen_range(0..4) {
                0 => Expr::sym("x"),
                1 => Expr::sym("y"),
                _ => Expr::Number(rng.gen_range(-2..=3) as f64),
            };
        }

        match rng.gen_range(0..10) {
            0 => -random_expr(rng, depth - 1),
            1 => random_expr(rng, depth - 1).apply(UnaryOp::Sin),
            2 => random_expr(rng, depth - 1).apply(UnaryOp::Exp),
            n => {
                let op = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Pow]
                    [n % 5];
                Expr::binary(op, random_expr(rng, depth - 1), random_expr(rng, depth - 1))
            },
        }
    }

    #[test]
    fn identities() {
        assert_eq!(simplify_str("x + 0"), "x");
        assert_eq!(simplify_str("1 * x"), "x");
        assert_eq!(simplify_str("0 * sin(x) + x^1 / 1"), "x");
        assert_eq!(simplify_str("x - x"), "0");
        assert_eq!(simplify_str("-(-(x))"), "x");
    }

    #[test]
    fn constants() {
        assert_eq!(simplify_str("2 + 3 * 4"), "14");
        assert_eq!(simplify_str("x * 2 * 3"), "6 * x");
        assert_eq!(simplify_str("(4 * x) / 2"), "2 * x");
        assert_eq!(simplify_str("x / 2"), "x / 2");
        assert_eq!(simplify_str("1 / 0"), "1 / 0");
        assert_eq!(simplify_str("sin(0) + cos(0)"), "1");
    }

    #[test]
    fn signs() {
        assert_eq!(simplify_str("x + (0 - y)"), "x - y");
        assert_eq!(simplify_str("x - -2"), "x + 2");
        assert_eq!(simplify_str("-(3 * x)"), "(-3) * x");
        assert_eq!(simplify_str("0 - 1 * x"), "-x");
    }

    #[test]
    fn derivative_of_polynomial() {
        let expr = parse("x^3 + x^2 + x + 1").unwrap();
        let derivative = expr.differentiate("x").unwrap();
        assert_eq!(simplify(&derivative).to_string(), "3 * x^2 + 2 * x + 1");
    }

    #[test]
    fn steps() {
        let (simplified, steps) = simplify_with_steps(&parse("(x + 0) * 1").unwrap());
        assert_eq!(simplified, Expr::sym("x"));
        assert_eq!(steps, vec![Step::AddZero, Step::MultiplyOne]);
    }

    #[test]
    fn already_simplified() {
        let (simplified, steps) = simplify_with_steps(&parse("2 * x + sin(y)").unwrap());
        assert_eq!(simplified.to_string(), "2 * x + sin(y)");
        assert!(steps.is_empty());
    }

    #[test]
    #[should_panic(expected = "did not terminate")]
    fn pass_limit() {
        // the constant needs one pass to fold, and a second to confirm nothing else applies
        Simplifier::new().max_passes(1).simplify(&parse("1 + 1").unwrap());
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 5);
            let once = simplify(&expr);
            let twice = simplify(&once);
            assert_eq!(once, twice, "simplifying `{}` is not idempotent", expr);
        }
    }

    #[test]
    fn never_grows() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 5);
            let simplified = simplify(&expr);
            assert!(
                simplified.node_count() <= expr.node_count(),
                "`{}` grew into `{}`",
                expr,
                simplified,
            );
        }
    }

    #[test]
    fn square_root_of_square() {
        let expr = parse("(x^2)^0.5").unwrap();
        let simplified = simplify(&expr);
        assert_eq!(simplified, expr);

        let ctxt = Ctxt::new().with_var("x", -2.0);
        assert_eq!(simplified.eval(&ctxt).unwrap(), 2.0);
        assert_eq!(simplify_str("(x^2)^(1/2)"), "(x^2)^0.5");
    }

    #[test]
    fn preserves_value() {
        let mut rng = StdRng::seed_from_u64(0xca5);
        let bindings = [(0.7, -1.3), (-2.0, 0.5), (-1.5, 2.0)];
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 4);
            let simplified = simplify(&expr);
            for (x, y) in bindings {
                let ctxt = Ctxt::new().with_var("x", x).with_var("y", y);

                // only compare where every part of the original is finite
                let defined = expr.post_order_iter()
                    .all(|sub| sub.eval(&ctxt).map_or(false, f64::is_finite));
                if !defined {
                    continue;
                }

                let expected = expr.eval(&ctxt).unwrap();
                let actual = simplified.eval(&ctxt).unwrap();
                assert!(
                    (expected - actual).abs() <= 1e-9 * expected.abs().max(1.0),
                    "`{}` is {} at x={}, y={}, but its simplified form `{}` is {}",
                    expr,
                    expected,
                    x,
                    y,
                    simplified,
                    actual,
                );
            }
        }
    }

    #[test]
    fn print_parse_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let ctxt = Ctxt::new().with_var("x", 0.7).with_var("y", -1.3);
        for _ in 0..500 {
            let simplified = simplify(&random_expr(&mut rng, 4));
            let text = simplified.to_string();
            let reparsed = parse(&text)
                .unwrap_or_else(|err| panic!("could not parse `{}`: {}", text, err));
            assert_eq!(simplify(&reparsed), simplified, "`{}` did not round trip", text);

            let expected = simplified.eval(&ctxt).unwrap();
            let actual = reparsed.eval(&ctxt).unwrap();
            assert!(
                expected == actual || (expected.is_nan() && actual.is_nan()),
                "`{}` evaluated to {} before printing, and {} after",
                text,
                expected,
                actual,
            );
        }
    }
}
