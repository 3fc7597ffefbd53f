//! Errors raised while lowering a syntax tree, and by the symbolic algorithms.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;
use super::expr::Expr;

/// The function is not one of the built-in functions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = if self.suggestions.is_empty() {
        "functions must be one of the built-in functions, or `int` / `diff`".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments given to the `{}` function", self.name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.expected,
        self.given
    )
)]
pub struct WrongArity {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// The second argument of `int` or `diff` was not a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected a variable as the second argument of `{}`", self.name),
    labels = ["this should be a variable"],
    help = format!("for example: {}", format!("{}(x^2, x)", self.name).fg(EXPR)),
)]
pub struct ExpectedVariable {
    /// The name of the pseudo-function that was called.
    pub name: String,
}

/// The derivative of a function is not known in closed form.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate the `{}` function symbolically", self.name),
    help = "a numerical derivative may still be computed by evaluating the expression",
)]
pub struct UnsupportedDerivative {
    /// The name of the function.
    pub name: String,
}

/// No integration rule matched the expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("could not find an antiderivative of `{}`", self.expr),
    help = "products of two expressions that depend on the variable, and most compositions of functions, are not supported",
)]
pub struct NonIntegrable {
    /// The expression that could not be integrated.
    pub expr: Expr,
}
