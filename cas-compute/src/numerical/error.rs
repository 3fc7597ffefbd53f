//! Errors raised during evaluation.

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = if self.suggestions.is_empty() {
        format!("give {} a value before evaluating the expression", (&self.name).fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Defined variables with a similar name, if any.
    pub suggestions: Vec<String>,
}

/// An integral was evaluated before being resolved into its antiderivative.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot evaluate an unresolved integral",
    labels = ["this integral"],
    help = "resolve the expression first, which replaces `int(...)` with its antiderivative",
)]
pub struct UnresolvedIntegral;

/// A pseudo-function call other than an integral was evaluated before being resolved.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate an unresolved call to `{}`", self.name),
    labels = ["this call"],
    help = format!("resolve the expression first, which replaces `{}(...)` with its result", self.name),
)]
pub struct UnresolvedCall {
    /// The name of the pseudo-function.
    pub name: String,
}
