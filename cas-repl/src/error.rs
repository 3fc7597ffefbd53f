//! Errors in the REPL's own command syntax.

use cas_attrs::ErrorKind;
use cas_error::{ariadne::Fmt, EXPR};

/// The command after the `:` does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", self.name),
    labels = ["this command"],
    help = format!(
        "the available commands are {}",
        ["let", "vars", "steps", "deg", "rad"]
            .iter()
            .map(|cmd| format!("`:{}`", cmd.fg(EXPR)))
            .collect::<Vec<_>>()
            .join(", ")
    ),
)]
pub struct UnknownCommand {
    /// The name of the command.
    pub name: String,
}

/// The command needs an argument that was not given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument to `:{}`", self.command),
    labels = ["this command needs an argument"],
    help = format!("usage: {}", (&self.usage).fg(EXPR)),
)]
pub struct MissingArgument {
    /// The name of the command.
    pub command: &'static str,

    /// How the command is used.
    pub usage: &'static str,
}

/// The name given to `:let` cannot be used as a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be used as a variable name", self.name),
    labels = ["this name"],
    help = "variable names start with a letter or `_`, and cannot be the name of a constant or function",
)]
pub struct InvalidVariableName {
    /// The name that was given.
    pub name: String,
}
