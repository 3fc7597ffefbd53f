//! Splits a line of input into a REPL command and its arguments.

use cas_compute::{consts, symbolic::expr::{UnaryOp, DERIVATIVE, INTEGRAL}};
use cas_error::Error;
use std::ops::Range;
use crate::error::{InvalidVariableName, MissingArgument, UnknownCommand};

/// A slice of the input line, along with its position in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arg<'a> {
    /// The text of the argument.
    pub text: &'a str,

    /// The byte offset of the argument in the line.
    pub offset: usize,
}

impl<'a> Arg<'a> {
    /// Returns the span of the argument in the line.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    /// Returns the argument with leading and trailing whitespace removed.
    pub fn trim(&self) -> Arg<'a> {
        let start = self.text.len() - self.text.trim_start().len();
        Arg {
            text: self.text.trim(),
            offset: self.offset + start,
        }
    }

    /// Moves the spans of an error raised on the argument's text so that they point into the
    /// whole line.
    pub fn shift(&self, mut err: Error) -> Error {
        err.spans = err.spans.into_iter()
            .map(|span| span.start + self.offset..span.end + self.offset)
            .collect();
        err
    }
}

/// A line of input to the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// An expression to simplify, and evaluate if possible.
    Eval(Arg<'a>),

    /// `:let name = expr`
    Let {
        name: Arg<'a>,
        value: Arg<'a>,
    },

    /// `:vars`
    Vars,

    /// `:steps expr`
    Steps(Arg<'a>),

    /// `:deg`
    Deg,

    /// `:rad`
    Rad,
}

/// Returns true if `name` can be bound with `:let`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && consts::get(name).is_none()
        && UnaryOp::from_name(name).is_none()
        && name != INTEGRAL
        && name != DERIVATIVE
}

impl<'a> Command<'a> {
    /// Parses a line of input.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let indent = line.len() - line.trim_start().len();
        let Some(rest) = line[indent..].strip_prefix(':') else {
            return Ok(Self::Eval(Arg { text: line, offset: 0 }));
        };

        let name_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (name, args) = rest.split_at(name_len);
        let command_span = indent..indent + 1 + name_len;
        let args = Arg { text: args, offset: command_span.end };

        let missing = |command, usage| Error::new(
            vec![command_span.clone()],
            MissingArgument { command, usage },
        );

        match name {
            "let" => {
                let usage = ":let <name> = <expr>";
                let eq = args.text.find('=').ok_or_else(|| missing("let", usage))?;
                let name = Arg { text: &args.text[..eq], offset: args.offset }.trim();
                let value = Arg { text: &args.text[eq + 1..], offset: args.offset + eq + 1 };

                if name.text.is_empty() || value.text.trim().is_empty() {
                    return Err(missing("let", usage));
                }
                if !is_valid_name(name.text) {
                    return Err(Error::new(
                        vec![name.span()],
                        InvalidVariableName { name: name.text.to_string() },
                    ));
                }

                Ok(Self::Let { name, value })
            },
            "vars" => Ok(Self::Vars),
            "steps" if args.text.trim().is_empty() => Err(missing("steps", ":steps <expr>")),
            "steps" => Ok(Self::Steps(args)),
            "deg" => Ok(Self::Deg),
            "rad" => Ok(Self::Rad),
            _ => Err(Error::new(
                vec![command_span.clone()],
                UnknownCommand { name: name.to_string() },
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn expression() {
        assert_eq!(Command::parse("x + 1").unwrap(), Command::Eval(Arg { text: "x + 1", offset: 0 }));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse(":vars").unwrap(), Command::Vars);
        assert_eq!(Command::parse("  :deg").unwrap(), Command::Deg);
        assert_eq!(Command::parse(":rad  ").unwrap(), Command::Rad);
    }

    #[test]
    fn steps() {
        assert_eq!(
            Command::parse(":steps x + 0").unwrap(),
            Command::Steps(Arg { text: " x + 0", offset: 6 }),
        );
        assert!(Command::parse(":steps").unwrap_err().is::<MissingArgument>());
    }

    #[test]
    fn let_binding() {
        let line = ":let  y = 2 * x";
        let Command::Let { name, value } = Command::parse(line).unwrap() else {
            panic!("expected a `:let` command");
        };
        assert_eq!(name.text, "y");
        assert_eq!(&line[name.span()], "y");
        assert_eq!(value.text, " 2 * x");
        assert_eq!(&line[value.span()], " 2 * x");
    }

    #[test]
    fn bad_let() {
        assert!(Command::parse(":let y").unwrap_err().is::<MissingArgument>());
        assert!(Command::parse(":let = 2").unwrap_err().is::<MissingArgument>());
        assert!(Command::parse(":let y =").unwrap_err().is::<MissingArgument>());

        for name in ["2y", "pi", "sin", "int", "a-b"] {
            let line = format!(":let {} = 1", name);
            let err = Command::parse(&line).unwrap_err();
            assert_eq!(
                err.downcast_ref::<InvalidVariableName>(),
                Some(&InvalidVariableName { name: name.to_string() }),
            );
            assert_eq!(err.spans, vec![5..5 + name.len()]);
        }
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse(" :quit").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownCommand>(),
            Some(&UnknownCommand { name: "quit".to_string() }),
        );
        assert_eq!(err.spans, vec![1..6]);
    }
}
