//! The state of a REPL session, and the execution of each line of input.

use cas_compute::{
    numerical::ctxt::Ctxt,
    symbolic::{expr::{parse, Expr}, resolve::resolve, simplify::{simplify, simplify_with_steps}},
    TrigMode,
};
use cas_error::Error;
use log::debug;
use crate::command::{Arg, Command};

/// The variables and settings that persist between lines.
#[derive(Debug, Default)]
pub struct Session {
    ctxt: Ctxt,
}

impl Session {
    /// Creates a session with no variables, using radians.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the evaluation context of the session.
    #[cfg(test)]
    pub fn ctxt(&self) -> &Ctxt {
        &self.ctxt
    }

    /// Parses the argument, and resolves any integrals and derivatives in it.
    fn resolve(&self, arg: Arg) -> Result<Expr, Error> {
        let expr = parse(arg.text).map_err(|err| arg.shift(err))?;
        resolve(&expr)
    }

    /// Simplifies the expression, and evaluates it if all of its variables are defined.
    fn eval(&self, arg: Arg) -> Result<String, Error> {
        let simplified = simplify(&self.resolve(arg)?);
        if let Expr::Number(_) = simplified {
            return Ok(simplified.to_string());
        }

        let bound = simplified.free_symbols()
            .into_iter()
            .all(|name| self.ctxt.get_var(name).is_some());
        if bound {
            let value = simplified.eval(&self.ctxt)?;
            Ok(format!("{} = {}", simplified, value))
        } else {
            Ok(simplified.to_string())
        }
    }

    /// Runs a line of input, returning the text to print.
    pub fn run(&mut self, line: &str) -> Result<String, Error> {
        let command = Command::parse(line)?;
        debug!("running {:?}", command);

        match command {
            Command::Eval(arg) => self.eval(arg),
            Command::Let { name, value } => {
                let value = self.resolve(value)?.eval(&self.ctxt)?;
                self.ctxt.add_var(name.text, value);
                Ok(format!("{} = {}", name.text, value))
            },
            Command::Vars => {
                let vars = self.ctxt.vars();
                if vars.is_empty() {
                    return Ok("no variables defined".to_string());
                }
                Ok(vars.iter()
                    .map(|(name, value)| format!("{} = {}", name, value))
                    .collect::<Vec<_>>()
                    .join("\n"))
            },
            Command::Steps(arg) => {
                let (simplified, steps) = simplify_with_steps(&self.resolve(arg)?);
                let mut lines = steps.iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}", i + 1, step))
                    .collect::<Vec<_>>();
                lines.push(simplified.to_string());
                Ok(lines.join("\n"))
            },
            Command::Deg | Command::Rad => {
                self.ctxt.trig_mode = if command == Command::Deg {
                    TrigMode::Degrees
                } else {
                    TrigMode::Radians
                };
                Ok(format!("trig mode: {}", self.ctxt.trig_mode))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_compute::{numerical::error::UndefinedVariable, symbolic::error::{NonIntegrable, UnknownFunction}};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn expressions() {
        let mut session = Session::new();
        assert_eq!(session.run("2 + 3 * 4").unwrap(), "14");
        assert_eq!(session.run("x * 1 + 0").unwrap(), "x");
        assert_eq!(session.run("int(2*x, x)").unwrap(), "x^2");
        assert_eq!(session.run("diff(x^2, x)").unwrap(), "2 * x");
        assert_eq!(session.run("sqrt(2) * 0").unwrap(), "0");
    }

    #[test]
    fn constant_expressions_are_evaluated() {
        let mut session = Session::new();
        assert_eq!(session.run("1 / 4 + sin(0)").unwrap(), "0.25");
        assert_eq!(session.run("2 * sqrt(4)").unwrap(), "4");
        assert_eq!(session.run("sin(1)").unwrap(), format!("sin(1) = {}", 1f64.sin()));
    }

    #[test]
    fn variables() {
        let mut session = Session::new();
        assert_eq!(session.run(":vars").unwrap(), "no variables defined");
        assert_eq!(session.run(":let y = 2 * 3").unwrap(), "y = 6");
        assert_eq!(session.run(":let a = y + 1").unwrap(), "a = 7");
        assert_eq!(session.run("y * 2").unwrap(), "2 * y = 12");
        assert_eq!(session.run("y + x").unwrap(), "y + x");
        assert_eq!(session.run(":vars").unwrap(), "a = 7\ny = 6");
        assert_eq!(session.ctxt().get_var("a"), Some(7.0));
    }

    #[test]
    fn steps() {
        let mut session = Session::new();
        assert_eq!(session.run(":steps (x + 0) * 1").unwrap(), "1. a + 0 = a\n2. 1 * a = a\nx");
        assert_eq!(session.run(":steps x").unwrap(), "x");
    }

    #[test]
    fn trig_mode() {
        let mut session = Session::new();
        assert_eq!(session.run(":deg").unwrap(), "trig mode: degrees");
        assert_eq!(session.run("sin(90)").unwrap(), "sin(90) = 1");
        assert_eq!(session.run(":rad").unwrap(), "trig mode: radians");
        assert_eq!(session.ctxt().trig_mode, TrigMode::Radians);
    }

    #[test]
    fn errors() {
        let mut session = Session::new();
        assert!(session.run(":let y = z + 1").unwrap_err().is::<UndefinedVariable>());
        assert!(session.run("int(x * sin(x), x)").unwrap_err().is::<NonIntegrable>());
        assert!(session.ctxt().vars().is_empty());
    }

    #[test]
    fn error_spans_point_into_the_line() {
        let mut session = Session::new();
        let line = ":let y = foo(2)";
        let err = session.run(line).unwrap_err();
        assert!(err.is::<UnknownFunction>());
        assert_eq!(&line[err.spans[0].clone()], "foo");
    }
}
