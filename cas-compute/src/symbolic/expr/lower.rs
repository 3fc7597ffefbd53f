//! Lowering of the syntax tree produced by `cas_parser` into an [`Expr`].

use cas_error::Error;
use cas_parser::parser::{
    ast::{Binary, Call, Expr as AstExpr, Literal},
    parse as parse_ast,
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::{consts, symbolic::error::{ExpectedVariable, UnknownFunction, WrongArity}};
use levenshtein::levenshtein;
use super::{BinaryOp, Expr, UnaryOp, DERIVATIVE, INTEGRAL};

/// Parses the given text into an [`Expr`].
///
/// Named constants (`pi` and `e`) are replaced by their values. Function calls are checked
/// against the built-in functions, and the pseudo-functions `int` and `diff` are kept as
/// [`Expr::Call`] nodes, to be replaced by [`resolve`](crate::symbolic::resolve::resolve).
pub fn parse(text: &str) -> Result<Expr, Error> {
    Expr::try_from(parse_ast(text)?)
}

/// Returns the names of every function whose name is similar to `name`.
fn suggestions(name: &str) -> Vec<String> {
    UnaryOp::FUNCTIONS
        .iter()
        .map(|op| op.name())
        .chain([INTEGRAL, DERIVATIVE])
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(str::to_owned)
        .collect()
}

/// Lowers a call to `int` or `diff`. The second argument must be a plain variable.
fn lower_pseudo_call(call: Call) -> Result<Expr, Error> {
    let name = call.name.name;
    let given = call.args.len();
    let Ok([expr, var]) = <[AstExpr; 2]>::try_from(call.args) else {
        return Err(Error::new(vec![call.span], WrongArity { name, expected: 2, given }));
    };

    let var_span = var.span();
    match var.innermost() {
        AstExpr::Literal(Literal::Symbol(sym)) if consts::get(&sym.name).is_none() => {
            let var = Expr::Symbol(sym.name.clone());
            Ok(Expr::Call(name, vec![Expr::try_from(expr)?, var]))
        },
        _ => Err(Error::new(vec![var_span], ExpectedVariable { name })),
    }
}

/// Lowers a call to a built-in function of one argument.
fn lower_call(call: Call) -> Result<Expr, Error> {
    if call.name.name == INTEGRAL || call.name.name == DERIVATIVE {
        return lower_pseudo_call(call);
    }

    let Some(op) = UnaryOp::from_name(&call.name.name) else {
        let suggestions = suggestions(&call.name.name);
        return Err(Error::new(vec![call.name.span], UnknownFunction {
            name: call.name.name,
            suggestions,
        }));
    };

    let given = call.args.len();
    let Ok([arg]) = <[AstExpr; 1]>::try_from(call.args) else {
        return Err(Error::new(vec![call.span], WrongArity {
            name: call.name.name,
            expected: 1,
            given,
        }));
    };

    Ok(Expr::try_from(arg)?.apply(op))
}

fn lower_binary(binary: Binary) -> Result<Expr, Error> {
    let op = match binary.op.kind {
        BinOpKind::Add => BinaryOp::Add,
        BinOpKind::Sub => BinaryOp::Sub,
        BinOpKind::Mul => BinaryOp::Mul,
        BinOpKind::Div => BinaryOp::Div,
        BinOpKind::Exp => BinaryOp::Pow,
    };
    Ok(Expr::binary(op, Expr::try_from(*binary.lhs)?, Expr::try_from(*binary.rhs)?))
}

impl TryFrom<AstExpr> for Expr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Ok(Expr::Number(num.value)),
            AstExpr::Literal(Literal::Symbol(sym)) => Ok(consts::get(&sym.name)
                .map(Expr::Number)
                .unwrap_or(Expr::Symbol(sym.name))),
            AstExpr::Paren(paren) => Expr::try_from(paren.into_innermost()),
            AstExpr::Call(call) => lower_call(call),
            AstExpr::Unary(unary) => {
                let operand = Expr::try_from(*unary.operand)?;
                match unary.op.kind {
                    UnaryOpKind::Neg => Ok(-operand),
                }
            },
            AstExpr::Binary(binary) => lower_binary(binary),
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::error::kind;
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;
    use super::*;

    fn x() -> Expr {
        Expr::sym("x")
    }

    #[test]
    fn lower_polynomial() {
        let expr = parse("3*x^2 - x + 1").unwrap();
        assert_eq!(
            expr,
            Expr::Number(3.0) * x().pow(2.0) - x() + Expr::Number(1.0),
        );
    }

    #[test]
    fn lower_parentheses() {
        assert_eq!(parse("((x))").unwrap(), x());
        assert_eq!(
            parse("2 * (x + 1)").unwrap(),
            Expr::Number(2.0) * (x() + Expr::Number(1.0)),
        );
    }

    #[test]
    fn lower_negation() {
        assert_eq!(parse("-x^2").unwrap(), -(x().pow(2.0)));
        assert_eq!(parse("-x*y").unwrap(), -x() * Expr::sym("y"));
    }

    #[test]
    fn lower_constants() {
        assert_eq!(parse("pi").unwrap(), Expr::Number(PI));
        assert_eq!(parse("2*E").unwrap(), Expr::Number(2.0) * Expr::Number(std::f64::consts::E));
    }

    #[test]
    fn lower_functions() {
        assert_eq!(parse("sin(x)").unwrap(), x().apply(UnaryOp::Sin));
        assert_eq!(parse("arccos(x)").unwrap(), x().apply(UnaryOp::Acos));
        assert_eq!(parse("log(x)").unwrap(), x().apply(UnaryOp::Ln));
    }

    #[test]
    fn lower_integral() {
        assert_eq!(
            parse("int(x^2, x)").unwrap(),
            Expr::Call("int".to_string(), vec![x().pow(2.0), x()]),
        );
        assert_eq!(
            parse("diff(sin(t), (t))").unwrap(),
            Expr::Call("diff".to_string(), vec![Expr::sym("t").apply(UnaryOp::Sin), Expr::sym("t")]),
        );
    }

    #[test]
    fn unknown_function() {
        let err = parse("son(x)").unwrap_err();
        let kind = err.downcast_ref::<UnknownFunction>().unwrap();
        assert_eq!(kind.name, "son");
        assert_eq!(kind.suggestions, vec!["sin".to_string()]);
        assert_eq!(err.spans, vec![0..3]);

        let err = parse("foo(x)").unwrap_err();
        assert!(err.downcast_ref::<UnknownFunction>().unwrap().suggestions.is_empty());
    }

    #[test]
    fn wrong_arity() {
        let err = parse("sin(x, y)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<WrongArity>(),
            Some(&WrongArity { name: "sin".to_string(), expected: 1, given: 2 }),
        );

        let err = parse("int(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<WrongArity>(),
            Some(&WrongArity { name: "int".to_string(), expected: 2, given: 1 }),
        );
    }

    #[test]
    fn integral_over_non_variable() {
        let err = parse("int(x, 2)").unwrap_err();
        assert!(err.is::<ExpectedVariable>());
        assert_eq!(err.spans, vec![7..8]);

        let err = parse("int(x, x + 1)").unwrap_err();
        assert!(err.is::<ExpectedVariable>());

        let err = parse("int(x, pi)").unwrap_err();
        assert!(err.is::<ExpectedVariable>());
    }

    #[test]
    fn syntax_errors_pass_through() {
        assert!(parse("").unwrap_err().is::<kind::EmptyExpression>());
        assert!(parse("2x").unwrap_err().is::<kind::ExpectedEof>());
        assert!(parse("(x").unwrap_err().is::<kind::UnclosedParenthesis>());
    }
}
