pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the lexer cannot match is kept as [`TokenKind::Symbol`] tokens, so that the parser can
/// point at it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "3 3. 3.25 .5",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "3."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "3.25"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".5"),
            ],
        );
    }

    #[test]
    fn call_and_power() {
        compare_tokens(
            "int(x_1^2,\tx_1)",
            [
                (TokenKind::Name, "int"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x_1"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Comma, ","),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Name, "x_1"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn implicit_multiplication_is_two_tokens() {
        compare_tokens(
            "2x",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn unknown_characters() {
        compare_tokens(
            "x $ y",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "y"),
            ],
        );
    }
}
