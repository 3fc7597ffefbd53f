//! Tokenizer and parser for infix algebraic expressions, such as `3*x^2 - sin(x) / 2` or
//! `int(x^2, x)`.
//!
//! The parser produces an abstract syntax tree ([`parser::ast::Expr`]) in which every node
//! remembers the region of the source it was parsed from, so that errors raised later on can
//! point back at it.

pub mod parser;
pub mod tokenizer;
