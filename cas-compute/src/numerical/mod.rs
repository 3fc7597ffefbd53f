//! Numerical evaluation of expressions.

pub mod ctxt;
pub mod derivative;
pub mod error;
pub mod eval;
pub mod trig_mode;
