//! Named constants recognized by the parser. Each name is replaced by its value when the syntax
//! tree is lowered, so constants never appear as symbols.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

pub const PI: f64 = std::f64::consts::PI;

/// Names of constants, and their values.
pub static CONSTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("pi", PI),
        ("PI", PI),
        ("e", E),
        ("E", E),
    ])
});

/// Returns the value of the constant with the given name, if there is one.
pub fn get(name: &str) -> Option<f64> {
    CONSTS.get(name).copied()
}
