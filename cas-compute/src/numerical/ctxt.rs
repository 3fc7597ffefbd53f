use levenshtein::levenshtein;
use std::collections::HashMap;
use super::trig_mode::TrigMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// Variable names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,
}

impl Ctxt {
    /// Creates a new, empty context, using radians.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given variable to this context, consuming and returning the context.
    pub fn with_var(mut self, name: impl Into<String>, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Sets the trigonometric mode, consuming and returning the context.
    pub fn with_trig_mode(mut self, trig_mode: TrigMode) -> Self {
        self.trig_mode = trig_mode;
        self
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: impl Into<String>, value: f64) {
        self.vars.insert(name.into(), value);
    }

    /// Removes a variable from the context, returning its value if it was defined.
    pub fn remove_var(&mut self, name: &str) -> Option<f64> {
        self.vars.remove(name)
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context, sorted by name.
    pub fn vars(&self) -> Vec<(&str, f64)> {
        let mut vars = self.vars.iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect::<Vec<_>>();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars
    }

    /// Returns the names of the variables whose name is similar to `name`.
    pub fn similar_vars(&self, name: &str) -> Vec<String> {
        let mut similar = self.vars.keys()
            .filter(|var| levenshtein(var, name) < 2)
            .cloned()
            .collect::<Vec<_>>();
        similar.sort();
        similar
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn vars_are_case_sensitive() {
        let ctxt = Ctxt::new().with_var("x", 1.0).with_var("X", 2.0);
        assert_eq!(ctxt.get_var("x"), Some(1.0));
        assert_eq!(ctxt.get_var("X"), Some(2.0));
        assert_eq!(ctxt.vars(), vec![("X", 2.0), ("x", 1.0)]);
    }

    #[test]
    fn replace_and_remove() {
        let mut ctxt = Ctxt::new().with_var("a", 1.0);
        ctxt.add_var("a", 5.0);
        assert_eq!(ctxt.get_var("a"), Some(5.0));
        assert_eq!(ctxt.remove_var("a"), Some(5.0));
        assert_eq!(ctxt.get_var("a"), None);
    }

    #[test]
    fn similar_vars() {
        let ctxt = Ctxt::new().with_var("rate", 1.0).with_var("rates", 2.0).with_var("time", 3.0);
        assert_eq!(ctxt.similar_vars("rat"), vec!["rate".to_string()]);
        assert!(ctxt.similar_vars("x").is_empty());
    }
}
