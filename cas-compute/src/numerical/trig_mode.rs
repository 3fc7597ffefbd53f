#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The trigonometric mode of a context. This will affect the evaluation of input to trigonometric
/// functions, and output from inverse trigonometric functions.
///
/// Symbolic algorithms always work in radians; the mode is only applied during evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrigMode {
    /// Use radians.
    #[default]
    Radians,

    /// Use degrees.
    Degrees,
}

impl TrigMode {
    /// Converts an angle measured in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            TrigMode::Radians => angle,
            TrigMode::Degrees => angle.to_radians(),
        }
    }

    /// Converts an angle measured in radians to this mode.
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            TrigMode::Radians => radians,
            TrigMode::Degrees => radians.to_degrees(),
        }
    }
}

impl std::fmt::Display for TrigMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrigMode::Radians => write!(f, "radians"),
            TrigMode::Degrees => write!(f, "degrees"),
        }
    }
}
