//! Stroke styling.

use serde::{Deserialize, Serialize};

/// Default stroke color.
const DEFAULT_COLOR: &str = "transparent";

/// Default stroke width.
const DEFAULT_WIDTH: f64 = 1.0;

/// An outline style: a color and a width.
///
/// Treated as a value that is replaced wholesale on update; [`Stroke::merge`]
/// builds the replacement, preserving the prior field where the caller
/// passed `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color (any CSS color string).
    pub color: String,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Stroke {
    /// Partial update: `None` preserves the current value of that field.
    pub fn merge(&mut self, color: Option<&str>, width: Option<f64>) {
        if let Some(color) = color {
            self.color = color.to_string();
        }
        if let Some(width) = width {
            self.width = width;
        }
    }
}
