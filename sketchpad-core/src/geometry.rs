//! Geometry primitives shared by all shape variants.

use serde::{Deserialize, Serialize};

/// A 2-D point.
///
/// Used both as a position (`origin`) and as a size or delta (`extent`).
/// The axis-update methods take `Option<f64>` so callers can express
/// "leave this axis alone": script arguments that are missing or fail to
/// parse as numbers become `None` rather than NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move to absolute coordinates. `None` keeps the current value on
    /// that axis.
    pub fn move_to(&mut self, x: Option<f64>, y: Option<f64>) {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
    }

    /// Move by a relative delta. `None` adds zero on that axis.
    pub fn move_by(&mut self, dx: Option<f64>, dy: Option<f64>) {
        self.x += dx.unwrap_or(0.0);
        self.y += dy.unwrap_or(0.0);
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_partial_axis() {
        let mut p = Point::new(3.0, 4.0);
        p.move_to(None, Some(5.0));
        assert_eq!(p, Point::new(3.0, 5.0));

        p.move_to(Some(-1.0), None);
        assert_eq!(p, Point::new(-1.0, 5.0));
    }

    #[test]
    fn move_by_partial_axis() {
        let mut p = Point::new(10.0, 20.0);
        p.move_by(None, Some(5.0));
        assert_eq!(p, Point::new(10.0, 25.0));

        p.move_by(Some(2.5), None);
        assert_eq!(p, Point::new(12.5, 25.0));
    }

    #[test]
    fn move_with_both_none_is_noop() {
        let mut p = Point::new(1.0, 2.0);
        p.move_to(None, None);
        p.move_by(None, None);
        assert_eq!(p, Point::new(1.0, 2.0));
    }
}
