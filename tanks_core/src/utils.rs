use std::fmt;

use serde::{Deserialize, Serialize};

/// Point or displacement in world coordinates
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along a heading given in degrees, 0° being +x
    pub fn from_degrees(angle: f64) -> Self {
        let radians = angle.to_radians();
        Self {
            x: radians.cos(),
            y: radians.sin(),
        }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Vector2) -> f64 {
        other.plus(&self.scale(-1.0)).magnitude()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn heading_vectors() {
        let east = Vector2::from_degrees(0.0);
        assert_relative_eq!(east.x, 1.0);
        assert_relative_eq!(east.y, 0.0);

        let south = Vector2::from_degrees(90.0);
        assert_relative_eq!(south.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(south.y, 1.0);
    }

    #[test]
    fn distance_of_345_triangle() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(5.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn display_rounds() {
        assert_eq!(Vector2::new(100.004, -0.5).to_string(), "(100.00, -0.50)");
    }
}
