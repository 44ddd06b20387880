//! Plane geometry: points, bearings and toroidal wrapping.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A point or displacement on the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians)
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Angle of the line from `self` to `other`, in (-pi, pi]
    pub fn bearing_to(self, other: Vec2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Offset that brings `value` back into `[-size/2, size/2]` on a torus of side `size`
pub fn wrap_offset(value: f64, size: f64) -> f64 {
    let half = size / 2.0;
    if (-half..=half).contains(&value) {
        return 0.0;
    }
    (value + half).rem_euclid(size) - half - value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_bearing() {
        let origin = Vec2::ZERO;
        assert_eq!(origin.bearing_to(Vec2::new(1.0, 0.0)), 0.0);
        assert!((origin.bearing_to(Vec2::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-12);
        assert!((origin.bearing_to(Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(100.0, 600.0), 0.0);
        assert!((wrap_offset(301.0, 600.0) + 600.0).abs() < 1e-9);
        assert!((wrap_offset(-301.0, 600.0) - 600.0).abs() < 1e-9);
        // Far outside still lands on the plane
        let x = 1000.0;
        assert!((x + wrap_offset(x, 600.0)).abs() <= 300.0);
    }
}
