//! Immutable 2D vector used for positions, velocities and forces.
//!
//! Arithmetic is exposed through named operations rather than operator
//! overloads so every use site reads as the formula it implements.

use glam::DVec2;

/// A 2D vector with f64 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(DVec2);

#[allow(clippy::should_implement_trait)]
impl Vector {
    pub const ZERO: Vector = Vector(DVec2::ZERO);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Component-wise sum
    pub fn add(self, other: Vector) -> Vector {
        Vector(self.0 + other.0)
    }

    /// Component-wise difference `self - other`
    pub fn subtract(self, other: Vector) -> Vector {
        Vector(self.0 - other.0)
    }

    /// Scalar multiplication
    pub fn scale(self, factor: f64) -> Vector {
        Vector(self.0 * factor)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    pub fn magnitude(self) -> f64 {
        self.0.length()
    }

    pub fn distance(self, other: Vector) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector pointing from `self` towards `other`.
    ///
    /// Returns `None` when the two points coincide.
    pub fn direction_to(self, other: Vector) -> Option<Vector> {
        (other.0 - self.0).try_normalize().map(Vector)
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn to_array(self) -> [f64; 2] {
        self.0.to_array()
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.0.x, self.0.y)
    }
}
