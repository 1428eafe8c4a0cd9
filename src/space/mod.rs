//! # Cartesian Three-Space Module
//!
//! This module provides `Space`, the three-component Cartesian value type used
//! for positions, velocities and headings throughout orbital simulation code.
//!
//! ## Coordinate System Convention
//!
//! Components are stored in a standard right-handed Cartesian system as
//! three `f64` values. No normalization or unit conversion happens on
//! construction; values are kept exactly as given.
//!
//! ## Exact Semantics
//!
//! - Equality is exact component-wise IEEE 754 comparison. There is no
//!   tolerance baked into `==`; use the `approx` traits for that.
//! - Division by a scalar, division of a scalar by a vector and
//!   normalization fail with [`SpaceError::DivideByZero`](crate::SpaceError::DivideByZero) when a divisor is
//!   exactly `0.0`. Tiny but nonzero divisors are accepted and may produce
//!   very large components.
//!
//! ## Examples
//!
//! ```rust
//! use cartesian::space::{cross, Space};
//!
//! let a = Space::new(3.0, -4.0, 5.0);
//! let scaled = a * 2.0;
//! assert_eq!((scaled / 2.0).unwrap(), a);
//!
//! assert_eq!(cross(&Space::UNIT_X, &Space::UNIT_Y), Space::UNIT_Z);
//! assert!((Space::ZERO / 0.0).is_err());
//! ```

pub mod parse;

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::{divide_by_zero, Result};

pub use self::parse::parse_or_zero;

/// Three-dimensional Cartesian vector
///
/// A plain value type: freely copied, compared and mutated component by
/// component. Setting one component never touches the others.
///
/// # Construction
///
/// - `Space::default()` is the zero vector
/// - `Space::from_x(x)` and `Space::from_xy(x, y)` leave the missing
///   components at `0.0`
/// - `Space::new(x, y, z)` sets all three
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Space {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Space = Space::new(0.0, 0.0, 0.0);
    /// Unit vector along x (1, 0, 0)
    pub const UNIT_X: Space = Space::new(1.0, 0.0, 0.0);
    /// Unit vector along y (0, 1, 0)
    pub const UNIT_Y: Space = Space::new(0.0, 1.0, 0.0);
    /// Unit vector along z (0, 0, 1)
    pub const UNIT_Z: Space = Space::new(0.0, 0.0, 1.0);

    /// Machine epsilon, for callers doing their own tolerance comparisons
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use cartesian::space::Space;
    ///
    /// let a = Space::new(0.1 + 0.2, 0.0, 0.0);
    /// assert_ne!(a, Space::new(0.3, 0.0, 0.0));
    /// assert_abs_diff_eq!(a, Space::new(0.3, 0.0, 0.0), epsilon = Space::EPSILON);
    /// ```
    pub const EPSILON: f64 = f64::EPSILON;

    /// Creates a new vector from all three components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    ///
    /// let v = Space::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Space { x, y, z }
    }

    /// Creates a vector with only the x component set
    pub const fn from_x(x: f64) -> Self {
        Space::new(x, 0.0, 0.0)
    }

    /// Creates a vector with the x and y components set
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Space::new(x, y, 0.0)
    }

    /// Creates a vector from polar coordinates
    ///
    /// # Arguments
    ///
    /// * `radius` - Distance from the origin
    /// * `theta` - Azimuth in the x-y plane, radians from +x
    /// * `phi` - Polar angle, radians from +z (`PI / 2` lies in the x-y plane)
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = radius * sin(phi) * cos(theta)`
    /// - `y = radius * sin(phi) * sin(theta)`
    /// - `z = radius * cos(phi)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    /// use std::f64::consts::PI;
    ///
    /// let v = Space::from_polar(2.0, PI / 2.0, PI / 2.0);
    /// assert!(v.x.abs() < 1e-15);
    /// assert!((v.y - 2.0).abs() < 1e-15);
    /// assert!(v.z.abs() < 1e-15);
    /// ```
    pub fn from_polar(radius: f64, theta: f64, phi: f64) -> Self {
        let mut v = Space::ZERO;
        v.set_using_polar_coords(radius, theta, phi);
        v
    }

    /// Overwrites all three components from polar coordinates
    ///
    /// See [`Space::from_polar`] for the angle conventions.
    pub fn set_using_polar_coords(&mut self, radius: f64, theta: f64, phi: f64) {
        let sin_phi = phi.sin();
        self.x = radius * sin_phi * theta.cos();
        self.y = radius * sin_phi * theta.sin();
        self.z = radius * phi.cos();
    }

    /// Sets all three components to 0.0 in place
    pub fn zero(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.z = 0.0;
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`, never negative. Computed with
    /// chained `hypot` so components near the limits of `f64` neither
    /// overflow nor underflow; only the zero vector has magnitude 0.0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    ///
    /// assert_eq!(Space::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Space::ZERO.magnitude(), 0.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Squared magnitude `x² + y² + z²`, for comparisons that don't need the root
    ///
    /// Plain sum of squares: overflows to infinity above roughly 1e154 and
    /// underflows to 0.0 below roughly 1e-162 per component.
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector in the same direction
    ///
    /// # Errors
    ///
    /// [`SpaceError::DivideByZero`](crate::SpaceError::DivideByZero) when the
    /// magnitude is exactly `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    ///
    /// let unit = Space::new(3.0, 4.0, 0.0).normalized().unwrap();
    /// assert_eq!(unit, Space::new(0.6, 0.8, 0.0));
    ///
    /// assert!(Space::ZERO.normalized().is_err());
    /// ```
    pub fn normalized(&self) -> Result<Space> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(divide_by_zero("Space::normalized"));
        }
        Ok(Space::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Scales every component by `factor`
    pub fn scale(&self, factor: f64) -> Space {
        Space::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Divides every component by `divisor`
    ///
    /// # Errors
    ///
    /// `DivideByZero` when `divisor` is exactly `0.0`.
    pub fn try_div(&self, divisor: f64) -> Result<Space> {
        if divisor == 0.0 {
            return Err(divide_by_zero("Space / f64"));
        }
        Ok(Space::new(self.x / divisor, self.y / divisor, self.z / divisor))
    }

    /// Divides every component by `divisor` in place
    ///
    /// The vector is left untouched when the divisor is zero.
    ///
    /// # Errors
    ///
    /// `DivideByZero` when `divisor` is exactly `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    ///
    /// let mut v = Space::new(2.0, 4.0, 6.0);
    /// v.try_div_assign(2.0).unwrap();
    /// assert_eq!(v, Space::new(1.0, 2.0, 3.0));
    ///
    /// assert!(v.try_div_assign(0.0).is_err());
    /// assert_eq!(v, Space::new(1.0, 2.0, 3.0));
    /// ```
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<()> {
        *self = self.try_div(divisor)?;
        Ok(())
    }

    /// Divides a scalar by each component: `(n / x, n / y, n / z)`
    ///
    /// All three components are checked before any division happens.
    ///
    /// # Errors
    ///
    /// `DivideByZero` when any component of `denominator` is exactly `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::space::Space;
    ///
    /// let v = Space::scalar_divided_by(2.0, &Space::new(1.0, 1.0, 1.0)).unwrap();
    /// assert_eq!(v, Space::new(2.0, 2.0, 2.0));
    ///
    /// assert!(Space::scalar_divided_by(1.0, &Space::UNIT_X).is_err());
    /// ```
    pub fn scalar_divided_by(numerator: f64, denominator: &Space) -> Result<Space> {
        if denominator.x == 0.0 || denominator.y == 0.0 || denominator.z == 0.0 {
            return Err(divide_by_zero("f64 / Space"));
        }
        Ok(Space::new(
            numerator / denominator.x,
            numerator / denominator.y,
            numerator / denominator.z,
        ))
    }

    /// Calculates the dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`. Identical to `a * b` for two vectors.
    pub fn dot(&self, other: &Space) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// Not commutative: `a.cross(&b) == -b.cross(&a)`.
    pub fn cross(&self, other: &Space) -> Space {
        Space::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// Returns 0.0 when either vector is zero.
    pub fn angular_distance(&self, other: &Space) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();

        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = self.dot(other) / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }
}

/// Vector dot product, same as `a.dot(b)` and `*a * *b`
pub fn dot(a: &Space, b: &Space) -> f64 {
    a.dot(b)
}

/// Vector cross product, same as `a.cross(b)`
pub fn cross(a: &Space, b: &Space) -> Space {
    a.cross(b)
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<space><x>{}</x><y>{}</y><z>{}</z></space>",
            self.x, self.y, self.z
        )
    }
}

impl From<Vector3<f64>> for Space {
    fn from(vec: Vector3<f64>) -> Self {
        Space::new(vec.x, vec.y, vec.z)
    }
}

impl From<Space> for Vector3<f64> {
    fn from(v: Space) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

// Arithmetic operators

impl Add for Space {
    type Output = Space;

    fn add(self, other: Space) -> Space {
        Space::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Space {
    fn add_assign(&mut self, other: Space) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Space {
    type Output = Space;

    fn sub(self, other: Space) -> Space {
        Space::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Space {
    fn sub_assign(&mut self, other: Space) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Neg for Space {
    type Output = Space;

    fn neg(self) -> Space {
        Space::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Space {
    type Output = Space;

    fn mul(self, scalar: f64) -> Space {
        self.scale(scalar)
    }
}

impl Mul<Space> for f64 {
    type Output = Space;

    fn mul(self, v: Space) -> Space {
        v.scale(self)
    }
}

impl MulAssign<f64> for Space {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

/// `a * b` between two vectors is the dot product
impl Mul for Space {
    type Output = f64;

    fn mul(self, other: Space) -> f64 {
        self.dot(&other)
    }
}

/// Division is fallible, so the operator yields a `Result`
impl Div<f64> for Space {
    type Output = Result<Space>;

    fn div(self, divisor: f64) -> Result<Space> {
        self.try_div(divisor)
    }
}

impl Div<Space> for f64 {
    type Output = Result<Space>;

    fn div(self, denominator: Space) -> Result<Space> {
        Space::scalar_divided_by(self, &denominator)
    }
}

// Tolerance comparison, kept out of `PartialEq`

impl AbsDiffEq for Space {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Space {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
