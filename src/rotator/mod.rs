//! # Axis-Angle Rotation Module
//!
//! `Rotator` rotates heading vectors about a configured axis using Rodrigues'
//! rotation formula. The rotation matrix is memoized: consecutive calls with
//! the same axis and angle reuse the matrix built for the first call.
//!
//! ## Cache States
//!
//! - **Dirty**: no matrix, or the axis changed since the matrix was built.
//!   New rotators start here and `set_axis` always returns here.
//! - **Fresh**: the matrix matches the current axis and the angle recorded
//!   with it.
//!
//! `rotate` rebuilds when Dirty or when the requested angle differs from the
//! recorded one, then applies the matrix. Applying it is not a state change.
//!
//! Angles are radians. Positive angles follow the right-hand rule about the
//! axis.
//!
//! ## Examples
//!
//! ```rust
//! use cartesian::rotator::{deg2rad, Rotator};
//! use cartesian::space::Space;
//!
//! let mut about_z = Rotator::new(Space::UNIT_Z);
//! let heading = about_z.rotate(&Space::UNIT_X, deg2rad(90.0)).unwrap();
//! assert!((heading - Space::UNIT_Y).magnitude() < 1e-9);
//! ```

use log::trace;
use nalgebra::{Matrix3, Vector3};

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::errors::Result;
use crate::space::Space;

/// Convert an angle in degrees to radians
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * DEG2RAD
}

/// Convert an angle in radians to degrees
pub fn rad2deg(radians: f64) -> f64 {
    radians * RAD2DEG
}

/// Validity of the cached rotation matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheState {
    /// Matrix is stale for the current axis
    Dirty,
    /// Matrix was built for the current axis and this angle (radians)
    Fresh { radians: f64 },
}

/// Rotates vectors about a configured axis with a memoized rotation matrix
///
/// The axis need not be normalized; it is normalized each time the matrix
/// is rebuilt. A zero axis is accepted at construction and fails on the
/// first `rotate` with `DivideByZero`.
///
/// Cloning copies the cached matrix together with its state.
#[derive(Debug, Clone)]
pub struct Rotator {
    /// Axis as given by the caller
    axis: Space,
    /// Rotation matrix, meaningful only while `state` is Fresh
    matrix: Matrix3<f64>,
    state: CacheState,
}

impl Rotator {
    /// Creates a rotator about `axis`, starting Dirty
    pub fn new(axis: Space) -> Self {
        Self {
            axis,
            matrix: Matrix3::zeros(),
            state: CacheState::Dirty,
        }
    }

    /// The axis as configured, not normalized
    pub fn axis(&self) -> &Space {
        &self.axis
    }

    /// Replaces the axis and marks the cache Dirty
    ///
    /// Dirty is set even when the new axis equals the old one.
    pub fn set_axis(&mut self, axis: Space) {
        self.axis = axis;
        self.state = CacheState::Dirty;
    }

    /// Current cache state
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// The cached matrix, if it is valid for the current axis
    pub fn matrix(&self) -> Option<&Matrix3<f64>> {
        match self.state {
            CacheState::Fresh { .. } => Some(&self.matrix),
            CacheState::Dirty => None,
        }
    }

    /// Rotates `heading` by `radians` about the axis
    ///
    /// Any finite angle is accepted, including zero, negative angles and
    /// multiples of 2π.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if the axis has zero magnitude. The cache stays Dirty
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartesian::rotator::{deg2rad, Rotator};
    /// use cartesian::space::Space;
    ///
    /// let mut about_x = Rotator::new(Space::new(2.0, 0.0, 0.0));
    /// let v = about_x.rotate(&Space::UNIT_Y, deg2rad(90.0)).unwrap();
    /// assert!((v - Space::UNIT_Z).magnitude() < 1e-9);
    ///
    /// let mut degenerate = Rotator::new(Space::ZERO);
    /// assert!(degenerate.rotate(&Space::UNIT_Y, 1.0).is_err());
    /// ```
    pub fn rotate(&mut self, heading: &Space, radians: f64) -> Result<Space> {
        let stale = match self.state {
            CacheState::Dirty => true,
            CacheState::Fresh { radians: built } => built != radians,
        };

        if stale {
            self.matrix = rotation_matrix(&self.axis.normalized()?, radians);
            self.state = CacheState::Fresh { radians };
            trace!("Rebuilt rotation matrix for axis {} at {} rad", self.axis, radians);
        }

        let rotated = self.matrix * Vector3::from(*heading);
        Ok(Space::from(rotated))
    }
}

/// Rodrigues rotation matrix for a unit `axis` and an angle in radians
fn rotation_matrix(axis: &Space, radians: f64) -> Matrix3<f64> {
    let (ux, uy, uz) = (axis.x, axis.y, axis.z);
    let c = radians.cos();
    let s = radians.sin();
    let t = 1.0 - c;

    Matrix3::new(
        c + ux * ux * t,
        ux * uy * t - uz * s,
        ux * uz * t + uy * s,
        ux * uy * t + uz * s,
        c + uy * uy * t,
        uy * uz * t - ux * s,
        ux * uz * t - uy * s,
        uy * uz * t + ux * s,
        c + uz * uz * t,
    )
}
